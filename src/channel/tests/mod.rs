mod telegram;

use crate::model::message::RenderedMessage;

fn message(mention: bool) -> RenderedMessage {
    RenderedMessage {
        title: "\u{2705} Match date confirmed".to_string(),
        body: "The begin of match day 3 against **T2** is confirmed.".to_string(),
        mention,
    }
}
