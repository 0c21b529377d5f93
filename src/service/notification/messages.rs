//! Message kinds and their channel-agnostic rendering.
//!
//! Every fired signal maps to at most one message kind. A kind owns two
//! static properties: the settings key a team can toggle it with, and whether
//! delivery should actively ping subscribers ("mentionable"). Rendering
//! happens once per signal; fan-out to channels copies the rendered message.

use chrono::NaiveDateTime;

use crate::{
    model::{
        message::RenderedMessage,
        signal::{ChangeSignal, Side},
        snapshot::ConfirmationSource,
    },
    util::time::format_begin,
};

/// Keycap emojis used to number suggestion lists.
const EMOJI_NUMBERS: [&str; 3] = ["1\u{fe0f}\u{20e3}", "2\u{fe0f}\u{20e3}", "3\u{fe0f}\u{20e3}"];

/// The notification kinds Gjallar can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    NewEnemyTeam,
    TeamNewTimeSuggestion,
    EnemyNewTimeSuggestion,
    ScheduleConfirmation,
    NewEnemyLineup,
    NewComments,
}

impl MessageKind {
    /// The kind a signal renders as, if any. An own-side lineup change is
    /// tracked but never announced.
    pub fn for_signal(signal: &ChangeSignal) -> Option<Self> {
        match signal {
            ChangeSignal::NewEnemyTeam { .. } => Some(Self::NewEnemyTeam),
            ChangeSignal::NewSuggestion { author: Side::Team } => Some(Self::TeamNewTimeSuggestion),
            ChangeSignal::NewSuggestion {
                author: Side::Enemy,
            } => Some(Self::EnemyNewTimeSuggestion),
            ChangeSignal::ScheduleConfirmed => Some(Self::ScheduleConfirmation),
            ChangeSignal::LineupChanged { side: Side::Enemy } => Some(Self::NewEnemyLineup),
            ChangeSignal::LineupChanged { side: Side::Team } => None,
            ChangeSignal::NewComments { .. } => Some(Self::NewComments),
        }
    }

    /// Settings key a team toggles this kind with. Absent setting = enabled.
    pub fn settings_key(&self) -> &'static str {
        match self {
            Self::NewEnemyTeam => "new_enemy_team",
            Self::TeamNewTimeSuggestion => "team_scheduling_suggestion",
            Self::EnemyNewTimeSuggestion => "enemy_scheduling_suggestion",
            Self::ScheduleConfirmation => "scheduling_confirmation",
            Self::NewEnemyLineup => "new_enemy_lineup",
            Self::NewComments => "new_comments",
        }
    }

    /// Whether delivery should ping subscribers. Static per kind; own-team
    /// echoes stay quiet.
    pub fn mentionable(&self) -> bool {
        match self {
            Self::TeamNewTimeSuggestion => false,
            _ => true,
        }
    }
}

/// Everything the renderers may reference about the match being announced.
/// Assembled by the update service from the fresher of snapshot and store.
#[derive(Debug, Clone, Default)]
pub struct MatchMessageContext {
    pub match_id: i64,
    pub match_day: Option<i32>,
    /// Display name of the opponent, if known.
    pub enemy_name: Option<String>,
    pub begin: Option<NaiveDateTime>,
    pub suggestions: Vec<NaiveDateTime>,
    /// Account handles of the announced enemy lineup.
    pub enemy_lineup: Vec<String>,
    pub confirmation_source: Option<ConfirmationSource>,
}

impl MatchMessageContext {
    fn match_label(&self) -> String {
        match self.match_day {
            Some(day) => format!("match day {}", day),
            None => format!("match {}", self.match_id),
        }
    }

    fn enemy_label(&self) -> &str {
        self.enemy_name.as_deref().unwrap_or("TBD")
    }
}

/// Render the message for one signal. Callers guarantee the kind matches the
/// signal; mismatches render the generic parts and skip signal data.
pub fn render(kind: MessageKind, signal: &ChangeSignal, ctx: &MatchMessageContext) -> RenderedMessage {
    let (title, body) = match kind {
        MessageKind::NewEnemyTeam => (
            "\u{2694} New opponent".to_string(),
            format!(
                "Your opponent for {} is now known: **{}**.",
                ctx.match_label(),
                ctx.enemy_label(),
            ),
        ),
        MessageKind::TeamNewTimeSuggestion => (
            "\u{1f4c6} New date proposed by your team".to_string(),
            format!(
                "Your team proposed {} for {}:\n{}",
                plural_dates(ctx.suggestions.len()),
                ctx.match_label(),
                numbered_dates(&ctx.suggestions),
            ),
        ),
        MessageKind::EnemyNewTimeSuggestion => (
            "\u{1f4c6} New date proposed by an opponent".to_string(),
            format!(
                "**{}** proposed {} for {}:\n{}",
                ctx.enemy_label(),
                plural_dates(ctx.suggestions.len()),
                ctx.match_label(),
                numbered_dates(&ctx.suggestions),
            ),
        ),
        MessageKind::ScheduleConfirmation => (
            "\u{2705} Match date confirmed".to_string(),
            confirmation_body(ctx),
        ),
        MessageKind::NewEnemyLineup => (
            "\u{1f4d1} New lineup of the opponent".to_string(),
            format!(
                "**{}** submitted a lineup for {}:\n{}",
                ctx.enemy_label(),
                ctx.match_label(),
                ctx.enemy_lineup.join(", "),
            ),
        ),
        MessageKind::NewComments => {
            let count = match signal {
                ChangeSignal::NewComments { comment_ids } => comment_ids.len(),
                _ => 0,
            };
            (
                "\u{1f4ac} New comments".to_string(),
                format!(
                    "There {} on the page of {}.",
                    plural_comments(count),
                    ctx.match_label(),
                ),
            )
        }
    };

    RenderedMessage {
        title,
        body,
        mention: kind.mentionable(),
    }
}

fn confirmation_body(ctx: &MatchMessageContext) -> String {
    let begin = ctx
        .begin
        .map(format_begin)
        .unwrap_or_else(|| "an agreed time".to_string());
    match ctx.confirmation_source {
        Some(ConfirmationSource::AutoConfirm) => format!(
            "The begin of {} was confirmed automatically: {}.",
            ctx.match_label(),
            begin,
        ),
        Some(ConfirmationSource::AdminChange) => format!(
            "An admin set the begin of {}: {}.",
            ctx.match_label(),
            begin,
        ),
        _ => format!(
            "The begin of {} against **{}** is confirmed: {}.",
            ctx.match_label(),
            ctx.enemy_label(),
            begin,
        ),
    }
}

fn numbered_dates(dates: &[NaiveDateTime]) -> String {
    dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let marker = EMOJI_NUMBERS.get(i).copied().unwrap_or("\u{2022}");
            format!("{} {}", marker, format_begin(*date))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn plural_dates(count: usize) -> &'static str {
    if count == 1 {
        "a new date"
    } else {
        "new dates"
    }
}

fn plural_comments(count: usize) -> String {
    if count == 1 {
        "is a new comment".to_string()
    } else {
        format!("are {} new comments", count)
    }
}
