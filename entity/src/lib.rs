pub mod league_match;
pub mod league_player;
pub mod league_team;
pub mod match_comment;
pub mod match_lineup;
pub mod match_suggestion;
pub mod prelude;
pub mod team_channel;
pub mod team_setting;
