pub use super::league_match::Entity as LeagueMatch;
pub use super::league_player::Entity as LeaguePlayer;
pub use super::league_team::Entity as LeagueTeam;
pub use super::match_comment::Entity as MatchComment;
pub use super::match_lineup::Entity as MatchLineup;
pub use super::match_suggestion::Entity as MatchSuggestion;
pub use super::team_channel::Entity as TeamChannel;
pub use super::team_setting::Entity as TeamSetting;
