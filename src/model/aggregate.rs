//! The comparator's view of persisted match state.

use std::collections::BTreeSet;

/// Everything the comparator needs to know about one persisted match row,
/// loaded in one place so facet evaluation itself stays pure and free of I/O.
///
/// All id sets hold league-platform external ids, matching what snapshots
/// carry; database surrogate keys never reach the comparator.
#[derive(Debug, Clone)]
pub struct MatchAggregate {
    pub match_row: entity::league_match::Model,
    /// External team id of the owning team.
    pub team_external_id: i64,
    /// External team id of the known enemy, if discovered.
    pub enemy_team_external_id: Option<i64>,
    /// External player ids of the owning side's persisted lineup.
    pub team_lineup_ids: BTreeSet<i64>,
    /// External player ids of the enemy side's persisted lineup.
    pub enemy_lineup_ids: BTreeSet<i64>,
    /// Comment ids already persisted for this match row.
    pub stored_comment_ids: BTreeSet<i64>,
    /// External player ids currently on the owning team's roster; comments by
    /// these authors are the team's own and never signaled back to it.
    pub own_roster_ids: BTreeSet<i64>,
}
