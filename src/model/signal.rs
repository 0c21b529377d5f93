//! Change signals emitted by the comparator engine.

use std::fmt;

/// Which roster a per-side signal refers to, seen from the owning team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Team,
    Enemy,
}

/// One independently comparable dimension of match state. Used for error
/// reporting when a facet cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    EnemyTeam,
    Suggestion,
    Confirmation,
    Lineup,
    Comments,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facet::EnemyTeam => "enemy-team",
            Facet::Suggestion => "suggestion",
            Facet::Confirmation => "confirmation",
            Facet::Lineup => "lineup",
            Facet::Comments => "comments",
        };
        write!(f, "{}", name)
    }
}

/// A fired outcome of comparing persisted state against a snapshot.
///
/// Signals only ever describe true transitions; re-evaluating converged state
/// produces none, which is what keeps delivery effectively idempotent without
/// any dedup in the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSignal {
    /// The opponent became known for the first time, or changed.
    NewEnemyTeam { enemy_team_id: i64 },
    /// A side placed a new open scheduling suggestion.
    NewSuggestion { author: Side },
    /// The begin time went from unconfirmed to confirmed.
    ScheduleConfirmed,
    /// A side's lineup differs from the persisted one.
    LineupChanged { side: Side },
    /// Unseen comment ids, sorted ascending, own-roster authors excluded.
    NewComments { comment_ids: Vec<i64> },
}
