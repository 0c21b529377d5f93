//! Comparator engine: diffs persisted match state against a fresh snapshot.
//!
//! Every facet is an independent pure predicate over
//! `(&MatchAggregate, &MatchSnapshot)`; none of them mutates anything, and no
//! facet depends on another's outcome. [`evaluate`] composes them in a fixed
//! order and skips a facet that fails instead of aborting the cycle.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use tracing::warn;

use crate::{
    error::comparison::ComparisonError,
    model::{
        aggregate::MatchAggregate,
        signal::{ChangeSignal, Facet, Side},
        snapshot::{MatchSnapshot, SuggestionAuthor},
    },
};

/// Facet predicates over one persisted match row and one snapshot.
///
/// The two perspective rows of a real-world match get two separate comparers;
/// their evaluations never interfere.
pub struct MatchComparer<'a> {
    old: &'a MatchAggregate,
    new: &'a MatchSnapshot,
}

impl<'a> MatchComparer<'a> {
    pub fn new(old: &'a MatchAggregate, new: &'a MatchSnapshot) -> Self {
        Self { old, new }
    }

    /// The snapshot must describe the same match row the aggregate was loaded
    /// for; anything else means the caller wired a cycle together wrongly.
    fn guard(&self, facet: Facet) -> Result<(), ComparisonError> {
        if self.old.match_row.match_id != self.new.match_id {
            return Err(ComparisonError::new(
                facet,
                format!(
                    "snapshot is for match {} but aggregate holds match {}",
                    self.new.match_id, self.old.match_row.match_id
                ),
            ));
        }
        if self.old.team_external_id != self.new.viewing_team_id {
            return Err(ComparisonError::new(
                facet,
                format!(
                    "snapshot viewed by team {} but aggregate owned by team {}",
                    self.new.viewing_team_id, self.old.team_external_id
                ),
            ));
        }
        Ok(())
    }

    /// A newly known or changed opponent.
    ///
    /// Fires on NULL→known and on known→different; NULL→NULL and an unchanged
    /// id never fire. Returns the enemy's league id when fired.
    pub fn compare_new_enemy_team(&self) -> Result<Option<i64>, ComparisonError> {
        self.guard(Facet::EnemyTeam)?;

        match (self.old.enemy_team_external_id, self.new.enemy_team_id) {
            (None, Some(new_id)) => Ok(Some(new_id)),
            (Some(old_id), Some(new_id)) if old_id != new_id => Ok(Some(new_id)),
            _ => Ok(None),
        }
    }

    /// A new open scheduling suggestion by one side.
    ///
    /// Fires for a side iff the snapshot says that side made the latest
    /// suggestion and the persisted state does not already say so. A snapshot
    /// without an outstanding suggestion never fires, whatever is persisted.
    /// Evaluated once per side; it can never fire for both in one cycle.
    pub fn compare_new_suggestion(&self, of_enemy_team: bool) -> Result<bool, ComparisonError> {
        self.guard(Facet::Suggestion)?;

        let side_author = if of_enemy_team {
            SuggestionAuthor::Enemy
        } else {
            SuggestionAuthor::Team
        };
        Ok(self.new.suggestion_author == side_author
            && self.old.match_row.suggestion_author != side_author)
    }

    /// The begin time transitioned from unconfirmed to confirmed.
    pub fn compare_scheduling_confirmation(&self) -> Result<bool, ComparisonError> {
        self.guard(Facet::Confirmation)?;

        Ok(self.new.begin_confirmed && !self.old.match_row.begin_confirmed)
    }

    /// A side's lineup differs from the persisted one.
    ///
    /// An absent or empty snapshot lineup carries no information and never
    /// fires, even when a non-empty lineup is persisted.
    pub fn compare_lineup(&self, side: Side) -> Result<bool, ComparisonError> {
        self.guard(Facet::Lineup)?;

        let (snapshot_lineup, old_ids) = match side {
            Side::Team => (&self.new.team_lineup, &self.old.team_lineup_ids),
            Side::Enemy => (&self.new.enemy_lineup, &self.old.enemy_lineup_ids),
        };

        let new_ids: BTreeSet<i64> = snapshot_lineup
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|player| player.player_id)
            .collect();

        Ok(!new_ids.is_empty() && new_ids != *old_ids)
    }

    /// Unseen comment ids worth notifying about, sorted ascending.
    ///
    /// Incoming comments are deduplicated pairs of (comment id, author);
    /// anything already stored for this row is skipped, as is anything
    /// authored by the viewing team's own roster. Deletions are never
    /// signaled.
    pub fn compare_new_comments(&self) -> Result<Vec<i64>, ComparisonError> {
        self.guard(Facet::Comments)?;

        let incoming: BTreeSet<(i64, i64)> = self
            .new
            .comments
            .iter()
            .map(|comment| (comment.comment_id, comment.user_id))
            .collect();

        let new_ids = incoming
            .into_iter()
            .filter(|(comment_id, _)| !self.old.stored_comment_ids.contains(comment_id))
            .filter(|(_, user_id)| !self.old.own_roster_ids.contains(user_id))
            .map(|(comment_id, _)| comment_id)
            .collect::<BTreeSet<i64>>();

        Ok(new_ids.into_iter().collect())
    }
}

/// Evaluate every facet and collect the fired signals in a fixed order:
/// enemy team, own suggestion, enemy suggestion, confirmation, own lineup,
/// enemy lineup, comments.
///
/// A facet that fails is logged and skipped; the remaining facets still run.
pub fn evaluate(old: &MatchAggregate, new: &MatchSnapshot) -> Vec<ChangeSignal> {
    let comparer = MatchComparer::new(old, new);
    let mut signals = Vec::new();

    match comparer.compare_new_enemy_team() {
        Ok(Some(enemy_team_id)) => signals.push(ChangeSignal::NewEnemyTeam { enemy_team_id }),
        Ok(None) => {}
        Err(e) => warn!("skipping facet: {}", e),
    }

    for (of_enemy_team, author) in [(false, Side::Team), (true, Side::Enemy)] {
        match comparer.compare_new_suggestion(of_enemy_team) {
            Ok(true) => signals.push(ChangeSignal::NewSuggestion { author }),
            Ok(false) => {}
            Err(e) => warn!("skipping facet: {}", e),
        }
    }

    match comparer.compare_scheduling_confirmation() {
        Ok(true) => signals.push(ChangeSignal::ScheduleConfirmed),
        Ok(false) => {}
        Err(e) => warn!("skipping facet: {}", e),
    }

    for side in [Side::Team, Side::Enemy] {
        match comparer.compare_lineup(side) {
            Ok(true) => signals.push(ChangeSignal::LineupChanged { side }),
            Ok(false) => {}
            Err(e) => warn!("skipping facet: {}", e),
        }
    }

    match comparer.compare_new_comments() {
        Ok(comment_ids) if !comment_ids.is_empty() => {
            signals.push(ChangeSignal::NewComments { comment_ids });
        }
        Ok(_) => {}
        Err(e) => warn!("skipping facet: {}", e),
    }

    signals
}
