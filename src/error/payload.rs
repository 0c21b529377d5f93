//! Payload normalization errors.

use thiserror::Error;

/// A raw match payload is missing fields the snapshot builder requires.
///
/// The affected match is skipped for this cycle; nothing is mutated and no
/// notification is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The payload has no match section at all.
    #[error("payload has no match section")]
    MissingMatchSection,

    /// The payload's match id field is absent.
    #[error("payload has no match id")]
    MissingMatchId,

    /// Both of the payload's team id fields are absent.
    #[error("payload has no team id fields")]
    MissingTeamIds,

    /// The viewing team matches neither side of the payload, so no
    /// orientation can be established.
    #[error("viewing team {viewing_team_id} is neither side of match {match_id}")]
    ViewingTeamNotInMatch { viewing_team_id: i64, match_id: i64 },
}
