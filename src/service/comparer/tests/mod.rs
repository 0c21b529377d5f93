mod enemy_team;

use crate::model::{aggregate::MatchAggregate, snapshot::MatchSnapshot};
use crate::util::test::{aggregate, snapshot};

/// Aggregate and snapshot for the same match, both seen by team 1.
fn fixtures() -> (MatchAggregate, MatchSnapshot) {
    (aggregate(1, 1), snapshot(1, 1))
}
