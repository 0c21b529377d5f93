#[cfg(feature = "redis-test")]
mod notify;
mod round_trip;

use gjallar_test_utils::{test_setup_with_all_tables, TestContext, TestError};

use crate::service::update::MatchUpdateService;

/// One registered team viewing match 100, no enemy discovered yet.
async fn setup() -> Result<(TestContext, entity::league_match::Model), TestError> {
    let test = test_setup_with_all_tables!()?;
    let team = test.insert_team(1).await?;
    let match_row = test.insert_match(100, team.id, None).await?;
    Ok((test, match_row))
}
