pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod redis;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use redis::RedisTest;

pub mod prelude {
    pub use crate::{test_setup_with_all_tables, test_setup_with_tables, TestBuilder, TestError};
}

/// Build a [`TestContext`] with the given entity tables created in an
/// in-memory SQLite database.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::LeagueTeam)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    ($($entity:expr),+ $(,)?) => {{
        let mut builder = $crate::TestBuilder::new();
        $(builder = builder.with_table($entity);)+
        builder.build().await
    }};
}

/// Build a [`TestContext`] with every Gjallar table created. Most repository
/// tests touch several aggregates, so this is the common case.
#[macro_export]
macro_rules! test_setup_with_all_tables {
    () => {
        $crate::TestBuilder::new().with_all_tables().build().await
    };
}
