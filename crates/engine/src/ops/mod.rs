use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine, error::DbContext};

mod expenses;

/// Owns the database handle and runs every statement against `expenses`.
///
/// The connection is sea-orm's default pool, shared by all request tasks.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Close the pool once no request can use it anymore.
    pub async fn close(self) -> ResultEngine<()> {
        self.database.close().await.context("can't close database")
    }
}

/// Parse a path identifier into the `serial` key type.
///
/// Anything that is not a valid `int4` can never match a row, so it is
/// reported as [`EngineError::NotFound`] without a round trip. This covers
/// text such as `abc` as well as out-of-range integers; Postgres itself would
/// reject a non-numeric literal with a cast error (a 500 to the client), and
/// the service answers 404 instead.
fn parse_id(id: &str) -> ResultEngine<i32> {
    id.parse().map_err(|_| EngineError::NotFound)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
