//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`NotFound`] thrown when no expense matches the requested identifier.
//! - [`Database`] thrown when a statement fails, carrying what the engine was
//!   doing when it failed.
//!
//!  [`NotFound`]: EngineError::NotFound
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

use crate::ResultEngine;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("expenses not found")]
    NotFound,
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: DbErr,
    },
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound, Self::NotFound) => true,
            (
                Self::Database {
                    context: a,
                    source: err_a,
                },
                Self::Database {
                    context: b,
                    source: err_b,
                },
            ) => a == b && err_a.to_string() == err_b.to_string(),
            _ => false,
        }
    }
}

/// Attach the failing operation to a database error.
pub(crate) trait DbContext<T> {
    fn context(self, context: &'static str) -> ResultEngine<T>;
}

impl<T> DbContext<T> for Result<T, DbErr> {
    fn context(self, context: &'static str) -> ResultEngine<T> {
        self.map_err(|source| EngineError::Database { context, source })
    }
}
