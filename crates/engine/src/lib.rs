pub use error::EngineError;
pub use expenses::{Expense, ExpenseDraft};
pub use ops::{Engine, EngineBuilder};
pub use schema::create_expenses_table;

mod error;
pub mod expenses;
mod ops;
mod schema;

type ResultEngine<T> = Result<T, EngineError>;
