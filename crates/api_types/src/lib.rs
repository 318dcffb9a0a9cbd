use serde::{Deserialize, Deserializer, Serialize};

/// Read `null` as the zero value of `T`, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub mod expense {
    use super::*;

    /// An expense as returned by the API.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Expense {
        pub id: i32,
        pub title: String,
        pub amount: i64,
        pub note: String,
        pub tags: Vec<String>,
    }

    /// Request body for creating or updating an expense.
    ///
    /// Missing or `null` fields take their zero value, and an `id` in the
    /// body is ignored: the identifier always comes from storage or from the
    /// path.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseWrite {
        #[serde(deserialize_with = "null_as_default")]
        pub title: String,
        #[serde(deserialize_with = "null_as_default")]
        pub amount: i64,
        #[serde(deserialize_with = "null_as_default")]
        pub note: String,
        #[serde(deserialize_with = "null_as_default")]
        pub tags: Vec<String>,
    }
}

pub mod error {
    use super::*;

    /// Body of every error response.
    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ErrorMessage {
        pub message: String,
    }
}
