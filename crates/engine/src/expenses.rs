//! The module contains the `Expense` type and the `expenses` table entity.
//!
//! Every column except `id` is nullable: nothing validates what clients send,
//! so a row read back with `NULL` values maps to the zero value of the field.
use sea_orm::{ActiveValue, entity::prelude::*};

/// A stored expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: i32,
    pub title: String,
    /// Whole units. Storage keeps a floating point value, which is truncated
    /// toward zero when read.
    pub amount: i64,
    pub note: String,
    pub tags: Vec<String>,
}

/// The writable fields of an expense, used by both insert and update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: i64,
    pub note: String,
    pub tags: Vec<String>,
}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title.unwrap_or_default(),
            amount: model.amount.unwrap_or_default() as i64,
            note: model.note.unwrap_or_default(),
            tags: model.tags.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub title: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub amount: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&ExpenseDraft> for ActiveModel {
    fn from(draft: &ExpenseDraft) -> Self {
        Self {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(Some(draft.title.clone())),
            amount: ActiveValue::Set(Some(draft.amount as f64)),
            note: ActiveValue::Set(Some(draft.note.clone())),
            tags: ActiveValue::Set(Some(draft.tags.clone())),
        }
    }
}
