use sea_orm::{QueryFilter, QueryOrder, prelude::*};

use crate::{EngineError, Expense, ExpenseDraft, ResultEngine, error::DbContext, expenses};

use super::{Engine, parse_id};

impl Engine {
    /// Return every expense ordered by id. An empty table is an empty list.
    pub async fn expenses(&self) -> ResultEngine<Vec<Expense>> {
        let models = expenses::Entity::find()
            .order_by_asc(expenses::Column::Id)
            .all(&self.database)
            .await
            .context("can't query all expenses")?;

        Ok(models.into_iter().map(Expense::from).collect())
    }

    /// Return the expense identified by `id`, as it appears in the request path.
    pub async fn expense(&self, id: &str) -> ResultEngine<Expense> {
        let id = parse_id(id)?;
        self.expense_by_id(id).await
    }

    /// Insert a new expense. Storage assigns the id.
    pub async fn new_expense(&self, draft: &ExpenseDraft) -> ResultEngine<Expense> {
        let model = expenses::ActiveModel::from(draft)
            .insert(&self.database)
            .await
            .context("can't insert expenses")?;

        Ok(model.into())
    }

    /// Overwrite every field of the expense identified by `id`, then read it back.
    ///
    /// The write does not check that the row exists: an unknown id updates
    /// nothing and the read back reports [`EngineError::NotFound`].
    pub async fn update_expense(&self, id: &str, draft: &ExpenseDraft) -> ResultEngine<Expense> {
        let id = parse_id(id)?;

        expenses::Entity::update_many()
            .set(expenses::ActiveModel::from(draft))
            .filter(expenses::Column::Id.eq(id))
            .exec(&self.database)
            .await
            .context("can't update expenses")?;

        self.expense_by_id(id).await
    }

    async fn expense_by_id(&self, id: i32) -> ResultEngine<Expense> {
        expenses::Entity::find_by_id(id)
            .one(&self.database)
            .await
            .context("can't query expenses")?
            .map(Expense::from)
            .ok_or(EngineError::NotFound)
    }
}
