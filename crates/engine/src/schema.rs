//! Table bootstrap.
//!
//! The `expenses` table is created with a single idempotent statement at
//! startup. There is no migration history: changing a column here does not
//! alter an existing table.

use sea_orm::{
    ConnectionTrait,
    sea_query::{ColumnDef, ColumnType, Table, TableCreateStatement},
};

use crate::{ResultEngine, error::DbContext, expenses};

fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(expenses::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(expenses::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(expenses::Column::Title).text())
        .col(ColumnDef::new(expenses::Column::Amount).double())
        .col(ColumnDef::new(expenses::Column::Note).text())
        .col(ColumnDef::new(expenses::Column::Tags).array(ColumnType::Text))
        .to_owned()
}

/// Create the `expenses` table if it does not exist yet.
pub async fn create_expenses_table<C>(db: &C) -> ResultEngine<()>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    db.execute(backend.build(&create_table_statement()))
        .await
        .context("can't create table")?;
    Ok(())
}
