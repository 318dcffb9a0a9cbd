//! Expenses API endpoints

use api_types::expense::{Expense, ExpenseWrite};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::ExpenseDraft;

use crate::{ServerError, server::ServerState};

fn map_expense(expense: engine::Expense) -> Expense {
    Expense {
        id: expense.id,
        title: expense.title,
        amount: expense.amount,
        note: expense.note,
        tags: expense.tags,
    }
}

fn parse_draft(
    payload: Result<Json<ExpenseWrite>, JsonRejection>,
) -> Result<ExpenseDraft, ServerError> {
    let Json(payload) = payload.map_err(|err| ServerError::BadRequest(err.body_text()))?;

    Ok(ExpenseDraft {
        title: payload.title,
        amount: payload.amount,
        note: payload.note,
        tags: payload.tags,
    })
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Expense>>, ServerError> {
    let expenses = state
        .engine
        .expenses()
        .await?
        .into_iter()
        .map(map_expense)
        .collect();

    Ok(Json(expenses))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Expense>, ServerError> {
    let expense = state.engine.expense(&id).await?;
    Ok(Json(map_expense(expense)))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseWrite>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), ServerError> {
    let draft = parse_draft(payload)?;
    let expense = state.engine.new_expense(&draft).await?;
    tracing::debug!(id = expense.id, "expense created");

    Ok((StatusCode::CREATED, Json(map_expense(expense))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ExpenseWrite>, JsonRejection>,
) -> Result<Json<Expense>, ServerError> {
    let draft = parse_draft(payload)?;
    let expense = state.engine.update_expense(&id, &draft).await?;

    Ok(Json(map_expense(expense)))
}
