use api_types::error::ErrorMessage;
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use engine::EngineError;

pub use server::{Credentials, router, run_with_listener, spawn_with_listener};

mod expenses;
mod server;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{Expense, ExpenseWrite};
    }

    pub mod error {
        pub use api_types::error::ErrorMessage;
    }
}

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    BadRequest(String),
    Unauthorized,
    NotFound,
    MethodNotAllowed,
    Internal(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::NotFound => StatusCode::NOT_FOUND,
        EngineError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Engine(err) => {
                let status = status_for_engine_error(&err);
                if status.is_server_error() {
                    tracing::error!("{err}");
                }
                (status, err.to_string())
            }
            ServerError::BadRequest(err) => (StatusCode::BAD_REQUEST, err),
            ServerError::Unauthorized => {
                let mut res = (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorMessage {
                        message: "Unauthorized".to_string(),
                    }),
                )
                    .into_response();
                res.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static("Basic realm=\"Restricted\""),
                );
                return res;
            }
            ServerError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            ServerError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            ServerError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err),
        };

        (status, Json(ErrorMessage { message })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
