use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
    typed_header::TypedHeaderRejection,
};
use tower_http::{
    LatencyUnit,
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use std::{any::Any, sync::Arc};

use crate::{ServerError, expenses};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub credentials: Arc<Credentials>,
}

/// The single username/password pair accepted by basic authentication.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both values must match.
    fn matches(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

async fn auth(
    auth_header: Result<TypedHeader<Authorization<Basic>>, TypedHeaderRejection>,
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Ok(TypedHeader(auth_header)) = auth_header else {
        return Err(ServerError::Unauthorized);
    };

    if !state
        .credentials
        .matches(auth_header.username(), auth_header.password())
    {
        tracing::debug!(username = auth_header.username(), "rejected credentials");
        return Err(ServerError::Unauthorized);
    }

    Ok(next.run(request).await)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("handler panicked: {detail}");

    ServerError::Internal("internal server error".to_string()).into_response()
}

async fn not_found() -> ServerError {
    ServerError::NotFound
}

async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route("/expenses/{id}", get(expenses::get).put(expenses::update))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

/// Layers run outermost first: authentication, request trace, panic recovery.
fn with_middleware(routes: Router<ServerState>, state: ServerState) -> Router {
    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
        .with_state(state)
}

/// Build the application with every route and middleware.
pub fn router(engine: Engine, credentials: Credentials) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
        credentials: Arc::new(credentials),
    };

    with_middleware(routes(), state)
}

/// Serve on `listener` until Ctrl+C or SIGTERM, then drain in-flight requests
/// and close the database pool.
pub async fn run_with_listener(
    engine: Engine,
    credentials: Credentials,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let engine = Arc::new(engine);
    let state = ServerState {
        engine: Arc::clone(&engine),
        credentials: Arc::new(credentials),
    };

    let served = axum::serve(listener, with_middleware(routes(), state))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    tracing::info!("Server shutdown complete");

    close_engine(engine).await;
    served
}

async fn close_engine(engine: Arc<Engine>) {
    let Ok(engine) = Arc::try_unwrap(engine) else {
        tracing::warn!("engine still in use after shutdown, pool released on drop");
        return;
    };

    match engine.close().await {
        Ok(()) => tracing::info!("database connection closed"),
        Err(err) => tracing::error!("{err}"),
    }
}

pub fn spawn_with_listener(
    engine: Engine,
    credentials: Credentials,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, credentials, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, starting shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting shutdown"),
    }
}
