use clap::Parser;

mod settings;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP service for recording expenses.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file, with or without the `.toml` extension.
    #[arg(long, env = "EXPENSES_CONFIG", default_value = "settings")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expenses={level},server={level},engine={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    let db = match connect(&settings.database).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("failed to initialize database: {err}");
            return Err(err);
        }
    };

    let engine = engine::Engine::builder().database(db).build().await?;

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    let credentials = server::Credentials::new(settings.auth.username, settings.auth.password);
    server::run_with_listener(engine, credentials, listener).await?;
    Ok(())
}

async fn connect(config: &settings::Database) -> Result<sea_orm::DatabaseConnection, BoxError> {
    let database = sea_orm::Database::connect(&config.url).await?;
    engine::create_expenses_table(&database).await?;
    Ok(database)
}
