use color_eyre::eyre::{self, WrapErr};
use custos_adapters::{PostmarkEmailClient, Settings};
use custos_service::{Application, in_memory_state, migrate, postgres_state};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().wrap_err("loading settings")?;
    let config = settings.auth_config();
    let address = settings.application.address();

    let router = match &settings.database {
        Some(database) => {
            let pool = PgPoolOptions::new()
                .connect(database.url.expose_secret())
                .await
                .wrap_err("connecting to PostgreSQL")?;
            migrate(&pool).await.wrap_err("running migrations")?;

            let token = settings
                .email
                .postmark_auth_token
                .clone()
                .ok_or_else(|| eyre::eyre!("email.postmark_auth_token is required with a database"))?;
            let http_client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(settings.email.timeout_secs))
                .build()
                .wrap_err("building email http client")?;
            let mailer =
                PostmarkEmailClient::new(settings.email.postmark_base_url.clone(), token, http_client);

            custos_axum::router(postgres_state(pool, mailer, config))
        }
        None => {
            tracing::warn!("no database configured; using in-memory stores and a mock email sink");
            let (state, _mailer) = in_memory_state(config);
            custos_axum::router(state)
        }
    };

    let app = Application::build(router, &address)
        .await
        .wrap_err_with(|| format!("binding {address}"))?;
    tracing::info!(%address, "listening");
    app.run().await.wrap_err("serving")?;

    Ok(())
}
