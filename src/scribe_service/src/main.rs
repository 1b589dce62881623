use color_eyre::eyre::Result;
use reqwest::Client as HttpClient;
use scribe_adapters::{
    Argon2Hasher, MongoDatabase, RelayEmailClient, ResetEmailNotifier, Settings, http::Ports,
};
use scribe_core::Email;
use scribe_service::{
    DocumentPorts, ScribeService, reset_token_backend, seed_admin, tracing::init_tracing,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    let database = MongoDatabase::connect(&settings.database).await?;
    let reset_tokens = reset_token_backend(&settings, &database)?;

    let http_client = HttpClient::builder()
        .timeout(settings.email_client.timeout())
        .build()?;

    let email_client = RelayEmailClient::new(
        settings.email_client.base_url.clone(),
        Email::parse(settings.email_client.sender.as_str())?,
        settings.email_client.auth_token.clone(),
        http_client,
    );
    let notifier = ResetEmailNotifier::new(email_client, settings.server.base_url.clone());

    let ports = DocumentPorts::build(
        &database,
        reset_tokens,
        Argon2Hasher::default(),
        &settings.jwt,
        notifier,
    )
    .await?;

    if ports.users_were_empty() {
        seed_admin(ports.users(), ports.hasher(), &settings.admin).await?;
    }

    let listener = tokio::net::TcpListener::bind(&settings.server.address).await?;
    tracing::info!("Starting scribe...");

    ScribeService::new(ports)
        .run(listener, &settings.server.allowed_origins)
        .await?;

    Ok(())
}
