use std::io;

use editor_vote::{
    build_rocket,
    captcha::CaptchaVerifier,
    config::Config,
    ledger::VoteLedger,
    routes::AppState,
    store::SnapshotStore,
};
use shared::Catalog;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 Starting editor vote server");

    let config = Config::load()?;

    if !config.static_dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("static directory {} does not exist", config.static_dir.display()),
        )
        .into());
    }

    let ledger = VoteLedger::open(Catalog::editors(), SnapshotStore::new(&config.votes_file));
    let verifier = CaptchaVerifier::new(config.turnstile_secret.clone())?;
    let state = AppState::new(ledger, verifier);

    let figment = rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port));

    info!("Listening on {}:{}", config.address, config.port);

    build_rocket(figment, state, &config.static_dir)
        .launch()
        .await?;

    Ok(())
}
