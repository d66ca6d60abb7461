use portfolio_admin::{AdminState, constants::START_TIME, settings::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let started = *START_TIME;
    let mut state = AdminState::new(&config)?;

    tracing::info!(
        "Syncing portfolio sections from {} (admin v{})",
        config.base_url(),
        env!("CARGO_PKG_VERSION")
    );
    state.refresh_all().await;

    tracing::info!(
        educations = state.educations.records().len(),
        internships = state.internships.records().len(),
        projects = state.projects.records().len(),
        skills = state.skills.records().len(),
        elapsed_ms = (chrono::Utc::now() - started).num_milliseconds(),
        "Initial sync finished"
    );

    for toast in state.notifier.snapshot() {
        tracing::warn!("{}: {}", toast.title, toast.message);
    }

    Ok(())
}
