use anyhow::{Context, Result};
use clap::Parser;
use docs_migrator::application::{
    commands::migration::MigrationService,
    dto::MigrationReport,
    ports::{ClockPort, DocumentStorePort, SlugGeneratorPort},
};
use docs_migrator::config::MigrationConfig;
use docs_migrator::domain::document::{DocumentNamingService, DocumentRepository};
use docs_migrator::infrastructure::{
    database, repositories::PostgresDocumentRepository, storage::LocalDocumentStore,
    time::SystemClock, util::DefaultSlugGenerator,
};
use docs_migrator::presentation::cli::CliArgs;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let args = CliArgs::parse();
    let config = MigrationConfig::from_cli(args)?;
    init_tracing();

    tracing::info!(
        host = config.db_host(),
        port = config.db_port(),
        database = config.db_name(),
        user = config.db_user(),
        "connecting to database"
    );
    let pool = database::init_pool(&config)
        .await
        .context("cannot connect to database")?;
    database::ping(&pool).await.context("database ping failed")?;
    tracing::info!("pinged database successfully");

    let repo: Arc<dyn DocumentRepository> = Arc::new(PostgresDocumentRepository::new(
        pool.clone(),
        config.query_timeout(),
    ));
    let store: Arc<DocumentStorePort> = Arc::new(LocalDocumentStore);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let naming = Arc::new(DocumentNamingService::new(Arc::clone(&slugger)));

    let service = MigrationService::new(repo, store, naming, config.layout(), clock);
    tracing::info!(
        source = %service.layout().source_root().display(),
        destination = %service.layout().destination_root().display(),
        "starting migration"
    );

    let report = service.run().await.context("cannot prepare document layout")?;
    log_summary(&report);

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

fn log_summary(report: &MigrationReport) {
    for phase in &report.phases {
        if let Some(error) = &phase.query_error {
            tracing::warn!(
                kind = %phase.kind,
                phase = %phase.phase,
                %error,
                "phase ran on no rows"
            );
        }
        if phase.aborted {
            tracing::warn!(
                kind = %phase.kind,
                phase = %phase.phase,
                "phase aborted after a failed update"
            );
        }
        tracing::info!(
            kind = %phase.kind,
            phase = %phase.phase,
            succeeded = phase.succeeded_count(),
            skipped = phase.skipped_count(),
            failed = phase.failed_count(),
            "phase finished"
        );
    }

    let elapsed = report.finished_at - report.started_at;
    tracing::info!(
        succeeded = report.succeeded_count(),
        skipped = report.skipped_count(),
        failed = report.failed_count(),
        clean = report.is_clean(),
        elapsed_ms = elapsed.num_milliseconds(),
        "done"
    );
}
