use contact_submissions::configuration::get_configuration;
use contact_submissions::startup::Application;
use contact_submissions::store::PgSubmissionStore;
use contact_submissions::telemetry::{get_subscriber, init_subscriber};
use std::sync::Arc;

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenvy::dotenv().ok();

    let subscriber = get_subscriber(
        "contact-submissions".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber).expect("Failed to install the tracing subscriber.");

    let configuration = get_configuration().expect("Failed to read configuration.");

    let store = Arc::new(PgSubmissionStore::connect_lazy(&configuration.database));
    if let Err(error) = store.run_migrations().await {
        tracing::error!(
            error.cause_chain = ?error,
            "Database is not ready, submission requests will fail until it is"
        );
    }

    let application = Application::build(&configuration.application, store).await?;
    application.server.launch().await?;

    tracing::info!("Server stopped, closing database connections");
    Ok(())
}
