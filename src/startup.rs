use crate::bound_port::{self, BoundPort};
use crate::catchers::*;
use crate::configuration::ApplicationSettings;
use crate::cors::{preflight, Cors};
use crate::routes::*;
use crate::service::SubmissionService;
use crate::store::SubmissionStore;
use rocket::{Config, Ignite, Rocket};
use std::sync::Arc;

pub struct Application {
    pub server: Rocket<Ignite>,
    /// Resolves once the server is listening.
    pub port: BoundPort,
}

impl Application {
    pub async fn build(
        settings: &ApplicationSettings,
        store: Arc<dyn SubmissionStore>,
    ) -> Result<Self, rocket::Error> {
        let (port_reporter, port) = bound_port::channel();
        let server = rocket::custom(Config {
            address: settings.host,
            port: settings.port.unwrap_or(0),
            ..Config::default()
        })
        .manage(SubmissionService::new(store))
        .attach(port_reporter)
        .attach(Cors::new(&settings.cors))
        .mount("/", routes![index, preflight])
        .mount(
            "/api",
            routes![
                health,
                list_submissions,
                create_submission,
                get_submission,
                delete_submission
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                unprocessable_entity_to_bad_request,
                not_found,
                internal_error,
                any_error
            ],
        )
        .ignite()
        .await?;
        Ok(Self { server, port })
    }
}
