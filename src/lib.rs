#[macro_use]
extern crate rocket;
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

pub mod bound_port;
pub mod catchers;
pub mod configuration;
pub mod cors;
pub mod domain;
pub mod models;
pub mod routes;
pub mod schema;
pub mod service;
pub mod startup;
pub mod store;
pub mod telemetry;
