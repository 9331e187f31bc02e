#[macro_use]
extern crate diesel;

pub mod api_docs;
pub use api_docs::{docs_config, ApiDocs};

pub mod config;
pub use config::Config;

pub mod db;
pub use db::{Actions, MeasurementStore, MysqlStore};

pub mod rest_api;
pub use rest_api::rest_config;

pub mod schema;
