use std::{io, sync::Arc};

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use mediciones::{docs_config, rest_config, Actions, ApiDocs, Config, MysqlStore};

fn startup_error<E: std::fmt::Display>(context: &str, err: E) -> io::Error {
    log::error!("{}: {}", context, err);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| startup_error("invalid configuration", e))?;

    // set up database connection pool and the executor workers using it
    let store = Arc::new(MysqlStore::new(
        &config.database_url,
        config.pool_size,
        config.acquire_timeout,
    ));
    let db_actions = Actions::start(store.clone(), config.pool_size as usize);

    // report database reachability without holding up startup
    actix_web::rt::spawn(async move {
        match web::block(move || store.probe()).await {
            Ok(Ok(())) => log::info!("database connection established"),
            Ok(Err(err)) => log::warn!("could not connect to the database: {}", err),
            Err(err) => log::warn!("database probe did not run: {}", err),
        }
    });

    let docs = web::Data::new(
        ApiDocs::build(&config.public_url).map_err(|e| startup_error("api docs", e))?,
    );

    log::info!("REST API docs at {}/api-docs/", config.public_url);
    log::info!("measurements served at {}/mediciones", config.public_url);

    HttpServer::new(move || {
        App::new()
            // enable logger
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            // db actions
            .app_data(web::Data::new(db_actions.clone()))
            .app_data(docs.clone())
            .configure(rest_config)
            .configure(docs_config)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
