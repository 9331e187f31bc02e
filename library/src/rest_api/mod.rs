use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    web, HttpResponse, ResponseError,
};
use thiserror::Error;

use crate::db::DbError;

pub mod handlers;
use handlers::mediciones;

/// Plain-text body returned for requests whose JSON body cannot be parsed.
pub const BAD_BODY: &str = "Cuerpo de la petición inválido";

/// Handler failures. Clients only ever see the generic message; the
/// underlying `DbError` is kept for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error en la consulta")]
    List(#[source] DbError),
    #[error("Error al insertar los datos")]
    Insert(#[source] DbError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!("rejected body on {} {}: {}", req.method(), req.path(), err);
        let response = HttpResponse::BadRequest()
            .content_type(ContentType::plaintext())
            .body(BAD_BODY);
        error::InternalError::from_response(err, response).into()
    })
}

pub fn rest_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/mediciones")
            .app_data(json_config())
            .route(web::get().to(mediciones::get_mediciones))
            .route(web::post().to(mediciones::post_mediciones))
            // other methods fall through to the plain not-found response
            .default_service(web::route().to(|| async { HttpResponse::NotFound().finish() })),
    );
}
