//! OpenAPI description of the REST routes, generated once at startup from
//! the `utoipa` annotations, plus the Swagger UI page that renders it.
use actix_web::{http::header::ContentType, web, HttpResponse};
use askama::Template;
use thiserror::Error;
use utoipa::{openapi::Server, OpenApi};

use crate::{
    db::model::{Measurement, NewMeasurement},
    rest_api::handlers::mediciones,
};

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API REST de Mediciones",
        version = "1.0.0",
        description = "API para gestionar las mediciones"
    ),
    paths(mediciones::get_mediciones, mediciones::post_mediciones),
    components(schemas(Measurement, NewMeasurement)),
    tags(
        (name = "Mediciones", description = "API para gestionar las mediciones de los sensores de Gas y Temperatura")
    )
)]
pub struct ApiDoc;

#[derive(Template)]
#[template(path = "api_docs.html")]
struct DocsPage<'a> {
    title: &'a str,
    spec_url: &'a str,
}

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("failed to serialize API description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render documentation page: {0}")]
    Template(#[from] askama::Error),
}

/// Rendered documentation, shared read-only by the docs routes.
#[derive(Debug, Clone)]
pub struct ApiDocs {
    document: String,
    page: String,
}

impl ApiDocs {
    /// Generates the description advertising `public_url` as its server.
    pub fn build(public_url: &str) -> Result<ApiDocs, DocsError> {
        let mut openapi = ApiDoc::openapi();
        openapi.servers = Some(vec![Server::new(public_url)]);
        let document = openapi.to_pretty_json()?;

        let page = DocsPage {
            title: &openapi.info.title,
            spec_url: OPENAPI_PATH,
        }
        .render()?;

        Ok(ApiDocs { document, page })
    }

    pub fn document(&self) -> &str {
        &self.document
    }
}

async fn docs_page(docs: web::Data<ApiDocs>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(docs.page.clone())
}

async fn openapi_document(docs: web::Data<ApiDocs>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(docs.document.clone())
}

pub fn docs_config(cfg: &mut web::ServiceConfig) {
    cfg.route(DOCS_PATH, web::get().to(docs_page))
        .route("/api-docs/", web::get().to(docs_page))
        .route(OPENAPI_PATH, web::get().to(openapi_document));
}
