use crate::{
    db::{Actions, DbError, InsertMeasurement, ListMeasurements, Measurement, NewMeasurement},
    rest_api::ApiError,
};
use actix::prelude::*;
use actix_web::{web, HttpResponse};

/// Obtiene todas las mediciones
#[utoipa::path(
    get,
    path = "/mediciones",
    tag = "Mediciones",
    responses(
        (status = 200, description = "Lista de todas las mediciones", body = [Measurement]),
        (status = 500, description = "Error en la consulta", body = String, content_type = "text/plain")
    )
)]
pub async fn get_mediciones(actions: web::Data<Addr<Actions>>) -> Result<HttpResponse, ApiError> {
    let rows = actions
        .send(ListMeasurements)
        .await
        .map_err(DbError::from)
        .and_then(|res| res)
        .map_err(|err| {
            log::error!("Error: listing mediciones: {}", err);
            ApiError::List(err)
        })?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Agrega una nueva medición
#[utoipa::path(
    post,
    path = "/mediciones",
    tag = "Mediciones",
    request_body = NewMeasurement,
    responses(
        (status = 201, description = "Medición creada exitosamente", body = Measurement),
        (status = 400, description = "Cuerpo de la petición inválido", body = String, content_type = "text/plain"),
        (status = 500, description = "Error al insertar los datos", body = String, content_type = "text/plain")
    )
)]
pub async fn post_mediciones(
    web::Json(new): web::Json<NewMeasurement>,
    actions: web::Data<Addr<Actions>>,
) -> Result<HttpResponse, ApiError> {
    let created = actions
        .send(InsertMeasurement(new))
        .await
        .map_err(DbError::from)
        .and_then(|res| res)
        .map_err(|err| {
            log::error!("Error: inserting medicion: {}", err);
            ApiError::Insert(err)
        })?;
    log::debug!("inserted medicion {}", created.id);
    Ok(HttpResponse::Created().json(created))
}
