use crate::schema::mediciones;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One sensor reading as stored in `mediciones`.
///
/// Non-id columns are nullable: rows written by older clients may lack them.
#[derive(Queryable, Selectable, Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[diesel(table_name = mediciones)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[schema(example = json!({
    "id": 1,
    "hora": "10:00",
    "lugar": "Madrid",
    "id_sensor": 101,
    "valorGas": 40,
    "valorTemperatura": 32
}))]
pub struct Measurement {
    /// assigned by storage
    pub id: i32,
    pub hora: Option<String>,
    pub lugar: Option<String>,
    pub id_sensor: Option<i32>,
    #[serde(rename = "valorGas")]
    pub valor_gas: Option<f64>,
    #[serde(rename = "valorTemperatura")]
    pub valor_temperatura: Option<f64>,
}

/// Body of `POST /mediciones`. The id is never accepted from clients.
#[derive(Insertable, Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[diesel(table_name = mediciones)]
#[schema(example = json!({
    "hora": "10:00",
    "lugar": "Madrid",
    "id_sensor": 101,
    "valorGas": 40,
    "valorTemperatura": 32
}))]
pub struct NewMeasurement {
    pub hora: String,
    pub lugar: String,
    pub id_sensor: i32,
    #[serde(rename = "valorGas")]
    pub valor_gas: f64,
    #[serde(rename = "valorTemperatura")]
    pub valor_temperatura: f64,
}

impl Measurement {
    /// The submitted reading echoed back with its generated id.
    pub fn from_new(id: i32, new: NewMeasurement) -> Measurement {
        Measurement {
            id,
            hora: Some(new.hora),
            lugar: Some(new.lugar),
            id_sensor: Some(new.id_sensor),
            valor_gas: Some(new.valor_gas),
            valor_temperatura: Some(new.valor_temperatura),
        }
    }
}
