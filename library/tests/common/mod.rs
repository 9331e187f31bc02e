use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    thread,
    time::Duration,
};

use mediciones::db::{DbError, Measurement, MeasurementStore, NewMeasurement};

/// Volatile stand-in for the database table.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Measurement>>,
    /// time each insert holds its worker, to make requests queue
    pub insert_delay: Duration,
    in_flight: AtomicUsize,
    pub peak_in_flight: AtomicUsize,
}

impl MemoryStore {
    pub fn with_insert_delay(insert_delay: Duration) -> MemoryStore {
        MemoryStore {
            insert_delay,
            ..MemoryStore::default()
        }
    }
}

impl MeasurementStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<Measurement>, DbError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn insert(&self, new: NewMeasurement) -> Result<Measurement, DbError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        thread::sleep(self.insert_delay);

        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        let row = Measurement::from_new(id, new);
        rows.push(row.clone());

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(row)
    }
}

/// Store whose every statement fails.
pub struct BrokenStore;

impl MeasurementStore for BrokenStore {
    fn list_all(&self) -> Result<Vec<Measurement>, DbError> {
        Err(DbError::Query(diesel::result::Error::NotFound))
    }

    fn insert(&self, _: NewMeasurement) -> Result<Measurement, DbError> {
        Err(DbError::Query(diesel::result::Error::RollbackTransaction))
    }
}

pub fn madrid() -> NewMeasurement {
    NewMeasurement {
        hora: "10:00".into(),
        lugar: "Madrid".into(),
        id_sensor: 101,
        valor_gas: 40.0,
        valor_temperatura: 32.0,
    }
}
