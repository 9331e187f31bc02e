//! `Actions` is the database executor. It runs as a sync actor on a fixed
//! number of worker threads so blocking driver calls never stall the http
//! event loop. Requests beyond the worker count wait in its mailbox.
use std::sync::Arc;

use actix::prelude::*;

use crate::db::{
    model::{Measurement, NewMeasurement},
    DbError, MeasurementStore,
};

pub struct Actions {
    store: Arc<dyn MeasurementStore>,
}

impl Actor for Actions {
    type Context = SyncContext<Self>;
}

impl Actions {
    /// Spawns `workers` executor threads sharing `store`.
    pub fn start(store: Arc<dyn MeasurementStore>, workers: usize) -> Addr<Actions> {
        SyncArbiter::start(workers, move || Actions {
            store: store.clone(),
        })
    }
}

/// Fetch every measurement
#[derive(Message, Debug)]
#[rtype(result = "Result<Vec<Measurement>, DbError>")]
pub struct ListMeasurements;

/// Store a new measurement
#[derive(Message, Debug)]
#[rtype(result = "Result<Measurement, DbError>")]
pub struct InsertMeasurement(pub NewMeasurement);

impl Handler<ListMeasurements> for Actions {
    type Result = Result<Vec<Measurement>, DbError>;

    fn handle(&mut self, _: ListMeasurements, _: &mut Self::Context) -> Self::Result {
        self.store.list_all()
    }
}

impl Handler<InsertMeasurement> for Actions {
    type Result = Result<Measurement, DbError>;

    fn handle(&mut self, msg: InsertMeasurement, _: &mut Self::Context) -> Self::Result {
        self.store.insert(msg.0)
    }
}
