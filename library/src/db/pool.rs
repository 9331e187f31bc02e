use std::time::Duration;

use diesel::mysql::MysqlConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sql_types::{BigInt, Unsigned};

use crate::{
    db::{
        model::{Measurement, NewMeasurement},
        DbError, MeasurementStore,
    },
    schema::mediciones,
};

pub type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

// id generated by the last insert on the calling connection
define_sql_function! {
    fn last_insert_id() -> Unsigned<BigInt>;
}

/// `MeasurementStore` backed by a bounded MySQL/MariaDB connection pool.
#[derive(Clone)]
pub struct MysqlStore {
    pool: DbPool,
}

impl MysqlStore {
    /// Builds the pool without connecting. Connections are opened on demand,
    /// so the service comes up even while the database is down.
    pub fn new(connspec: &str, max_size: u32, acquire_timeout: Duration) -> MysqlStore {
        let manager = ConnectionManager::<MysqlConnection>::new(connspec);
        let pool = r2d2::Pool::builder()
            .max_size(max_size)
            .min_idle(Some(0))
            .connection_timeout(acquire_timeout)
            .build_unchecked(manager);
        MysqlStore { pool }
    }

    /// Opens (and immediately releases) one connection.
    pub fn probe(&self) -> Result<(), DbError> {
        self.conn().map(drop)
    }

    // handle goes back to the pool when dropped, whatever the exit path
    fn conn(&self) -> Result<PooledConnection<ConnectionManager<MysqlConnection>>, DbError> {
        Ok(self.pool.get()?)
    }
}

impl MeasurementStore for MysqlStore {
    fn list_all(&self) -> Result<Vec<Measurement>, DbError> {
        let mut conn = self.conn()?;
        let rows = mediciones::table
            .select(Measurement::as_select())
            .load(&mut conn)?;
        Ok(rows)
    }

    fn insert(&self, new: NewMeasurement) -> Result<Measurement, DbError> {
        let mut conn = self.conn()?;
        diesel::insert_into(mediciones::table)
            .values(&new)
            .execute(&mut conn)?;
        // LAST_INSERT_ID is scoped to the connection, so it must run on the same one
        let raw: u64 = diesel::select(last_insert_id()).get_result(&mut conn)?;
        let id = i32::try_from(raw).map_err(|_| DbError::IdOutOfRange(raw))?;
        Ok(Measurement::from_new(id, new))
    }
}
