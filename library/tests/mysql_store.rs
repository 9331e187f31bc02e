//! Runs against a live MySQL/MariaDB holding the `mediciones` table:
//! `DATABASE_URL=mysql://... cargo test -p mediciones -- --ignored`
use std::time::Duration;

use mediciones::{
    db::{MeasurementStore, NewMeasurement},
    MysqlStore,
};

fn store() -> MysqlStore {
    dotenv::dotenv().ok();
    let url = dotenv::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    MysqlStore::new(&url, 2, Duration::from_secs(5))
}

#[test]
#[ignore]
fn inserts_get_storage_ids_and_are_listed() {
    let store = store();
    let first = NewMeasurement {
        hora: "10:00".into(),
        lugar: "Madrid".into(),
        id_sensor: 101,
        valor_gas: 40.0,
        valor_temperatura: 32.0,
    };
    let second = NewMeasurement {
        hora: "10:05".into(),
        lugar: "Valencia".into(),
        id_sensor: 102,
        valor_gas: 12.5,
        valor_temperatura: 18.75,
    };

    let a = store.insert(first.clone()).unwrap();
    let b = store.insert(second.clone()).unwrap();

    assert_ne!(a.id, b.id);
    assert!(a.id > 0 && b.id > 0);
    assert_eq!(a.hora.as_deref(), Some("10:00"));
    assert_eq!(a.lugar.as_deref(), Some("Madrid"));
    assert_eq!(a.id_sensor, Some(101));
    assert_eq!(a.valor_gas, Some(40.0));
    assert_eq!(a.valor_temperatura, Some(32.0));
    assert_eq!(b.lugar.as_deref(), Some("Valencia"));
    assert_eq!(b.valor_gas, Some(12.5));
    assert_eq!(b.valor_temperatura, Some(18.75));

    // listed rows come from storage, not from the echo
    let rows = store.list_all().unwrap();
    let stored_a = rows.iter().find(|r| r.id == a.id).expect("first row listed");
    let stored_b = rows.iter().find(|r| r.id == b.id).expect("second row listed");
    assert_eq!(stored_a, &a);
    assert_eq!(stored_b, &b);
}

#[test]
#[ignore]
fn probe_reaches_configured_database() {
    store().probe().unwrap();
}
