pub mod mediciones;
