//! Operation handlers, one module per command family

pub mod catalog;
pub mod database;
pub mod exchange;
pub mod snapshot;
pub mod table;
