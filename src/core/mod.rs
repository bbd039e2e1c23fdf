pub mod database;
pub mod document;
pub mod error;
