pub mod catalog;
pub mod error;
pub mod record;
pub mod report;
pub mod schema;
