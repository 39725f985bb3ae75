pub mod holding;
pub mod month;
pub mod query;
pub mod record;
