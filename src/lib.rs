pub mod cli;
pub mod errors;
pub mod history;
pub mod models;
pub mod providers;
