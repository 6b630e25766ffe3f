pub mod health;
pub mod db;

pub use health::health_handler;
pub use db::{fetch_handler, replace_handler};
