pub mod health;
pub mod health_checks;
pub mod import;
pub mod index;
pub mod openapi;
pub mod submit;

pub use health::{db_test_handler, health_handler};
pub use import::import_handler;
pub use index::index_handler;
pub use openapi::openapi_handler;
pub use submit::submit_handler;
