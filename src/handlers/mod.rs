// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod blogs;
pub mod health;
pub mod index;
pub mod students;

pub use blogs::config as blogs_config;
pub use health::config as health_config;
pub use index::config as index_config;
pub use students::config as students_config;

use crate::errors::ReviewsError;
use actix_web::web;

/// JSON extractor settings
/// DOCUMENTATION: Malformed bodies, missing required fields and unknown keys
/// are reported with the application's error envelope (400)
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        ReviewsError::InvalidInput(err.to_string()).into()
    })
}
