// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod review_service;
pub mod student_service;

pub use review_service::*;
pub use student_service::*;
