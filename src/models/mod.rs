// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod review;
pub mod student;

pub use review::*;
pub use student::*;
