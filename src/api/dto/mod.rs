//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs deserialize with Serde and validate with `validator` before
//! they are converted into domain types. Response DTOs are the only shapes
//! that leave the service.

pub mod delete;
pub mod gate_entry;
pub mod health;
pub mod hero;
pub mod pagination;
pub mod team;
