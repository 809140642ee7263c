//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits are implemented in
//! [`crate::infrastructure::persistence`] and consumed by the services in
//! [`crate::application::services`].
//!
//! - [`entities`] - Heroes, teams and gate entries
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
