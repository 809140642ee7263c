//! Application layer services.
//!
//! Services sit between the HTTP handlers and the repositories. They turn
//! absent records into [`crate::error::AppError::NotFound`], enforce the gate
//! entry state machine and log every mutation.
//!
//! # Available Services
//!
//! - [`services::hero_service::HeroService`] - Hero CRUD
//! - [`services::team_service::TeamService`] - Team CRUD
//! - [`services::gate_entry_service::GateEntryService`] - Gate entries, plate search, completion

pub mod services;
