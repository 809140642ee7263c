//! Repository trait definitions for the domain layer.
//!
//! Each trait describes the data-access contract of one entity. Every
//! operation is a single round trip to storage (or one transaction when a
//! read has to follow a write). Absence is reported as `Ok(None)` or a zero
//! count, never as an error: turning absence into a 404 is the job of the
//! services and handlers above.
//!
//! # Available Repositories
//!
//! - [`HeroRepository`] - Hero CRUD, with the owning team on lookup
//! - [`TeamRepository`] - Team CRUD, with member heroes on lookup
//! - [`GateEntryRepository`] - Gate entry CRUD, plate search and completion
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated with `mockall` under `cfg(test)`.

pub mod gate_entry_repository;
pub mod hero_repository;
pub mod team_repository;

pub use gate_entry_repository::GateEntryRepository;
pub use hero_repository::HeroRepository;
pub use team_repository::TeamRepository;

#[cfg(test)]
pub use gate_entry_repository::MockGateEntryRepository;
#[cfg(test)]
pub use hero_repository::MockHeroRepository;
#[cfg(test)]
pub use team_repository::MockTeamRepository;
