//! Business logic services for the application layer.

pub mod gate_entry_service;
pub mod hero_service;
pub mod team_service;

pub use gate_entry_service::GateEntryService;
pub use hero_service::HeroService;
pub use team_service::TeamService;
