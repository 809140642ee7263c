//! Core domain entities.
//!
//! Entities are plain data structures. Each entity comes with a separate
//! struct for creation (`NewHero`, `NewTeam`, `NewGateEntry`) and one for
//! partial updates (`HeroPatch`, `TeamPatch`, `GateEntryPatch`).
//!
//! Patch structs use `Option<T>` for columns that cannot be null and
//! `Option<Option<T>>` for nullable columns:
//!
//! - `None` - leave the stored value unchanged
//! - `Some(None)` - clear the stored value
//! - `Some(Some(v))` - store `v`

pub mod gate_entry;
pub mod hero;
pub mod team;

pub use gate_entry::{GateEntry, GateEntryPatch, GateStatus, InvalidTransition, NewGateEntry};
pub use hero::{Hero, HeroPatch, HeroWithTeam, NewHero};
pub use team::{NewTeam, Team, TeamPatch, TeamWithHeroes};
