//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod gate_entries;
pub mod health;
pub mod heroes;
pub mod teams;

pub use gate_entries::{
    complete_gate_entry_handler, create_gate_entry_handler, gate_entry_list_handler,
    get_gate_entry_handler, search_gate_entries_handler, update_gate_entry_handler,
};
pub use health::health_handler;
pub use heroes::{
    create_hero_handler, delete_hero_handler, get_hero_handler, hero_list_handler,
    update_hero_handler,
};
pub use teams::{
    create_team_handler, delete_team_handler, get_team_handler, team_list_handler,
    update_team_handler,
};
