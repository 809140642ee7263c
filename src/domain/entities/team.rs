//! Team entity.

use super::hero::Hero;

/// A persisted team.
///
/// Heroes point at their team through `Hero::team_id`. Deleting a team never
/// deletes its heroes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub headquarters: String,
}

impl Team {
    pub fn new(id: i64, name: String, headquarters: String) -> Self {
        Self {
            id,
            name,
            headquarters,
        }
    }
}

/// Input data for creating a new team.
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub headquarters: String,
}

/// Partial update for an existing team. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub headquarters: Option<String>,
}

/// A team together with every hero whose `team_id` points at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamWithHeroes {
    pub team: Team,
    pub heroes: Vec<Hero>,
}
