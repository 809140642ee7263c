//! Hero entity.

use super::team::Team;

/// A persisted hero.
///
/// `team_id` references [`Team::id`]; the store's foreign key guarantees the
/// team exists at the time the reference is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub team_id: Option<i64>,
}

impl Hero {
    pub fn new(
        id: i64,
        name: String,
        secret_name: String,
        age: Option<i32>,
        team_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            name,
            secret_name,
            age,
            team_id,
        }
    }
}

/// Input data for creating a new hero. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewHero {
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub team_id: Option<i64>,
}

/// Partial update for an existing hero.
///
/// `age: Some(None)` clears the age; `team_id: Some(None)` detaches the hero
/// from its team.
#[derive(Debug, Clone, Default)]
pub struct HeroPatch {
    pub name: Option<String>,
    pub secret_name: Option<String>,
    pub age: Option<Option<i32>>,
    pub team_id: Option<Option<i64>>,
}

/// A hero together with the team it belongs to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroWithTeam {
    pub hero: Hero,
    pub team: Option<Team>,
}
