//! DTOs for hero endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::team::TeamResponse;
use crate::domain::entities::{Hero, HeroPatch, HeroWithTeam, NewHero};

/// Request body for `POST /heros`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHeroRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "secret_name must not be empty"))]
    pub secret_name: String,

    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: Option<i32>,

    pub team_id: Option<i64>,
}

impl From<CreateHeroRequest> for NewHero {
    fn from(r: CreateHeroRequest) -> Self {
        NewHero {
            name: r.name,
            secret_name: r.secret_name,
            age: r.age,
            team_id: r.team_id,
        }
    }
}

/// Request body for `PATCH /heros/{id}`.
///
/// Only fields present in the JSON are changed. `age` and `team_id` accept
/// `null` to clear the stored value; `null` for `name` or `secret_name` is
/// treated as absent.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateHeroRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "secret_name must not be empty"))]
    pub secret_name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub team_id: Option<Option<i64>>,
}

impl From<UpdateHeroRequest> for HeroPatch {
    fn from(r: UpdateHeroRequest) -> Self {
        HeroPatch {
            name: r.name,
            secret_name: r.secret_name,
            age: r.age,
            team_id: r.team_id,
        }
    }
}

/// JSON representation of a hero.
#[derive(Debug, Serialize)]
pub struct HeroResponse {
    pub id: i64,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub team_id: Option<i64>,
}

impl From<Hero> for HeroResponse {
    fn from(h: Hero) -> Self {
        HeroResponse {
            id: h.id,
            name: h.name,
            secret_name: h.secret_name,
            age: h.age,
            team_id: h.team_id,
        }
    }
}

/// A hero with its team nested under `team` (`null` when unassigned).
#[derive(Debug, Serialize)]
pub struct HeroWithTeamResponse {
    #[serde(flatten)]
    pub hero: HeroResponse,
    pub team: Option<TeamResponse>,
}

impl From<HeroWithTeam> for HeroWithTeamResponse {
    fn from(h: HeroWithTeam) -> Self {
        HeroWithTeamResponse {
            hero: h.hero.into(),
            team: h.team.map(Into::into),
        }
    }
}
