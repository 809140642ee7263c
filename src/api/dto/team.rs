//! DTOs for team endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::hero::HeroResponse;
use crate::domain::entities::{NewTeam, Team, TeamPatch, TeamWithHeroes};

/// Request body for `POST /teams`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "headquarters must not be empty"))]
    pub headquarters: String,
}

impl From<CreateTeamRequest> for NewTeam {
    fn from(r: CreateTeamRequest) -> Self {
        NewTeam {
            name: r.name,
            headquarters: r.headquarters,
        }
    }
}

/// Request body for `PATCH /teams/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "headquarters must not be empty"))]
    pub headquarters: Option<String>,
}

impl From<UpdateTeamRequest> for TeamPatch {
    fn from(r: UpdateTeamRequest) -> Self {
        TeamPatch {
            name: r.name,
            headquarters: r.headquarters,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub headquarters: String,
}

impl From<Team> for TeamResponse {
    fn from(t: Team) -> Self {
        TeamResponse {
            id: t.id,
            name: t.name,
            headquarters: t.headquarters,
        }
    }
}

/// A team with its heroes nested under `heroes`.
#[derive(Debug, Serialize)]
pub struct TeamWithHeroesResponse {
    #[serde(flatten)]
    pub team: TeamResponse,
    pub heroes: Vec<HeroResponse>,
}

impl From<TeamWithHeroes> for TeamWithHeroesResponse {
    fn from(t: TeamWithHeroes) -> Self {
        TeamWithHeroesResponse {
            team: t.team.into(),
            heroes: t.heroes.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_requires_headquarters() {
        let result = serde_json::from_value::<CreateTeamRequest>(json!({ "name": "Preventers" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_empty_body() {
        let req: UpdateTeamRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.validate().is_ok());

        let patch = TeamPatch::from(req);
        assert!(patch.name.is_none());
        assert!(patch.headquarters.is_none());
    }

    #[test]
    fn test_team_with_heroes_serializes_empty_list() {
        let response = TeamWithHeroesResponse::from(TeamWithHeroes {
            team: Team::new(1, "Preventers".into(), "Sharp Tower".into()),
            heroes: vec![],
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["heroes"], json!([]));
    }
}
