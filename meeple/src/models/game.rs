use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::GameId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub playing_time_minutes: Option<u32>,
    pub year_published: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn new(req: CreateGameRequest) -> Self {
        let now = Utc::now();
        Self {
            id: GameId::generate(),
            name: req.name.trim().to_string(),
            min_players: req.min_players,
            max_players: req.max_players,
            playing_time_minutes: req.playing_time_minutes,
            year_published: req.year_published,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_player_range"))]
pub struct CreateGameRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 1, max = 100))]
    pub min_players: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub max_players: Option<u32>,
    #[validate(range(min = 1, max = 10_000))]
    pub playing_time_minutes: Option<u32>,
    pub year_published: Option<i32>,
}

fn validate_player_range(req: &CreateGameRequest) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (req.min_players, req.max_players) {
        if min > max {
            let mut err = ValidationError::new("player_range");
            err.message = Some("minPlayers cannot exceed maxPlayers".into());
            return Err(err);
        }
    }
    if req.name.trim().is_empty() {
        let mut err = ValidationError::new("blank_name");
        err.message = Some("name cannot be blank".into());
        return Err(err);
    }
    Ok(())
}
