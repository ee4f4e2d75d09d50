//! Signup records, skill levels and the join/reset form payloads.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Message returned for any missing or invalid join field.
pub const JOIN_VALIDATION_MESSAGE: &str =
    "Please provide first name, last name, and a valid level.";

/// Skill level a player signs up for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Beginner,
    ForFun,
    Competitive,
}

impl Level {
    /// All levels in display order.
    pub const ALL: [Level; 3] = [Level::Beginner, Level::ForFun, Level::Competitive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::ForFun => "for-fun",
            Level::Competitive => "competitive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Level::Beginner),
            "for-fun" => Some(Level::ForFun),
            "competitive" => Some(Level::Competitive),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted signup.
#[derive(Debug, Clone)]
pub struct Signup {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub level: Level,
    pub created_at: String,
}

impl Signup {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A player as shown inside a group.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub name: String,
}

/// A validated signup ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignup {
    pub first_name: String,
    pub last_name: String,
    pub level: Level,
}

impl NewSignup {
    /// Trim and validate raw join fields.
    pub fn parse(first_name: &str, last_name: &str, level: &str) -> Result<Self, AppError> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        let level = Level::parse(level);

        match level {
            Some(level) if !first_name.is_empty() && !last_name.is_empty() => Ok(Self {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                level,
            }),
            _ => Err(AppError::Validation(JOIN_VALIDATION_MESSAGE.to_string())),
        }
    }
}

/// Form body of `POST /join`. Missing fields decode as empty and fail validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub level: String,
}

impl JoinForm {
    pub fn validate(&self) -> Result<NewSignup, AppError> {
        NewSignup::parse(&self.first_name, &self.last_name, &self.level)
    }
}

/// Form body of `POST /reset`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetForm {
    #[serde(default)]
    pub key: String,
}
