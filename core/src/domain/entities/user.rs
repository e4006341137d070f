//! Authenticated user snapshot used as the subject of issued tokens.

use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::errors::ValidationError;

/// The single role assigned to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Farmer,
    Admin,
}

impl UserRole {
    /// Text name embedded in the `roles` claim
    pub fn name(&self) -> &'static str {
        match self {
            UserRole::Farmer => "FARMER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FARMER" => Ok(UserRole::Farmer),
            "ADMIN" => Ok(UserRole::Admin),
            _ => Err(ValidationError::InvalidFormat {
                field: "role".to_string(),
            }),
        }
    }
}

/// Read view of an authenticated user, built fresh by the caller at issuance time
#[derive(Debug, Clone, PartialEq)]
pub struct UserSnapshot {
    /// Unique identity; also the user's e-mail address
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// Crop identifiers, in the caller's order
    pub crops: Vec<String>,
    pub role: UserRole,
    /// Associated locations; the first entry is the primary one
    pub locations: Vec<Location>,
}

impl UserSnapshot {
    /// Creates a snapshot with no crops and no locations
    pub fn new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            crops: Vec::new(),
            role,
            locations: Vec::new(),
        }
    }

    pub fn with_crops<I, S>(mut self, crops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.crops = crops.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    /// The location embedded in tokens: the first associated one, if any
    pub fn primary_location(&self) -> Option<&Location> {
        self.locations.first()
    }
}
