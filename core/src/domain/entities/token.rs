//! Claims carried by issued JWTs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::errors::TokenError;
use super::user::UserSnapshot;

/// Access token expiration time (1 hour)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 60;

/// Coordinates of the user's primary location as embedded in a token
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationClaim {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Location> for LocationClaim {
    fn from(location: &Location) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

/// Claims structure for the JWT payload
///
/// Serialized keys: `sub`, `iat`, `exp`, `firstName`, `lastName`, `email`,
/// `phoneNumber`, `crops`, `roles` and, only when present, `location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    pub first_name: String,

    pub last_name: String,

    /// Same value as the subject
    pub email: String,

    pub phone_number: String,

    pub crops: Vec<String>,

    /// Name of the user's single role
    pub roles: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationClaim>,
}

impl Claims {
    /// Builds the claim set for `user`, valid for `validity` from `issued_at`
    ///
    /// Fails with `TokenGenerationFailed` when the expiry falls outside the
    /// representable time range.
    pub fn for_user(
        user: &UserSnapshot,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Self, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(validity)
            .ok_or(TokenError::TokenGenerationFailed)?;

        Ok(Self {
            sub: user.username.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.username.clone(),
            phone_number: user.phone_number.clone(),
            crops: user.crops.clone(),
            roles: user.role.name().to_string(),
            location: user.primary_location().map(LocationClaim::from),
        })
    }

    /// Expiration as a timestamp, `None` if `exp` is out of range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Issued-at as a timestamp, `None` if `iat` is out of range
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    /// A token stays valid while its expiration is strictly after `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    /// Checks expiry against the current time
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
