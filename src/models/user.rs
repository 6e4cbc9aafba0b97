use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar_url: Option<String>,
    pub initials: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(u: User) -> Self {
        let initials = initials(u.full_name.as_deref(), &u.email);
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            full_name: u.full_name,
            bio: u.bio,
            phone: u.phone,
            date_of_birth: u.date_of_birth,
            location: u.location,
            website: u.website,
            avatar_url: u.avatar_url,
            initials,
            created_at: u.created_at,
        }
    }
}

/// First letters of the first two names, else the email's first letter, else "U".
pub fn initials(full_name: Option<&str>, email: &str) -> String {
    let names: Vec<&str> = full_name
        .map(|n| n.split_whitespace().collect())
        .unwrap_or_default();
    let letters: String = match names.as_slice() {
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
        [only] => only.chars().take(1).collect(),
        [] => email.chars().take(1).collect(),
    };
    if letters.is_empty() {
        "U".into()
    } else {
        letters.to_uppercase()
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 50, message = "Username must be at most 50 characters"))]
    pub username: Option<String>,
    #[validate(length(max = 100, message = "Full name must be at most 100 characters"))]
    pub full_name: Option<String>,
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar_url: Option<String>,
}

impl UpdateProfileRequest {
    /// Blank strings are stored as NULL.
    pub fn normalized(self) -> Self {
        fn blank_to_none(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            username: blank_to_none(self.username),
            full_name: blank_to_none(self.full_name),
            bio: blank_to_none(self.bio),
            phone: blank_to_none(self.phone),
            date_of_birth: self.date_of_birth,
            location: blank_to_none(self.location),
            website: blank_to_none(self.website),
            avatar_url: blank_to_none(self.avatar_url),
        }
    }
}

/// Stored refresh token. Only the hash of the raw token is kept.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}
