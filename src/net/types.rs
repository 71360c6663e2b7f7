//! Wire DTOs for the blog REST API.
//!
//! DESIGN
//! ======
//! These types mirror backend serializer output. Unknown fields are ignored so
//! the backend can grow its payloads without breaking the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `/api/auth/me/`, login and register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Account email, if the endpoint exposes it.
    #[serde(default)]
    pub email: Option<String>,
    /// ISO 8601 registration timestamp, if present.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Author summary embedded in posts and comments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub username: String,
}

/// A feed post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub author: Option<Author>,
    pub created_at: String,
    pub updated_at: String,
    /// Number of comments; absent on older backends, treated as zero.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub comments_count: i64,
}

impl Post {
    /// Whether `user_id` wrote this post.
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author.as_ref().is_some_and(|a| a.id == user_id)
    }

    /// Whether the post was edited after creation.
    pub fn is_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}

/// A comment on a post. The backend returns comments oldest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author: Option<Author>,
    pub created_at: String,
}

impl Comment {
    /// Whether `user_id` wrote this comment.
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author.as_ref().is_some_and(|a| a.id == user_id)
    }
}

/// Public profile with aggregate post count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    /// Free-form bio; the backend sends an empty string or null when unset.
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(deserialize_with = "deserialize_count")]
    pub posts_count: i64,
    pub created_at: String,
}

impl Profile {
    /// Bio text with null collapsed to empty.
    pub fn bio_text(&self) -> &str {
        self.bio.as_deref().unwrap_or_default()
    }
}

/// One page of a page-number paginated collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    /// Total items across all pages.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub count: i64,
    /// URL of the next page; `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> Page<T> {
    /// Whether the backend reports a further page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Structured error body: `{ "error": "...", "details": { field: [messages] } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: BTreeMap<String, FieldMessages>,
}

/// Field-level validation messages. DRF usually sends a list but plain strings
/// show up for non-field errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    Many(Vec<String>),
    One(String),
}

impl FieldMessages {
    /// The message shown next to the field: the first one in the list.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Many(list) => list.first().map(String::as_str),
            Self::One(message) => Some(message.as_str()),
        }
    }
}

// =============================================================
// Request bodies
// =============================================================

/// `POST /api/auth/login/` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/auth/register/` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Body for creating a post or a comment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentRequest {
    pub content: String,
}

/// `PATCH /api/profile/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub bio: String,
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
