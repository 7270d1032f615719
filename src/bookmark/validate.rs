//! Validation of bookmark creation requests.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. `title`, `url` and `rating` must be present and not falsy
//! 2. `rating` must be an integer between [`MIN_RATING`] and [`MAX_RATING`]
//! 3. `url` must be a string holding an absolute http(s) URI
//!
//! `title` and `description` are free text. Non-string values are kept as
//! their JSON text rather than rejected.
//!
//! Nothing here touches the store, so an invalid request never reaches it.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::error::BookmarkError;

use super::NewBookmark;

/// Lowest accepted rating.
pub const MIN_RATING: i64 = 0;

/// Highest accepted rating.
pub const MAX_RATING: i64 = 5;

/// Fields that must be supplied, in the order they are checked.
const REQUIRED_FIELDS: [&str; 3] = ["title", "url", "rating"];

/// Raw body of `POST /bookmarks`.
///
/// Every field is kept as an untyped JSON value so that a wrong type is
/// reported by [`validate`] with a field-specific message instead of a
/// generic deserialization failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CreateBookmarkRequest {
    #[serde(default)]
    pub title: Option<Value>,

    #[serde(default)]
    pub url: Option<Value>,

    #[serde(default)]
    pub description: Option<Value>,

    #[serde(default)]
    pub rating: Option<Value>,
}

impl CreateBookmarkRequest {
    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "title" => self.title.as_ref(),
            "url" => self.url.as_ref(),
            "description" => self.description.as_ref(),
            "rating" => self.rating.as_ref(),
            _ => None,
        }
    }
}

/// Validate a creation request and turn it into a [`NewBookmark`].
pub fn validate(request: &CreateBookmarkRequest) -> Result<NewBookmark, BookmarkError> {
    for field in REQUIRED_FIELDS {
        if request.field(field).map_or(true, is_missing) {
            return Err(BookmarkError::MissingField { field });
        }
    }

    let rating = request
        .rating
        .as_ref()
        .and_then(parse_rating)
        .ok_or_else(|| BookmarkError::InvalidRating {
            supplied: request
                .rating
                .as_ref()
                .map(Value::to_string)
                .unwrap_or_default(),
        })?;

    let url = match &request.url {
        Some(Value::String(url)) if is_web_uri(url) => url.clone(),
        other => {
            return Err(BookmarkError::InvalidUrl {
                supplied: other.as_ref().map(to_text).unwrap_or_default(),
            })
        }
    };

    let title = request.title.as_ref().map(to_text).unwrap_or_default();
    let description = request
        .description
        .as_ref()
        .filter(|value| !value.is_null())
        .map(to_text);

    Ok(NewBookmark {
        title,
        url,
        description,
        rating,
    })
}

/// Check whether `candidate` is an absolute `http` or `https` URI with a host.
pub fn is_web_uri(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
        return false;
    }

    match Url::parse(candidate) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// A value is missing when it is falsy: `null`, `false`, `""` or zero.
///
/// A rating of `0` is therefore reported as missing, not as out of range.
fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_rating(value: &Value) -> Option<i64> {
    let rating = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => {
                let f = n.as_f64()?;
                if f.fract() != 0.0 || f < MIN_RATING as f64 || f > MAX_RATING as f64 {
                    return None;
                }
                f as i64
            }
        },
        _ => return None,
    };

    (MIN_RATING..=MAX_RATING).contains(&rating).then_some(rating)
}
