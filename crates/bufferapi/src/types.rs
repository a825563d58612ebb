//! Buffer API request and response types.
//!
//! Response types are decoded leniently: a missing key or an explicit `null`
//! both decode to the field's default, so the partial objects the API
//! returns for some services still parse. Timestamps are Unix epoch seconds
//! on the wire.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Decodes `null` as `T::default()`. Missing keys are covered separately by
/// the container-level `#[serde(default)]`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// profiles
// ---------------------------------------------------------------------------

/// A connected social-media account, as returned by `profiles.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub default: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub formatted_username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub schedules: Vec<Schedule>,
    /// Service name, e.g. `"twitter"` or `"facebook"`.
    #[serde(deserialize_with = "null_as_default")]
    pub service: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_username: String,
    /// Statistic name to count, e.g. `"followers" -> 246`.
    #[serde(deserialize_with = "null_as_default")]
    pub statistics: HashMap<String, i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub team_members: Vec<String>,
    /// IANA timezone name, e.g. `"Europe/London"`.
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
}

impl Profile {
    /// `created_at` as a UTC timestamp, or `None` if out of range.
    #[must_use]
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }
}

/// A recurring posting window: every listed time on every listed day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// Weekday names, e.g. `["mon", "tue"]`.
    #[serde(deserialize_with = "null_as_default")]
    pub days: Vec<String>,
    /// Times of day, e.g. `["09:00", "17:30"]`.
    #[serde(deserialize_with = "null_as_default")]
    pub times: Vec<String>,
}

// ---------------------------------------------------------------------------
// updates
// ---------------------------------------------------------------------------

/// Payload for `updates/create.json`.
///
/// Sent form-encoded; see the [`FormEncode`](crate::FormEncode) impl for the
/// exact key layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUpdate {
    pub text: String,
    pub profile_ids: Vec<String>,
    pub shorten: bool,
    pub now: bool,
    /// Media attachment fields, e.g. `"link" -> "https://..."`.
    pub media: HashMap<String, String>,
}

impl NewUpdate {
    /// Starts an update for the given profiles with no media, no URL
    /// shortening and normal queueing.
    #[must_use]
    pub fn new<I, S>(text: impl Into<String>, profile_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            profile_ids: profile_ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Let Buffer shorten links in the text.
    #[must_use]
    pub fn shorten(mut self, shorten: bool) -> Self {
        self.shorten = shorten;
        self
    }

    /// Share immediately instead of adding to the queue.
    #[must_use]
    pub fn now(mut self, now: bool) -> Self {
        self.now = now;
        self
    }

    /// Adds one media attachment field, replacing any previous value for `key`.
    #[must_use]
    pub fn media(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.media.insert(key.into(), value.into());
        self
    }
}

/// A scheduled or sent post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Update {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: i64,
    /// Human-readable due day, e.g. `"Today"`.
    #[serde(deserialize_with = "null_as_default")]
    pub day: String,
    #[serde(deserialize_with = "null_as_default")]
    pub due_at: i64,
    /// Human-readable due time, e.g. `"10:09 pm"`.
    #[serde(deserialize_with = "null_as_default")]
    pub due_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub media: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_service: String,
    /// `"buffer"`, `"sent"`, ...
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text_formatted: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    /// Source attribution, e.g. `"api"`.
    #[serde(deserialize_with = "null_as_default")]
    pub via: String,
}

impl Update {
    /// `created_at` as a UTC timestamp, or `None` if out of range.
    #[must_use]
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }

    /// `due_at` as a UTC timestamp, or `None` if out of range.
    #[must_use]
    pub fn due_time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.due_at, 0)
    }
}

/// Response envelope for `updates/create.json`.
///
/// `success == false` is a failure even on HTTP 200; the client turns it
/// into [`BufferError::ApiRejected`](crate::BufferError::ApiRejected).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub buffer_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub buffer_percentage: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub updates: Vec<Update>,
}

impl UpdateResponse {
    /// The last update in the batch; the API lists them in creation order.
    #[must_use]
    pub fn last_update(&self) -> Option<&Update> {
        self.updates.last()
    }
}
