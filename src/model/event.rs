//! Raw event records from the GitHub events API
//!
//! Every field is optional. A field holding an unexpected JSON type is
//! treated as absent instead of failing the whole feed.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Placeholder used when a value is missing
pub const NOT_AVAILABLE: &str = "N/A";

/// Default substitutions for missing payload fields
pub mod defaults {
    /// `payload.size` of a push
    pub const PUSH_SIZE: &str = "0";
    /// `payload.ref_type` of a create/delete
    pub const REF_TYPE: &str = "resource";
    /// `payload.action` of a pull request/issue
    pub const ACTION: &str = "action";
    /// `payload.release.tag_name` of a release
    pub const TAG_NAME: &str = "";
}

/// One entry of a user's public event feed, as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEvent {
    /// Event kind discriminator (e.g., "PushEvent")
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,

    /// Repository the event happened in
    #[serde(default, deserialize_with = "lenient")]
    pub repo: Option<Repo>,

    /// Creation time (ISO 8601, e.g. "2023-05-01T10:15:30Z")
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,

    /// Kind-specific data
    #[serde(default, deserialize_with = "lenient")]
    pub payload: Option<Payload>,
}

impl RawEvent {
    /// Event kind string, empty when absent
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    /// Repository name, `N/A` when absent
    pub fn repository(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|repo| repo.name.as_deref())
            .unwrap_or(NOT_AVAILABLE)
    }

    /// Creation time string, empty when absent
    pub fn created_at(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }

    /// Payload, or an empty one when absent
    pub fn payload(&self) -> Payload {
        self.payload.clone().unwrap_or_default()
    }
}

impl From<Value> for RawEvent {
    /// Anything other than a JSON object becomes an event with no fields.
    fn from(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// `repo` object of an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Repo {
    /// Full name (e.g., "octo/hello-world")
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

/// The payload fields used to describe an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Payload {
    /// Number of commits in a push
    #[serde(default, deserialize_with = "lenient_text")]
    pub size: Option<String>,

    /// Kind of ref created or deleted ("branch", "tag", "repository")
    #[serde(default, deserialize_with = "lenient_text")]
    pub ref_type: Option<String>,

    /// Action performed ("opened", "closed", ...)
    #[serde(default, deserialize_with = "lenient_text")]
    pub action: Option<String>,

    /// Published release
    #[serde(default, deserialize_with = "lenient")]
    pub release: Option<Release>,
}

impl Payload {
    pub fn size(&self) -> &str {
        self.size.as_deref().unwrap_or(defaults::PUSH_SIZE)
    }

    pub fn ref_type(&self) -> &str {
        self.ref_type.as_deref().unwrap_or(defaults::REF_TYPE)
    }

    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or(defaults::ACTION)
    }

    pub fn tag_name(&self) -> &str {
        self.release
            .as_ref()
            .and_then(|release| release.tag_name.as_deref())
            .unwrap_or(defaults::TAG_NAME)
    }
}

/// `payload.release` object of a release event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Release {
    #[serde(default, deserialize_with = "lenient_text")]
    pub tag_name: Option<String>,
}

/// Deserialize a nested object, treating a value of the wrong shape as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(Value::is_object)
        .and_then(|value| serde_json::from_value(value).ok()))
}

/// Deserialize a scalar as text
///
/// Strings are taken as-is, numbers and booleans are rendered.
/// `null`, arrays and objects count as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}
