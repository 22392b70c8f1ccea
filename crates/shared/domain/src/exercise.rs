//! Exercise entries as returned by the listing API and as rendered.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{NO_DESCRIPTION, PLACEHOLDER_IMAGE_URL, UNKNOWN_CATEGORY};

/// One item of the exercise listing response.
///
/// Every field except `id` may be absent; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body_part: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub gif_url: Option<String>,
}

/// Ids arrive as strings from some deployments and as numbers from others
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

/// An exercise with every display default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub target: Option<String>,
    pub image: String,
}

impl ExerciseCard {
    /// Category with its first letter upper-cased
    pub fn display_category(&self) -> String {
        let mut chars = self.category.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => UNKNOWN_CATEGORY.to_string(),
        }
    }

    /// Description line derived from the target muscle
    pub fn description(&self) -> String {
        match &self.target {
            Some(target) => format!("Target muscle: {}", target),
            None => NO_DESCRIPTION.to_string(),
        }
    }
}

impl From<Exercise> for ExerciseCard {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.unwrap_or_default(),
            category: non_empty(exercise.body_part)
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            target: non_empty(exercise.target),
            image: non_empty(exercise.gif_url)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
        }
    }
}

/// Empty strings count as missing, like absent fields
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
