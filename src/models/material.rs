use serde::{Deserialize, Serialize};

/// A study resource (PDF, video, notes) hosted elsewhere
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub class_level: String,
    pub subject: String,
    pub kind: String,
    pub url: String,
    pub description: Option<String>,
}
