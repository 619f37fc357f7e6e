use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub class_level: String,
    pub board: String,
    pub teacher_name: String,
    pub schedule: String,
    pub subjects: Vec<String>,
}
