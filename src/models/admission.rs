use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// School board the student is enrolled under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Board {
    #[default]
    #[serde(rename = "SSC")]
    Ssc,
    #[serde(rename = "CBSE")]
    Cbse,
}

impl Board {
    pub const ALL: [Board; 2] = [Board::Ssc, Board::Cbse];

    pub fn as_str(&self) -> &'static str {
        match self {
            Board::Ssc => "SSC",
            Board::Cbse => "CBSE",
        }
    }

    /// Case-insensitive; anything but CBSE is the default board
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("CBSE") {
            Board::Cbse
        } else {
            Board::Ssc
        }
    }
}

// The form only offers SSC and CBSE, so a stray value must not reject the
// whole submission.
impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Board::parse(&value))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An admission request as filled in on the admission page.
///
/// Every field is plain text; the browser's `required`/`type` attributes are the
/// only validation. Missing fields come through as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionApplication {
    pub student_name: String,
    pub standard: String,
    pub board: Board,
    pub dob: String,
    pub parent_name: String,
    pub mobile: String,
    pub address: String,
    pub previous_school: String,
    pub photo_url: String,
}
