use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One entry of the user directory. All fields are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub user_tag: String,
    pub department: String,
    /// Birthday as `MM-DD`, which also makes it sortable.
    pub birthday_day: String,
}

/// Ordering of the directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortType {
    #[default]
    ByName,
    ByDate,
}

impl SortType {
    /// Stable key used in persisted preferences.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ByName => "by_name",
            Self::ByDate => "by_date",
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "by_name" | "name" => Ok(Self::ByName),
            "by_date" | "date" | "birthday" => Ok(Self::ByDate),
            other => Err(format!("unknown sort type '{}'", other)),
        }
    }
}
