use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the provider's `results` array.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PersonRecord {
    pub name: PersonName,
    pub email: String,
    pub location: Location,
    pub picture: Picture,
    pub cell: String,
    pub dob: DateOfBirth,
    pub login: Login,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PersonName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub postcode: Postcode,
}

/// Newer provider revisions send a structured street, older ones a single line.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Street {
    Structured { number: u32, name: String },
    Line(String),
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Structured { number, name } => write!(f, "{number} {name}"),
            Street::Line(line) => f.write_str(line),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Postcode {
    Number(u64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{n}"),
            Postcode::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Picture {
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DateOfBirth {
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub age: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Login {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RandomUserResponse {
    pub results: Vec<PersonRecord>,
}
