//! Typed views of submitted HTML forms.
//!
//! Forms arrive as raw `name=value` pairs so that repeated keys (the genre
//! multi-select) survive decoding. Everything here is normalization only:
//! trimming, digit extraction and the seeking answer.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// Decoded `application/x-www-form-urlencoded` body, in submission order.
pub type FormPairs = Vec<(String, String)>;

/// Search box on the venue and artist listing pages.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

impl SearchForm {
    pub fn term(&self) -> &str {
        self.search_term.trim()
    }
}

/// Answer to the "seeking talent" / "seeking venue" question.
///
/// The form offers `Yes` and `No`; anything other than an exact `Yes`
/// counts as `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekingAnswer {
    Yes,
    #[default]
    No,
}

impl SeekingAnswer {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("Yes") => Self::Yes,
            _ => Self::No,
        }
    }

    pub fn is_seeking(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl From<bool> for SeekingAnswer {
    fn from(seeking: bool) -> Self {
        if seeking {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: SeekingAnswer,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
}

impl VenueForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: text(pairs, "name"),
            city: text(pairs, "city"),
            state: text(pairs, "state"),
            address: optional_text(pairs, "address"),
            phone: phone(pairs),
            genres: genres(pairs),
            seeking_talent: SeekingAnswer::parse(first(pairs, "seeking_talent")),
            seeking_description: optional_text(pairs, "seeking_description"),
            image_link: optional_text(pairs, "image_link"),
            website: optional_text(pairs, "website"),
            facebook_link: optional_text(pairs, "facebook_link"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: SeekingAnswer,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
}

impl ArtistForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: text(pairs, "name"),
            city: text(pairs, "city"),
            state: text(pairs, "state"),
            phone: phone(pairs),
            genres: genres(pairs),
            seeking_venue: SeekingAnswer::parse(first(pairs, "seeking_venue")),
            seeking_description: optional_text(pairs, "seeking_description"),
            image_link: optional_text(pairs, "image_link"),
            website: optional_text(pairs, "website"),
            facebook_link: optional_text(pairs, "facebook_link"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self> {
        Ok(Self {
            artist_id: parse_id(pairs, "artist_id")?,
            venue_id: parse_id(pairs, "venue_id")?,
            start_time: parse_start_time(&text(pairs, "start_time"))?,
        })
    }
}

/// Accepted `start_time` layouts, most specific first.
const START_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

pub fn parse_start_time(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| AppError::Validation(format!("'{}' is not a valid start time", value)))
}

/// Keeps only the ASCII digits of a phone number.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn text(pairs: &[(String, String)], key: &str) -> String {
    first(pairs, key).unwrap_or_default().trim().to_string()
}

fn optional_text(pairs: &[(String, String)], key: &str) -> Option<String> {
    Some(text(pairs, key)).filter(|value| !value.is_empty())
}

fn phone(pairs: &[(String, String)]) -> Option<String> {
    Some(digits_only(first(pairs, "phone").unwrap_or_default())).filter(|digits| !digits.is_empty())
}

fn genres(pairs: &[(String, String)]) -> Vec<String> {
    pairs
        .iter()
        .filter(|(k, _)| k == "genres")
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn parse_id(pairs: &[(String, String)], key: &str) -> Result<i32> {
    let raw = text(pairs, key);
    raw.parse()
        .map_err(|_| AppError::Validation(format!("{} must be a number, got '{}'", key, raw)))
}
