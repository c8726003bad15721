use crate::errors::EntryError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub guest: u32,
    pub sales: i64,
    pub report_sales: i64,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    #[serde(default)]
    pub name: String,
    pub guest: Option<u32>,
    pub sales: Option<i64>,
    pub report_sales: Option<i64>,
}

impl EntryDraft {
    pub fn new(name: impl Into<String>, guest: u32, sales: i64, report_sales: i64) -> Self {
        Self {
            name: name.into(),
            guest: Some(guest),
            sales: Some(sales),
            report_sales: Some(report_sales),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub guest: String,
    #[serde(default)]
    pub sales: String,
    #[serde(default)]
    pub report_sales: String,
}

impl EntryForm {
    pub fn into_draft(self) -> Result<EntryDraft, EntryError> {
        Ok(EntryDraft {
            guest: parse_field("guest", &self.guest)?,
            sales: parse_field("sales", &self.sales)?,
            report_sales: parse_field("reportSales", &self.report_sales)?,
            name: self.name,
        })
    }
}

fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    raw: &str,
) -> Result<Option<T>, EntryError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| EntryError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    #[serde(flatten)]
    pub entry: Entry,
    pub rank: usize,
}

impl RankedEntry {
    pub fn is_grand_winner(&self) -> bool {
        self.rank == 1
    }
}

/// Navigation state. Persisted as its integer discriminant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Page {
    #[default]
    Login,
    Input,
    Output,
}

impl Page {
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Input => "input",
            Page::Output => "output",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Page> for u8 {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => 0,
            Page::Input => 1,
            Page::Output => 2,
        }
    }
}

impl TryFrom<u8> for Page {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Page::Login),
            1 => Ok(Page::Input),
            2 => Ok(Page::Output),
            other => Err(format!("unknown page {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub current_page: Page,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct PageRequest {
    pub page: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub page: String,
    pub location: String,
}

impl From<&SessionState> for SessionResponse {
    fn from(state: &SessionState) -> Self {
        Self {
            page: state.current_page.as_str().to_string(),
            location: state.location.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankingsResponse {
    pub rankings: Vec<RankedEntry>,
    pub grand_winner: Option<RankedEntry>,
}
