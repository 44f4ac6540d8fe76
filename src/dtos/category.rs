use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub image_url: Option<String>,
    pub start_date: Option<StartDate>,
}

/// Browsers send either a plain date or a full RFC 3339 timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StartDate {
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
}

impl StartDate {
    /// Calendar date in the offset the client sent.
    pub fn date(self) -> NaiveDate {
        match self {
            StartDate::Date(d) => d,
            StartDate::DateTime(dt) => dt.date_naive(),
        }
    }
}

impl CreateCategoryRequest {
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date.map(StartDate::date)
    }
}
