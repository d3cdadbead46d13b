use serde::{Deserialize, Serialize};

use super::error::Result;
use super::Error;

/// Number of `|` separated fragments that make up one schedule item.
pub const ITEM_FIELDS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub days: String,
    pub times: String,
    pub location: String,
}

impl ScheduleItem {
    /// Maps the first seven fragments of a window by position; any further
    /// fragments in the window are ignored.
    fn from_fields(fields: &[&str]) -> Result<Self> {
        let [name, start_date, end_date, kind, days, times, location, ..] = fields else {
            return Err(Error::ScheduleParse(format!(
                "Schedule items need {ITEM_FIELDS} fields, the last one has {}: {fields:?}",
                fields.len()
            )));
        };
        Ok(Self {
            name: (*name).to_string(),
            start_date: (*start_date).to_string(),
            end_date: (*end_date).to_string(),
            kind: (*kind).to_string(),
            days: (*days).to_string(),
            times: (*times).to_string(),
            location: (*location).to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub schedule: Vec<ScheduleItem>,
}

/// Parses plain-text schedule data such as
/// `|CIS*1910|09/08/11|12/02/11|LEC|MWF|10:30AM - 11:20AM|ROZH 104`.
/// Everything before the first `|` is ignored.
pub fn parse_schedule(data: &str) -> Result<ScheduleRecord> {
    parse_schedule_with(data, ITEM_FIELDS)
}

/// Like [`parse_schedule`] for exports that put `window` fragments in each
/// item. Fragments past the seventh in a window are dropped.
pub fn parse_schedule_with(data: &str, window: usize) -> Result<ScheduleRecord> {
    if window < ITEM_FIELDS {
        return Err(Error::ScheduleParse(format!(
            "A window of {window} fragments cannot hold the {ITEM_FIELDS} schedule fields."
        )));
    }
    let parts: Vec<&str> = data.split('|').skip(1).collect();
    let schedule = parts
        .chunks(window)
        .map(ScheduleItem::from_fields)
        .collect::<Result<_>>()?;
    Ok(ScheduleRecord { schedule })
}
