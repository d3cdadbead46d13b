use std::{fmt::Display, str::FromStr};

use chrono::Datelike;
use url::Url;

use crate::error::Error;

/// Which institutional catalog a course belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CalendarType {
    #[default]
    Undergraduate,
    Graduate,
    Diploma,
    GuelphHumber,
}

impl CalendarType {
    pub const ALL: [Self; 4] = [
        Self::Undergraduate,
        Self::Graduate,
        Self::Diploma,
        Self::GuelphHumber,
    ];

    /// The path segment the registrar uses for this calendar.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
            Self::Diploma => "diploma",
            Self::GuelphHumber => "guelphhumber",
        }
    }
}

impl Display for CalendarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "undergraduate" => Ok(Self::Undergraduate),
            "graduate" => Ok(Self::Graduate),
            "diploma" => Ok(Self::Diploma),
            "guelphhumber" | "guelph-humber" => Ok(Self::GuelphHumber),
            other => Err(Error::InvalidInput(format!(
                "unknown calendar type `{other}`, expected one of undergraduate, graduate, diploma, guelph-humber"
            ))),
        }
    }
}

#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// `current` for this year's calendar, otherwise the academic year range
/// such as `2010-2011`.
pub fn year_segment(year: i32, current_year: i32) -> Result<String, Error> {
    if year == current_year {
        return Ok("current".to_string());
    }
    let next = year
        .checked_add(1)
        .ok_or_else(|| Error::InvalidInput(format!("{year} has no following academic year")))?;
    Ok(format!("{year}-{next}"))
}

/// Builds the calendar page URL for a course, relative to `base`.
pub fn course_url(base: &Url, year: i32, code: &str, calendar: CalendarType) -> Result<Url, Error> {
    course_url_in(base, year, code, calendar, current_year())
}

pub fn course_url_in(
    base: &Url,
    year: i32,
    code: &str,
    calendar: CalendarType,
    current_year: i32,
) -> Result<Url, Error> {
    let path = format!(
        "registrar/calendars/{calendar}/{}/courses/{}.shtml",
        year_segment(year, current_year)?,
        code.to_lowercase()
    );
    Ok(base.join(&path)?)
}

/// Key a course record is stored under: year, code and calendar run together.
#[must_use]
pub fn cache_key(year: i32, code: &str, calendar: CalendarType) -> String {
    format!("{year}{code}{calendar}")
}
