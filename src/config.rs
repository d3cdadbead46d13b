use std::{env, path::PathBuf};

use url::Url;

use crate::Result;

pub const DEFAULT_CALENDAR_BASE: &str = "https://www.uoguelph.ca/";
pub const DEFAULT_MEAL_PLAN_LOGIN: &str =
    "https://www.hospitality.uoguelph.ca/accountservices/chooseaccount.cfm?action=balance";

/// Where requests go and where course records are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub calendar_base: Url,
    pub meal_plan_login: Url,
    /// Json file backing the course store; `None` keeps records in memory.
    pub cache: Option<PathBuf>,
}

impl Config {
    pub fn new(calendar_base: &str, meal_plan_login: &str, cache: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            calendar_base: directory_url(calendar_base)?,
            meal_plan_login: meal_plan_login.parse()?,
            cache,
        })
    }

    /// Reads `UOGUELPH_CALENDAR_BASE`, `MEAL_PLAN_LOGIN_URL` and `CACHE`,
    /// falling back to the university's own hosts and an in-memory store.
    pub fn from_env() -> Result<Self> {
        let calendar_base = env::var("UOGUELPH_CALENDAR_BASE")
            .unwrap_or_else(|_| DEFAULT_CALENDAR_BASE.to_string());
        let meal_plan_login = env::var("MEAL_PLAN_LOGIN_URL")
            .unwrap_or_else(|_| DEFAULT_MEAL_PLAN_LOGIN.to_string());
        let cache = match env::var("CACHE") {
            Ok(p) if !p.is_empty() => Some(PathBuf::from(p)),
            _ => {
                log::debug!("env var CACHE not set, course records stay in memory.");
                None
            }
        };
        Self::new(&calendar_base, &meal_plan_login, cache)
    }
}

/// Parses `s` so that relative joins land below its path rather than replacing
/// the last segment.
fn directory_url(s: &str) -> Result<Url> {
    if s.ends_with('/') {
        Ok(s.parse()?)
    } else {
        Ok(format!("{s}/").parse()?)
    }
}
