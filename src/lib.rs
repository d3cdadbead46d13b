//! Scrapers for public University of Guelph pages: course calendar entries,
//! campus events, meal plan balances and plain-text class schedules.
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc)]

pub mod cache;
pub mod calendar;
pub mod client;
pub mod config;
mod error;
pub mod fetch;
pub mod parse;

pub use calendar::CalendarType;
pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use fetch::Credentials;
