//! Field extractors for the pages and text the university publishes.
//! Extraction is pure: every function here works on a string that was
//! already fetched.

mod error;
pub use error::Error;
pub mod course;
pub mod event;
pub mod meal_plan;
mod remove_excess_whitespace;
pub mod schedule;
mod static_selector;
mod text_from_selection;

pub use course::CourseRecord;
pub use event::EventRecord;
pub use meal_plan::MealBalanceRecord;
pub use remove_excess_whitespace::remove_excess_whitespace;
pub use schedule::{parse_schedule, parse_schedule_with, ScheduleItem, ScheduleRecord};
