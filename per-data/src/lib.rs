//! Loading income tax schedules from CSV files.

mod loader;

pub use loader::{BracketRecord, ParameterRecord, ScheduleLoader, ScheduleLoaderError};
