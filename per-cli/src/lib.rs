pub mod app;
pub mod format;
pub mod logging;
pub mod report;
pub mod utils;
