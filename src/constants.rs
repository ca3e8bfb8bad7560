//! Constants used throughout the application.
//!
//! This module provides constants used throughout the application.

pub const DEFAULT_BASE_URL: &str = "https://stellarium.onrender.com";
pub const STAR_API_PATH: &str = "api/star";
pub const STAR_NAME_PARAM: &str = "name";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching star data";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 120;
pub const MAX_BASE_URL_LENGTH: usize = 2048;
pub const EVENT_POLL_MILLIS: u64 = 50;
pub const RUNTIME_WORKER_THREADS: usize = 2;
pub const INPUT_PLACEHOLDER: &str = "Enter star name";
