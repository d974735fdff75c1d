// src/config/consts.rs

// Net config
pub const HOST: &str = "moon.cc.huji.ac.il";
pub const PORT: u16 = 80;
pub const PREFIX: &str = "/nano/pages/";
pub const CATALOG_PAGE: &str = "wfrMaslulDetails.aspx";
pub const COURSE_PAGE: &str = "wfrCourse.aspx";
pub const NET_TIMEOUT_SECS: u64 = 15;

// Catalog defaults
pub const DEFAULT_YEAR: u32 = 2021;
pub const DEFAULT_DEGREE_CODE: u32 = 71;

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// User input
pub const UNAVAILABLE_TIME_FILENAME: &str = "unavailable_times.csv";
pub const COMPLETED_COURSES_FILENAME: &str = "completed_courses.txt";

// Saved pages (offline source)
pub const CATALOG_PAGE_FILE: &str = "catalog.html";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const DETAIL_FILE: &str = "pretty.json";
pub const IDS_FILE: &str = "shortened.json";
pub const JSON_INDENT: &[u8] = b"    ";

// Filtering
/// Buffer, in minutes, kept free on both sides of a blocked interval.
pub const TIME_OFFSET: i32 = 15;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
