// src/config/consts.rs
use std::time::Duration;

// Net config
pub const STATUS_PATH: &str = "/rs-status?filter=all";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// No timeout: a stalled server blocks the run indefinitely.
pub const FETCH_TIMEOUT: Option<Duration> = None;

// Page layout (element ids on rs-status)
pub const REGION_TABLE_ID: &str = "tab_regionRequestStats";
pub const SERVER_TABLE_ID: &str = "tab_requestStats";

// Export
pub const EXPORT_SEP: char = ',';
pub const EXPORT_HEADERS: [&str; 4] = ["Region Name", "Read Count", "Write Count", "Total Count"];

// Console report
pub const REPORT_HEADERS: [&str; 4] = ["Name", "Read Count", "Write Count", "Total Count"];
pub const SERVER_HEADERS: [&str; 3] = ["Request Per Second", "Read Request Count", "Write Request Count"];

pub const USAGE: &str = "Please input HBase Region Server URL (e.g. http://10.1.18.168:60030), \
sort field (e.g. 'w' or 'r' or 't'), sort direction (e.g. 'inc' or 'desc'), output filename";
