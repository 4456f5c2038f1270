//! # Page "specs"
//!
//! Page-specific extraction: each spec knows **where the numbers live in one
//! page's HTML** and turns that markup into typed records.
//!
//! ## What lives here
//! - Pure parsing of a fetched document (no network, no files).
//! - Positional selectors: table located by element id, rows by index, cells by
//!   column. The page layout is an external, versioned format; when the server
//!   changes it, this is the only place that moves.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), ordering (`sort`), console output (`report`) or
//!   export (`file`).
//!
//! ## Conventions
//! - Case-insensitive tag detection via `core::html`.
//! - A malformed numeric cell fails the whole extraction; there is no partial record.
//! - Specs are testable offline against inline HTML fixtures.
pub mod rs_status;
