// src/runner.rs
use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use tracing::{error, info};

use crate::{
    config::RunConfig,
    core::net,
    data::{RegionRecord, StatusPage},
    file,
    progress::Progress,
    report,
    sort::sort_records,
    specs::rs_status,
};

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Fetch failed or the page listed no regions; nothing sorted, nothing written.
    NoData,
    Reported {
        regions: usize,
        /// Set only when the export file was written successfully.
        written: Option<PathBuf>,
    },
}

/// Top-level pipeline: fetch → extract → sort → print → persist.
/// A failed fetch is logged and degrades to `NoData`; a page that fetched but
/// does not parse is an error.
pub fn run<W: Write>(
    config: &RunConfig,
    out: W,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunOutcome> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Gathering data...\n");
    }

    let doc = match net::fetch_status_page(&config.target_url) {
        Ok(doc) => Some(doc),
        Err(e) => {
            error!("Fetching status page from {} failed: {e:?}", config.target_url);
            None
        }
    };

    report_page(config, doc.as_deref(), out, progress)
}

/// Everything after the fetch. `doc` is `None` when there was nothing to fetch.
pub fn report_page<W: Write>(
    config: &RunConfig,
    doc: Option<&str>,
    mut out: W,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunOutcome> {
    let page = match doc {
        Some(doc) => rs_status::extract(doc)?,
        None => StatusPage::default(),
    };

    // Guard before anything touches the aggregate
    let StatusPage { mut regions, aggregate } = page;
    let Some(aggregate) = aggregate.filter(|_| !regions.is_empty()) else {
        writeln!(out, "No data")?;
        return Ok(RunOutcome::NoData);
    };

    if let Some(p) = progress.as_deref_mut() {
        p.log("\nSorting data...\n");
    }
    sort_records(&mut regions, config);

    report::render(&mut out, &regions, &aggregate)?;

    let written = match config.output_path() {
        Some(path) => persist(path, &regions, progress.as_deref_mut()),
        None => None,
    };

    Ok(RunOutcome::Reported { regions: regions.len(), written })
}

/// Best-effort export: failures are logged, never returned.
fn persist(
    path: &Path,
    regions: &[RegionRecord],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Option<PathBuf> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("\nWriting data to {} ...\n", path.display()));
    }

    match file::write_report(path, regions) {
        Ok(()) => {
            info!("Wrote {} regions to {}", regions.len(), path.display());
            if let Some(p) = progress.as_deref_mut() {
                p.log("\nWrote data OK\n");
            }
            Some(path.to_path_buf())
        }
        Err(e) => {
            error!("Writing {} failed: {e:?}", path.display());
            None
        }
    }
}
