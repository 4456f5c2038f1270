// src/specs/rs_status.rs
//
// The region server `rs-status?filter=all` page:
//
//   #tab_regionRequestStats > table : header row, then one row per region
//       [name, read request count, write request count]
//   #tab_requestStats > table       : header row, then one aggregate row
//       [requests per second, read request count, write request count]

use std::str::FromStr;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::{debug, info};

use crate::config::consts::{REGION_TABLE_ID, SERVER_TABLE_ID};
use crate::core::html::{element_by_id, first_block_inner, row_cells, tag_blocks_ci};
use crate::data::{RegionRecord, ServerAggregate, StatusPage};

/// Extract region rows and, when there are any, the server aggregate.
/// No region rows means an empty page; the aggregate table is then not touched.
pub fn extract(doc: &str) -> Result<StatusPage> {
    let regions = extract_regions(doc)?;
    if regions.is_empty() {
        info!("No region rows in #{REGION_TABLE_ID}");
        return Ok(StatusPage::default());
    }

    let aggregate = extract_aggregate(doc)?;
    info!("Extracted {} regions", regions.len());
    Ok(StatusPage { regions, aggregate: Some(aggregate) })
}

/// Data rows (`<tr>` after the header) of the first table under `id`.
fn table_rows<'a>(doc: &'a str, id: &str) -> Vec<&'a str> {
    element_by_id(doc, id)
        .and_then(|el| first_block_inner(el, "table"))
        .map(|table| tag_blocks_ci(table, "tr"))
        .unwrap_or_default()
}

pub fn extract_regions(doc: &str) -> Result<Vec<RegionRecord>> {
    let rows = table_rows(doc, REGION_TABLE_ID);

    let mut out = Vec::with_capacity(rows.len().saturating_sub(1));
    for (i, tr) in rows.iter().enumerate().skip(1) {
        let cells = row_cells(tr);
        if cells.len() < 3 {
            return Err(eyre!("Region row {i} has {} cells, expected 3", cells.len()));
        }

        let name = region_name(&cells[0]);
        debug!("Name: {name}");

        let read = parse_cell(&cells[1], "read count", i)?;
        let write = parse_cell(&cells[2], "write count", i)?;
        out.push(RegionRecord::new(name, read, write));
    }
    Ok(out)
}

pub fn extract_aggregate(doc: &str) -> Result<ServerAggregate> {
    let rows = table_rows(doc, SERVER_TABLE_ID);
    let tr = rows
        .get(1)
        .ok_or_else(|| eyre!("Request stats row not found in #{SERVER_TABLE_ID}"))?;

    let cells = row_cells(tr);
    if cells.len() < 3 {
        return Err(eyre!("Request stats row has {} cells, expected 3", cells.len()));
    }

    Ok(ServerAggregate {
        requests_per_second: parse_cell(&cells[0], "requests per second", 1)?,
        read_request_count: parse_cell(&cells[1], "read request count", 1)?,
        write_request_count: parse_cell(&cells[2], "write request count", 1)?,
    })
}

/// Rebuild a region name the page split on commas.
/// `t,start,id` → `t,start`; `t,,id` → `t`; `t` → `t`.
pub fn region_name(raw: &str) -> String {
    let mut parts = raw.split(',');
    let table = parts.next().unwrap_or("");
    match parts.next() {
        Some(start_key) if !start_key.is_empty() => join!(table, ",", start_key),
        _ => s!(table),
    }
}

fn parse_cell<T>(cell: &str, what: &str, row: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    cell.trim()
        .parse::<T>()
        .wrap_err_with(|| format!("Row {row}: {what} {cell:?} is not an integer"))
}
