// src/data.rs
//
// Records pulled off the rs-status page.
//
// - RegionRecord: one row of the per-region request table. The total is
//                 derived on demand from read + write, never stored.
// - ServerAggregate: the server-wide request counters (one per page).
// - StatusPage: everything one fetch yields.

/// Per-region request counters. Identity is positional; duplicate names are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionRecord {
    name: String,
    read_count: u64,
    write_count: u64,
}

impl RegionRecord {
    pub fn new(name: impl Into<String>, read_count: u64, write_count: u64) -> Self {
        Self { name: name.into(), read_count, write_count }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn read_count(&self) -> u64 { self.read_count }
    pub fn write_count(&self) -> u64 { self.write_count }

    /// read + write, saturating at `u64::MAX`.
    pub fn total_count(&self) -> u64 {
        self.read_count.saturating_add(self.write_count)
    }

    /// Cells in export column order: name, read, write, total.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.read_count.to_string(),
            self.write_count.to_string(),
            self.total_count().to_string(),
        ]
    }
}

/// Server-wide counters from the request stats table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerAggregate {
    pub requests_per_second: i64,
    pub read_request_count: i64,
    pub write_request_count: i64,
}

/// What one page yields. `aggregate` is only read when there are regions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusPage {
    pub regions: Vec<RegionRecord>,
    pub aggregate: Option<ServerAggregate>,
}

impl StatusPage {
    pub fn is_empty(&self) -> bool { self.regions.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_tracks_read_and_write() {
        let r = RegionRecord::new("t1,,1", 3, 4);
        assert_eq!(r.total_count(), 7);
        assert_eq!(r.to_row(), vec!["t1,,1", "3", "4", "7"]);
    }

    #[test]
    fn total_saturates() {
        let r = RegionRecord::new("big", u64::MAX, 1);
        assert_eq!(r.total_count(), u64::MAX);
    }
}
