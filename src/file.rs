// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use color_eyre::eyre::{bail, eyre, Result, WrapErr};

use crate::config::consts::{EXPORT_HEADERS, EXPORT_SEP};
use crate::csv::{parse_rows, write_row};
use crate::data::RegionRecord;

/// Write the export header and one row per record, in the order given.
/// Creates missing parent directories; an existing file is overwritten.
pub fn write_report(path: &Path, records: &[RegionRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path) // truncate/overwrite
        .wrap_err_with(|| format!("Cannot create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    write_row(&mut out, &EXPORT_HEADERS, EXPORT_SEP)?;
    for r in records {
        write_row(&mut out, &r.to_row(), EXPORT_SEP)?;
    }
    out.flush()
        .wrap_err_with(|| format!("Cannot write {}", path.display()))?;
    Ok(())
}

/// Read a file produced by [`write_report`] back into records.
/// The total column must agree with read + write.
pub fn read_report(path: &Path) -> Result<Vec<RegionRecord>> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Cannot read {}", path.display()))?;

    let mut rows = parse_rows(&text, EXPORT_SEP).into_iter();
    match rows.next() {
        Some(header) if header == EXPORT_HEADERS => {}
        Some(header) => bail!("Unexpected header in {}: {:?}", path.display(), header),
        None => bail!("{} is empty", path.display()),
    }

    rows.enumerate()
        .map(|(i, row)| record_from_row(&row).wrap_err_with(|| format!("{} line {}", path.display(), i + 2)))
        .collect()
}

fn record_from_row(row: &[String]) -> Result<RegionRecord> {
    let [name, read, write, total] = row else {
        bail!("expected 4 fields, found {}", row.len());
    };
    let read: u64 = read.parse().wrap_err("bad read count")?;
    let write: u64 = write.parse().wrap_err("bad write count")?;
    let total: u64 = total.parse().wrap_err("bad total count")?;

    let record = RegionRecord::new(name.as_str(), read, write);
    if record.total_count() != total {
        return Err(eyre!("total {total} != {read} + {write}"));
    }
    Ok(record)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        bail!("Path exists but is not a directory: {}", dir.display());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Cannot create directory {}", dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn writes_header_and_rows_with_crlf() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let records = vec![RegionRecord::new("t,k", 1, 2), RegionRecord::new("m", 0, 0)];

        write_report(&path, &records).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Region Name,Read Count,Write Count,Total Count\r\n\"t,k\",1,2,3\r\nm,0,0,0\r\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        fs::write(&path, "old contents that are much longer than the new report\n".repeat(20)).unwrap();

        write_report(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Region Name,Read Count,Write Count,Total Count\r\n");
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/out.csv");
        write_report(&path, &[RegionRecord::new("a", 1, 1)]).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn fails_when_parent_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        assert!(write_report(&blocker.join("out.csv"), &[]).is_err());
    }

    #[test]
    fn read_rejects_inconsistent_total() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.csv");
        fs::write(&path, "Region Name,Read Count,Write Count,Total Count\r\na,1,2,4\r\n").unwrap();
        let err = read_report(&path).unwrap_err();
        assert!(format!("{err:#}").contains("total 4 != 1 + 2"));
    }

    #[test]
    fn read_rejects_foreign_header() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("other.csv");
        fs::write(&path, "Name,Count\r\na,1\r\n").unwrap();
        assert!(read_report(&path).is_err());
    }
}
