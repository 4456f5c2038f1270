// src/report.rs
// Tab-separated console report: region table, then the server section.

use std::io::{self, Write};

use crate::config::consts::{REPORT_HEADERS, SERVER_HEADERS};
use crate::data::{RegionRecord, ServerAggregate};

/// Region table in the order given, then the server aggregate.
pub fn render<W: Write>(mut w: W, records: &[RegionRecord], aggregate: &ServerAggregate) -> io::Result<()> {
    writeln!(w, "{}\n", REPORT_HEADERS.join("\t"))?;
    for r in records {
        writeln!(w, "{}\t{}\t{}\t{}", r.name(), r.read_count(), r.write_count(), r.total_count())?;
    }

    writeln!(w, "\nRegion Servers\n")?;
    writeln!(w, "{}", SERVER_HEADERS.join("\t"))?;
    writeln!(w, "{}", dash_rule(&SERVER_HEADERS))?;
    writeln!(
        w,
        "{}\t{}\t{}",
        aggregate.requests_per_second, aggregate.read_request_count, aggregate.write_request_count
    )?;
    w.flush()
}

/// One run of dashes per header, as wide as the header.
fn dash_rule(headers: &[&str]) -> String {
    headers
        .iter()
        .map(|h| "-".repeat(h.chars().count()))
        .collect::<Vec<_>>()
        .join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dash_rule_matches_header_widths() {
        assert_eq!(
            dash_rule(&SERVER_HEADERS),
            "------------------\t------------------\t-------------------"
        );
    }

    #[test]
    fn renders_full_report() {
        let records = vec![
            RegionRecord::new("t,k1", 5, 1),
            RegionRecord::new("hbase:meta", 0, 2),
        ];
        let agg = ServerAggregate { requests_per_second: 3, read_request_count: 100, write_request_count: 20 };

        let mut buf = Vec::new();
        render(&mut buf, &records, &agg).unwrap();

        let expected = "Name\tRead Count\tWrite Count\tTotal Count\n\
                        \n\
                        t,k1\t5\t1\t6\n\
                        hbase:meta\t0\t2\t2\n\
                        \n\
                        Region Servers\n\
                        \n\
                        Request Per Second\tRead Request Count\tWrite Request Count\n\
                        ------------------\t------------------\t-------------------\n\
                        3\t100\t20\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }
}
