// src/sort.rs
use std::cmp::Ordering;

use crate::config::{Direction, RunConfig, SortField};
use crate::data::RegionRecord;

fn metric(field: SortField) -> fn(&RegionRecord) -> u64 {
    match field {
        SortField::Read => RegionRecord::read_count,
        SortField::Write => RegionRecord::write_count,
        SortField::Total => RegionRecord::total_count,
    }
}

/// Comparator for one metric and direction. Descending flips the ordering;
/// there is no secondary key.
pub fn comparator(field: SortField, direction: Direction) -> impl Fn(&RegionRecord, &RegionRecord) -> Ordering {
    let key = metric(field);
    move |a, b| {
        let ord = key(a).cmp(&key(b));
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// Stable: records with equal metrics keep their page order in either direction.
pub fn sort_records(records: &mut [RegionRecord], config: &RunConfig) {
    records.sort_by(comparator(config.sort_field, config.direction));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cfg(field: SortField, direction: Direction) -> RunConfig {
        RunConfig::new("http://rs", field, direction, None)
    }

    fn sample() -> Vec<RegionRecord> {
        vec![
            RegionRecord::new("a", 1, 1),
            RegionRecord::new("b", 0, 5),
            RegionRecord::new("c", 2, 0),
        ]
    }

    fn names(v: &[RegionRecord]) -> Vec<&str> {
        v.iter().map(RegionRecord::name).collect()
    }

    #[test]
    fn total_ascending_keeps_ties_in_input_order() {
        let mut v = sample();
        sort_records(&mut v, &cfg(SortField::Total, Direction::Ascending));
        assert_eq!(names(&v), vec!["a", "c", "b"]);
    }

    #[test]
    fn total_descending_keeps_ties_in_input_order() {
        let mut v = sample();
        sort_records(&mut v, &cfg(SortField::Total, Direction::Descending));
        assert_eq!(names(&v), vec!["b", "a", "c"]);
    }

    #[test]
    fn write_descending_puts_heaviest_writer_first() {
        let mut v = sample();
        sort_records(&mut v, &cfg(SortField::Write, Direction::Descending));
        assert_eq!(names(&v), vec!["b", "a", "c"]);
    }

    #[test]
    fn read_ascending() {
        let mut v = sample();
        sort_records(&mut v, &cfg(SortField::Read, Direction::Ascending));
        assert_eq!(names(&v), vec!["b", "a", "c"]);
    }

    #[test]
    fn large_counts_do_not_wrap() {
        let mut v = vec![
            RegionRecord::new("huge", u64::MAX - 1, 0),
            RegionRecord::new("tiny", 0, 0),
        ];
        sort_records(&mut v, &cfg(SortField::Read, Direction::Ascending));
        assert_eq!(names(&v), vec!["tiny", "huge"]);
    }

    #[test]
    fn sort_is_a_permutation() {
        let input: Vec<RegionRecord> = (0..50u64)
            .map(|i| RegionRecord::new(format!("r{i}"), (i * 7) % 11, (i * 3) % 5))
            .collect();

        for field in [SortField::Read, SortField::Write, SortField::Total] {
            for direction in [Direction::Ascending, Direction::Descending] {
                let mut sorted = input.clone();
                sort_records(&mut sorted, &cfg(field, direction));
                assert_eq!(sorted.len(), input.len());

                let mut a = names(&sorted);
                let mut b = names(&input);
                a.sort_unstable();
                b.sort_unstable();
                assert_eq!(a, b);

                let cmp = comparator(field, direction);
                assert!(sorted.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater));
            }
        }
    }
}
