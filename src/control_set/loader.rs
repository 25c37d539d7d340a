//! Loading a generated control set back for planner use

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ordered_float::NotNan;

use crate::common::{ControlSetError, ControlSetResult};

use super::record::{parse_records, PrimitiveRecord};

/// A loaded control set, grouped by discrete start heading
///
/// For every heading bin, the primitives a planner may apply from a
/// state with that heading. Built from the records of one or more
/// generation batches.
#[derive(Debug)]
pub struct ControlSet {
    by_heading: Vec<Vec<PrimitiveRecord>>,
}

impl ControlSet {
    pub fn from_records(bins: usize, records: Vec<PrimitiveRecord>) -> ControlSetResult<Self> {
        if bins == 0 {
            return Err(ControlSetError::InvalidParameter(
                "control set needs at least one heading bin".to_string(),
            ));
        }

        let mut by_heading = vec![Vec::new(); bins];
        for record in records {
            if record.start_bin >= bins || record.goal_bin >= bins {
                return Err(ControlSetError::ParseError(format!(
                    "heading bin out of range: record uses bins {} and {}, grid has {}",
                    record.start_bin, record.goal_bin, bins
                )));
            }
            by_heading[record.start_bin].push(record);
        }

        Ok(Self { by_heading })
    }

    pub fn from_reader<R: BufRead>(reader: R, bins: usize) -> ControlSetResult<Self> {
        Self::from_records(bins, parse_records(reader)?)
    }

    pub fn load_file<P: AsRef<Path>>(path: P, bins: usize) -> ControlSetResult<Self> {
        Self::from_reader(BufReader::new(File::open(path)?), bins)
    }

    /// Number of heading bins.
    pub fn bins(&self) -> usize {
        self.by_heading.len()
    }

    /// Primitives leaving a state with the given discrete heading.
    pub fn primitives_for(&self, heading: usize) -> &[PrimitiveRecord] {
        self.by_heading
            .get(heading)
            .map(|records| records.as_slice())
            .unwrap_or(&[])
    }

    /// Shortest primitive for a heading, if any.
    pub fn shortest_for(&self, heading: usize) -> Option<&PrimitiveRecord> {
        self.primitives_for(heading)
            .iter()
            .filter_map(|record| NotNan::new(record.length).ok().map(|l| (l, record)))
            .min_by_key(|(length, _)| *length)
            .map(|(_, record)| record)
    }

    /// Total number of primitives across all headings.
    pub fn len(&self) -> usize {
        self.by_heading.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
