//! Appending primitive records to a control-set sink

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::common::{ControlSetResult, CurveModel, DiscreteAngleModel};

use super::primitive::Primitive;
use super::record::PrimitiveRecord;

/// Append one primitive record to the sink.
///
/// The record is formatted into a single buffer and handed to the sink
/// in one `write_all`, so a sampling or formatting failure leaves the
/// sink untouched. There is no de-duplication across calls: the file
/// accumulates one record per variant the batch produces.
pub fn write_primitive<C, A, W>(
    sink: &mut W,
    prim: &Primitive<C>,
    angles: &A,
) -> ControlSetResult<()>
where
    C: CurveModel,
    A: DiscreteAngleModel,
    W: Write,
{
    let record = PrimitiveRecord::from_primitive(prim, angles)?;
    sink.write_all(record.to_text().as_bytes())?;
    Ok(())
}

/// Open `path` for appending, creating it if absent but never
/// truncating it, and write one primitive record.
pub fn append_to_file<C, A, P>(path: P, prim: &Primitive<C>, angles: &A) -> ControlSetResult<()>
where
    C: CurveModel,
    A: DiscreteAngleModel,
    P: AsRef<Path>,
{
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    write_primitive(&mut file, prim, angles)
}
