use std::io::Write;

use thiserror::Error;

use crate::entity::{RefReceiverEntity, ValueReceiverEntity};
use crate::receiver::deliver;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

/// The caller's two entities as they stand after delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub value: ValueReceiverEntity,
    pub reference: RefReceiverEntity,
}

pub fn state_line(r1: &ValueReceiverEntity, r2: &RefReceiverEntity) -> String {
    format!("r1.data={}\tr2.data={}", r1.data(), r2.data())
}

/// Builds one entity of each kind, delivers to both, and writes their state
/// before and after.
pub fn run<W: Write>(out: &mut W) -> Result<Report, DemoError> {
    let mut r1 = ValueReceiverEntity::new();
    let mut r2 = RefReceiverEntity::new();

    writeln!(out, "{}", state_line(&r1, &r2)).map_err(DemoError::WriteOutput)?;

    deliver(&mut r1);
    deliver(&mut r2);

    writeln!(out, "{}", state_line(&r1, &r2)).map_err(DemoError::WriteOutput)?;

    Ok(Report {
        value: r1,
        reference: r2,
    })
}
