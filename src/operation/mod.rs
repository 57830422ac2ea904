//! Runs a set of appliances for a while and reports what happened.
use crate::appliance::{displayable, Appliance};
use itertools::Itertools;
use std::io;
use thiserror::Error;
use tracing::debug;
use uom::si::{energy::watt_hour, f64::*};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("failed to write the operation report: {0}")]
    Output(#[from] io::Error),
}

/// Activates each appliance in order and writes its features and
/// consumption over the given duration.
pub fn operate_appliances(
    appliances: &[&dyn Appliance],
    duration: Time,
    out: &mut dyn io::Write,
) -> Result<(), OperationError> {
    for appliance in appliances {
        debug!(appliance = %appliance.describe(), "operating");

        writeln!(out)?;
        writeln!(out, "--- Mengoperasikan {} ---", appliance.name())?;
        appliance.activate(out)?;
        writeln!(out, "Fitur: {}", format_features(appliance.features()))?;
        writeln!(
            out,
            "Total Konsumsi Daya: {} watt-jam",
            displayable(appliance.consumption(duration).get::<watt_hour>())
        )?;
    }

    Ok(())
}

fn format_features(features: &[String]) -> String {
    format!(
        "[{}]",
        features.iter().map(|feature| format!("'{}'", feature)).join(", ")
    )
}
