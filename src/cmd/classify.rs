//! `classify` and `thresholds` commands.

use anyhow::Result;
use tracing::info;

use parcel_sort::{Measure, Package};

use super::ui::Output;

/// Classify one package from command-line strings.
///
/// Classification errors are rendered through `output` (JSON mode) and then
/// returned so the caller can pick the exit status.
pub fn cmd_classify(
    output: &Output,
    width: &str,
    height: &str,
    length: &str,
    mass: &str,
) -> Result<()> {
    let measures = [width, height, length, mass].map(Measure::from);

    let package = match Package::from_measures(measures) {
        Ok(package) => package,
        Err(err) => {
            output.sort_error(&err);
            return Err(err.into());
        }
    };

    let category = package.category();
    info!(%category, "Package classified");
    output.classification(&package, category);

    Ok(())
}

/// Print the fixed thresholds.
pub fn cmd_thresholds(output: &Output) -> Result<()> {
    output.thresholds();
    Ok(())
}
