//! Sensitivity sweeps
//!
//! Evaluate the grip requirement while one parameter runs over a range, and
//! export the table as CSV for plotting.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::physics::grip::{compute, BindingConstraint, GripError, GripRequirementInput};
use crate::types::*;

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid sweep range: {0}")]
    InvalidRange(String),

    #[error("Grip error at {parameter} = {value}: {source}")]
    GripError {
        parameter: &'static str,
        value: f64,
        #[source]
        source: GripError,
    },
}

/// Input parameter varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepParameter {
    /// Safety factor (-)
    SafetyFactor,
    /// Object mass (kg)
    Mass,
    /// Friction coefficient μ (-)
    FrictionCoefficient,
    /// Center of mass offset (mm); turns the moment check on
    ComOffset,
    /// Vertical acceleration (m/s²)
    VerticalAcceleration,
}

impl SweepParameter {
    /// CSV column name including the unit
    pub fn column(&self) -> &'static str {
        match self {
            SweepParameter::SafetyFactor => "safety_factor",
            SweepParameter::Mass => "mass_kg",
            SweepParameter::FrictionCoefficient => "friction_coefficient",
            SweepParameter::ComOffset => "com_offset_mm",
            SweepParameter::VerticalAcceleration => "vertical_acceleration_mps2",
        }
    }

    /// Copy of `input` with this parameter set to `value`
    pub fn apply(&self, input: &GripRequirementInput, value: f64) -> GripRequirementInput {
        let mut input = input.clone();
        match self {
            SweepParameter::SafetyFactor => input.safety_factor = value,
            SweepParameter::Mass => input.mass = Mass::new::<kilogram>(value),
            SweepParameter::FrictionCoefficient => input.friction_coefficient = value,
            SweepParameter::ComOffset => {
                input.consider_moment = true;
                input.com_offset = Length::new::<millimeter>(value);
            }
            SweepParameter::VerticalAcceleration => {
                input.vertical_acceleration = Acceleration::new::<meter_per_second_squared>(value)
            }
        }
        input
    }
}

/// One evaluated point of a sweep, forces in newtons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub value: f64,
    pub effective_load: f64,
    pub translational: f64,
    pub rotational: f64,
    pub required_per_contact: f64,
    pub total: f64,
    pub binding: BindingConstraint,
}

/// Evaluate `steps` evenly spaced values from `start` to `end` inclusive
pub fn sweep(
    input: &GripRequirementInput,
    parameter: SweepParameter,
    start: f64,
    end: f64,
    steps: usize,
) -> Result<Vec<SweepRow>, SweepError> {
    if steps == 0 {
        return Err(SweepError::InvalidRange("at least one step required".into()));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(SweepError::InvalidRange(format!("{start}..{end} is not finite")));
    }

    let step = if steps > 1 {
        (end - start) / (steps - 1) as f64
    } else {
        0.0
    };

    (0..steps)
        .map(|i| {
            let value = (i as f64).mul_add(step, start);
            let result = compute(&parameter.apply(input, value)).map_err(|source| {
                SweepError::GripError {
                    parameter: parameter.column(),
                    value,
                    source,
                }
            })?;

            Ok(SweepRow {
                value,
                effective_load: result.effective_load.get::<newton>(),
                translational: result.translational_force_per_contact.get::<newton>(),
                rotational: result.rotational_force_per_contact.get::<newton>(),
                required_per_contact: result.required_force_per_contact.get::<newton>(),
                total: result.total_required_force.get::<newton>(),
                binding: result.binding,
            })
        })
        .collect()
}

/// Number formatting for CSV cells; the unsatisfiable requirement is `inf`
fn cell(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "inf".into() } else { "-inf".into() }
    } else {
        format!("{value:.6}")
    }
}

/// Write sweep rows as CSV with a header line
pub fn write_csv<W: Write>(
    parameter: SweepParameter,
    rows: &[SweepRow],
    writer: W,
) -> Result<(), SweepError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        parameter.column(),
        "effective_load_n",
        "translational_n",
        "rotational_n",
        "required_per_contact_n",
        "total_n",
        "binding",
    ])?;

    for row in rows {
        let binding = match row.binding {
            BindingConstraint::Translational => "translational",
            BindingConstraint::Rotational => "rotational",
        };
        csv.write_record([
            cell(row.value),
            cell(row.effective_load),
            cell(row.translational),
            cell(row.rotational),
            cell(row.required_per_contact),
            cell(row.total),
            binding.to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write sweep rows to a CSV file
pub fn write_csv_file(
    parameter: SweepParameter,
    rows: &[SweepRow],
    path: impl AsRef<Path>,
) -> Result<(), SweepError> {
    let path = path.as_ref();
    write_csv(parameter, rows, File::create(path)?)?;
    info!(rows = rows.len(), file = %path.display(), "Wrote sweep");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base() -> GripRequirementInput {
        GripRequirementInput::new(Mass::new::<kilogram>(2.0), 2, 0.15).with_safety_factor(2.0)
    }

    #[test]
    fn test_safety_factor_sweep_is_linear() {
        let rows = sweep(&base(), SweepParameter::SafetyFactor, 1.0, 3.0, 5).unwrap();

        assert_eq!(rows.len(), 5);
        assert_relative_eq!(rows[0].value, 1.0);
        assert_relative_eq!(rows[4].value, 3.0);
        // 19.62 * SF / 0.3
        assert_relative_eq!(rows[0].required_per_contact, 65.4, epsilon = 1e-9);
        assert_relative_eq!(rows[2].required_per_contact, 130.8, epsilon = 1e-9);
        assert_relative_eq!(rows[4].required_per_contact, 196.2, epsilon = 1e-9);
    }

    #[test]
    fn test_single_step_uses_start() {
        let rows = sweep(&base(), SweepParameter::Mass, 4.0, 10.0, 1).unwrap();
        assert_eq!(rows.len(), 1);
        assert_relative_eq!(rows[0].effective_load, 39.24, epsilon = 1e-9);
    }

    #[test]
    fn test_offset_sweep_switches_binding() {
        let input = base().with_moment(Length::new::<millimeter>(0.0), Length::new::<millimeter>(10.0));
        let rows = sweep(&input, SweepParameter::ComOffset, 0.0, 20.0, 3).unwrap();

        assert_eq!(rows[0].binding, BindingConstraint::Translational);
        // At 10 mm rotation equals translation, ties go to translation
        assert_relative_eq!(rows[1].rotational, rows[1].translational, epsilon = 1e-9);
        assert_eq!(rows[2].binding, BindingConstraint::Rotational);
    }

    #[test]
    fn test_invalid_point_reports_value() {
        let err = sweep(&base(), SweepParameter::SafetyFactor, 0.5, 2.0, 4).unwrap_err();
        assert!(matches!(
            err,
            SweepError::GripError { parameter: "safety_factor", value, .. } if value == 0.5
        ));
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(matches!(
            sweep(&base(), SweepParameter::Mass, 1.0, 2.0, 0),
            Err(SweepError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_csv_marks_infinite_rows() {
        let rows = sweep(&base(), SweepParameter::FrictionCoefficient, 0.0, 0.3, 2).unwrap();
        let mut out = Vec::new();
        write_csv(SweepParameter::FrictionCoefficient, &rows, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("friction_coefficient,effective_load_n"));
        assert!(lines[1].contains(",inf,"));
        assert!(lines[2].starts_with("0.300000,19.620000,65.400000"));
    }

    #[test]
    fn test_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        let rows = sweep(&base(), SweepParameter::VerticalAcceleration, -2.0, 2.0, 3).unwrap();

        write_csv_file(SweepParameter::VerticalAcceleration, &rows, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.records().count(), 3);
    }
}
