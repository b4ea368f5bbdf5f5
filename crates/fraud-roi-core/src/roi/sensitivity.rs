use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::assumptions::ModelAssumptions;
use super::inputs::{InputField, RoiInput};
use super::projection::{project, RoiProjection};
use crate::{types::*, FraudRoiResult};

/// Input for a one-way sweep across a single slider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepInput {
    /// Values held fixed for the other four fields
    pub base: RoiInput,
    /// Field to sweep across its full slider range
    pub field: InputField,
    #[serde(default)]
    pub assumptions: ModelAssumptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRow {
    pub value: Decimal,
    #[serde(flatten)]
    pub projection: RoiProjection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepOutput {
    pub field: InputField,
    pub rows: Vec<SweepRow>,
    /// Row whose swept value sits closest to the base input
    pub base_case_index: usize,
}

/// Find the closest index to a target value.
fn closest_index(values: &[Decimal], target: Decimal) -> usize {
    values
        .iter()
        .enumerate()
        .min_by_key(|(_, v)| (**v - target).abs())
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Evaluate the projection at every slider stop of one field.
pub fn sweep(input: &SweepInput) -> FraudRoiResult<ComputationOutput<SweepOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    input.base.validate()?;
    input.assumptions.validate()?;

    let stops = input.field.range().stops();
    let mut rows = Vec::with_capacity(stops.len());
    for value in &stops {
        let candidate = input.base.with(input.field, *value);
        rows.push(SweepRow {
            value: *value,
            projection: project(&candidate, &input.assumptions)?,
        });
    }

    let base_case_index = closest_index(&stops, input.base.get(input.field));
    debug!(field = %input.field, rows = rows.len(), "sensitivity sweep evaluated");

    let output = SweepOutput {
        field: input.field,
        rows,
        base_case_index,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "One-way ROI sensitivity sweep",
        &serde_json::json!({
            "field": input.field,
            "range": input.field.range(),
            "base": input.base,
            "assumptions": input.assumptions,
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FraudRoiError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_team_size_sweep() {
        let input = SweepInput {
            base: RoiInput::default(),
            field: InputField::TeamSize,
            assumptions: ModelAssumptions::default(),
        };
        let out = sweep(&input).unwrap().result;

        assert_eq!(out.rows.len(), 49);
        assert_eq!(out.rows[0].value, dec!(2));
        assert_eq!(out.rows[48].value, dec!(50));
        // Base of 10 analysts sits at index 8
        assert_eq!(out.base_case_index, 8);
        assert_eq!(
            out.rows[out.base_case_index].projection.total_alerts_per_year,
            dec!(130_000)
        );
        assert!(out
            .rows
            .windows(2)
            .all(|w| w[0].projection.total_alerts_per_year
                <= w[1].projection.total_alerts_per_year));
    }

    #[test]
    fn test_rows_flatten_projection() {
        let input = SweepInput {
            base: RoiInput::default(),
            field: InputField::AvgInvestigationMinutes,
            assumptions: ModelAssumptions::default(),
        };
        let out = sweep(&input).unwrap().result;
        let json = serde_json::to_value(&out.rows[0]).unwrap();
        assert!(json.get("value").is_some());
        assert!(json.get("saved_cost").is_some());
        assert!(json.get("projection").is_none());
    }

    #[test]
    fn test_invalid_base_rejected() {
        let input = SweepInput {
            base: RoiInput {
                team_size: 0,
                ..RoiInput::default()
            },
            field: InputField::AvgSalaryThousands,
            assumptions: ModelAssumptions::default(),
        };
        assert!(matches!(
            sweep(&input),
            Err(FraudRoiError::OutOfRange { .. })
        ));
    }
}
