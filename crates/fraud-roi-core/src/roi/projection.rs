use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use super::assumptions::{ModelAssumptions, MINUTES_PER_HOUR, PERCENT_SCALE, SALARY_UNIT};
use super::inputs::RoiInput;
use crate::{types::*, FraudRoiResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiRequest {
    pub input: RoiInput,
    #[serde(default)]
    pub assumptions: ModelAssumptions,
}

/// The eleven derived values. Everything except
/// `additional_real_cases_handled` is left unrounded for the caller to
/// format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub total_alerts_per_year: Count,
    pub false_positives_per_year: Count,
    pub hours_on_false_positives: Hours,
    pub total_team_cost: Money,
    pub cost_of_false_positives: Money,
    /// Share of team spend burned on false positives, capped at 100.
    pub false_positive_cost_percent: Percent,
    pub saved_hours: Hours,
    pub saved_cost: Money,
    /// Saved hours as full-time analysts.
    pub analyst_equivalent_saved: Count,
    pub effective_false_positive_rate: Percent,
    pub additional_real_cases_handled: Count,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project the savings from handing alert investigation to AI agents.
///
/// Pure and total over validated inputs: every call recomputes all eleven
/// outputs from scratch and keeps no state between calls.
pub fn project(input: &RoiInput, assumptions: &ModelAssumptions) -> FraudRoiResult<RoiProjection> {
    input.validate()?;
    assumptions.validate()?;
    Ok(evaluate(input, assumptions))
}

/// Run the projection and wrap it in the standard output envelope.
pub fn calculate_roi(request: &RoiRequest) -> FraudRoiResult<ComputationOutput<RoiProjection>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let projection = project(&request.input, &request.assumptions)?;

    let raw_percent = unclamped_cost_percent(&projection);
    if raw_percent > PERCENT_SCALE {
        warn!(
            raw_percent = %raw_percent.round_dp(1),
            "false positive workload exceeds team capacity; cost share capped"
        );
        warnings.push(format!(
            "False positive workload needs {}% of team capacity; cost share capped at 100%.",
            raw_percent.round_dp(1)
        ));
    }
    if !request.assumptions.is_default() {
        warnings.push("Non-default model assumptions in effect.".to_string());
    }

    debug!(
        team_size = request.input.team_size,
        saved_cost = %projection.saved_cost,
        analyst_equivalent = %projection.analyst_equivalent_saved,
        "roi projection computed"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    let a = &request.assumptions;
    let assumptions = serde_json::json!({
        "methodology": "Recovered-capacity projection for agent-assisted alert investigation",
        "working_days_per_year": a.working_days_per_year,
        "working_hours_per_year": a.working_hours_per_year,
        "investigation_time_reduction": a.investigation_time_reduction,
        "false_positive_reduction": a.false_positive_reduction,
        "savings_basis": "recovered capacity, not headcount elimination",
    });

    Ok(with_metadata(
        "Fraud operations ROI projection (false positive investigation cost)",
        &assumptions,
        warnings,
        elapsed,
        projection,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn evaluate(input: &RoiInput, a: &ModelAssumptions) -> RoiProjection {
    let team_size = Decimal::from(input.team_size);
    let alerts_per_day = Decimal::from(input.alerts_per_analyst_per_day);
    let salary = input.avg_salary_thousands * SALARY_UNIT;
    let minutes = input.avg_investigation_minutes;

    // -- Current state -------------------------------------------------------
    let total_alerts_per_year = team_size * alerts_per_day * a.working_days_per_year;
    let false_positives_per_year =
        total_alerts_per_year * (input.false_positive_rate_percent / PERCENT_SCALE);
    let hours_on_false_positives = (false_positives_per_year * minutes) / MINUTES_PER_HOUR;
    let total_team_cost = team_size * salary;
    let cost_of_false_positives = (hours_on_false_positives / a.working_hours_per_year) * salary;
    let false_positive_cost_percent =
        (cost_of_false_positives / total_team_cost * PERCENT_SCALE).min(PERCENT_SCALE);

    // -- With agents ---------------------------------------------------------
    let saved_hours = hours_on_false_positives * a.investigation_time_reduction;
    let saved_cost = cost_of_false_positives * a.investigation_time_reduction;
    let analyst_equivalent_saved = saved_hours / a.working_hours_per_year;
    let effective_false_positive_rate =
        input.false_positive_rate_percent * (Decimal::ONE - a.false_positive_reduction);
    let additional_real_cases_handled = (saved_hours * MINUTES_PER_HOUR / minutes)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    RoiProjection {
        total_alerts_per_year,
        false_positives_per_year,
        hours_on_false_positives,
        total_team_cost,
        cost_of_false_positives,
        false_positive_cost_percent,
        saved_hours,
        saved_cost,
        analyst_equivalent_saved,
        effective_false_positive_rate,
        additional_real_cases_handled,
    }
    .normalized()
}

impl RoiProjection {
    /// Strip trailing zeros left by the scale of intermediate products, so
    /// serialised values read `48` rather than `48.00`.
    fn normalized(self) -> Self {
        Self {
            total_alerts_per_year: self.total_alerts_per_year.normalize(),
            false_positives_per_year: self.false_positives_per_year.normalize(),
            hours_on_false_positives: self.hours_on_false_positives.normalize(),
            total_team_cost: self.total_team_cost.normalize(),
            cost_of_false_positives: self.cost_of_false_positives.normalize(),
            false_positive_cost_percent: self.false_positive_cost_percent.normalize(),
            saved_hours: self.saved_hours.normalize(),
            saved_cost: self.saved_cost.normalize(),
            analyst_equivalent_saved: self.analyst_equivalent_saved.normalize(),
            effective_false_positive_rate: self.effective_false_positive_rate.normalize(),
            additional_real_cases_handled: self.additional_real_cases_handled.normalize(),
        }
    }
}

fn unclamped_cost_percent(p: &RoiProjection) -> Percent {
    if p.total_team_cost.is_zero() {
        return Decimal::ZERO;
    }
    p.cost_of_false_positives / p.total_team_cost * PERCENT_SCALE
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FraudRoiError;
    use rust_decimal_macros::dec;

    fn minimum_input() -> RoiInput {
        RoiInput {
            team_size: 2,
            avg_salary_thousands: dec!(50),
            alerts_per_analyst_per_day: 10,
            false_positive_rate_percent: dec!(30),
            avg_investigation_minutes: dec!(10),
        }
    }

    #[test]
    fn test_default_scenario() {
        let p = project(&RoiInput::default(), &ModelAssumptions::default()).unwrap();

        // 10 analysts x 50 alerts x 260 days
        assert_eq!(p.total_alerts_per_year, dec!(130_000));
        assert_eq!(p.false_positives_per_year, dec!(104_000));
        // 104k x 45 min / 60
        assert_eq!(p.hours_on_false_positives, dec!(78_000));
        assert_eq!(p.total_team_cost, dec!(850_000));
        // 78k / 2080 = 37.5 FTE at 85k
        assert_eq!(p.cost_of_false_positives, dec!(3_187_500));
        // 375% of spend, capped
        assert_eq!(p.false_positive_cost_percent, dec!(100));
        assert_eq!(p.saved_hours, dec!(66_300));
        assert_eq!(p.saved_cost, dec!(2_709_375));
        assert_eq!(p.analyst_equivalent_saved, dec!(31.875));
        assert_eq!(p.effective_false_positive_rate, dec!(48));
        // 66300 x 60 / 45
        assert_eq!(p.additional_real_cases_handled, dec!(88_400));
    }

    #[test]
    fn test_minimum_scenario_below_cap() {
        let p = project(&minimum_input(), &ModelAssumptions::default()).unwrap();

        assert_eq!(p.total_alerts_per_year, dec!(5_200));
        assert_eq!(p.false_positives_per_year, dec!(1_560));
        assert_eq!(p.hours_on_false_positives, dec!(260));
        assert_eq!(p.total_team_cost, dec!(100_000));
        assert_eq!(p.cost_of_false_positives, dec!(6_250));
        assert_eq!(p.false_positive_cost_percent, dec!(6.25));
        assert_eq!(p.saved_hours, dec!(221));
        assert_eq!(p.saved_cost, dec!(5_312.5));
        assert_eq!(p.analyst_equivalent_saved, dec!(0.10625));
        assert_eq!(p.effective_false_positive_rate, dec!(18));
        assert_eq!(p.additional_real_cases_handled, dec!(1_326));
    }

    #[test]
    fn test_cases_round_half_away_from_zero() {
        // 3 analysts x 10 alerts x 260 x 35% = 2730 FP; x 25 min / 60 = 1137.5 h;
        // x 0.85 = 966.875 h; x 60 / 25 = 2320.5 cases
        let input = RoiInput {
            team_size: 3,
            alerts_per_analyst_per_day: 10,
            false_positive_rate_percent: dec!(35),
            avg_investigation_minutes: dec!(25),
            ..RoiInput::default()
        };
        let p = project(&input, &ModelAssumptions::default()).unwrap();
        assert_eq!(p.additional_real_cases_handled, dec!(2321));
    }

    #[test]
    fn test_out_of_range_rejected_not_clamped() {
        let input = RoiInput {
            avg_investigation_minutes: dec!(120),
            ..RoiInput::default()
        };
        let err = project(&input, &ModelAssumptions::default()).unwrap_err();
        match err {
            FraudRoiError::OutOfRange { field, .. } => {
                assert_eq!(field, "avg_investigation_minutes");
            }
            other => panic!("Expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_assumptions_flow_through() {
        let assumptions = ModelAssumptions {
            investigation_time_reduction: dec!(0.5),
            false_positive_reduction: dec!(0.25),
            ..Default::default()
        };
        let p = project(&RoiInput::default(), &assumptions).unwrap();
        assert_eq!(p.saved_hours, dec!(39_000));
        assert_eq!(p.effective_false_positive_rate, dec!(60));
    }

    #[test]
    fn test_invalid_assumptions_rejected() {
        let assumptions = ModelAssumptions {
            working_hours_per_year: Decimal::ZERO,
            ..Default::default()
        };
        assert!(matches!(
            project(&RoiInput::default(), &assumptions),
            Err(FraudRoiError::InvalidAssumption { .. })
        ));
    }

    #[test]
    fn test_envelope_warns_when_capped() {
        let request = RoiRequest {
            input: RoiInput::default(),
            assumptions: ModelAssumptions::default(),
        };
        let out = calculate_roi(&request).unwrap();
        assert!(
            out.warnings.iter().any(|w| w.contains("375")),
            "warnings: {:?}",
            out.warnings
        );
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
        assert!(out.methodology.contains("ROI"));
    }

    #[test]
    fn test_envelope_quiet_below_cap() {
        let request = RoiRequest {
            input: minimum_input(),
            assumptions: ModelAssumptions::default(),
        };
        let out = calculate_roi(&request).unwrap();
        assert!(out.warnings.is_empty());
        assert_eq!(out.result.false_positive_cost_percent, dec!(6.25));
    }

    #[test]
    fn test_serialised_values_carry_no_trailing_zeros() {
        let p = project(&RoiInput::default(), &ModelAssumptions::default()).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["saved_cost"], "2709375");
        assert_eq!(json["effective_false_positive_rate"], "48");
        assert_eq!(json["analyst_equivalent_saved"], "31.875");

        let p = project(&minimum_input(), &ModelAssumptions::default()).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["false_positive_cost_percent"], "6.25");
        assert_eq!(json["saved_cost"], "5312.5");
    }

    #[test]
    fn test_request_defaults_assumptions() {
        let request: RoiRequest = serde_json::from_str(
            r#"{"input": {"team_size": 10, "avg_salary_thousands": 85,
                "alerts_per_analyst_per_day": 50, "false_positive_rate_percent": 80,
                "avg_investigation_minutes": 45}}"#,
        )
        .unwrap();
        assert!(request.assumptions.is_default());
        assert_eq!(request.input, RoiInput::default());
    }
}
