use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{types::*, FraudRoiError, FraudRoiResult};

// ---------------------------------------------------------------------------
// Policy constants
// ---------------------------------------------------------------------------

/// Working days per analyst per year.
pub const WORKING_DAYS_PER_YEAR: Decimal = dec!(260);

/// Standard working hours per analyst per year (52 weeks x 40 hours).
pub const WORKING_HOURS_PER_YEAR: Decimal = dec!(2080);

/// Assumed cut in investigation time once agents do the legwork
/// ("full day to 15 minutes" customer reports).
pub const INVESTIGATION_TIME_REDUCTION: Decimal = dec!(0.85);

/// Assumed cut in the false positive rate from AI pre-screening.
pub const FALSE_POSITIVE_REDUCTION: Decimal = dec!(0.40);

// Unit conversions, not tunable
pub const MINUTES_PER_HOUR: Decimal = dec!(60);
pub const SALARY_UNIT: Decimal = dec!(1000);
pub const PERCENT_SCALE: Decimal = dec!(100);

const MAX_DAYS_PER_YEAR: Decimal = dec!(366);
const MAX_HOURS_PER_YEAR: Decimal = dec!(8784);

// ---------------------------------------------------------------------------
// ModelAssumptions
// ---------------------------------------------------------------------------

/// The tunable assumptions behind the projection. Every field defaults to
/// the matching constant, so a partial JSON/YAML document overrides only
/// what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelAssumptions {
    pub working_days_per_year: Decimal,
    pub working_hours_per_year: Hours,
    pub investigation_time_reduction: Decimal,
    pub false_positive_reduction: Decimal,
}

impl Default for ModelAssumptions {
    fn default() -> Self {
        Self {
            working_days_per_year: WORKING_DAYS_PER_YEAR,
            working_hours_per_year: WORKING_HOURS_PER_YEAR,
            investigation_time_reduction: INVESTIGATION_TIME_REDUCTION,
            false_positive_reduction: FALSE_POSITIVE_REDUCTION,
        }
    }
}

impl ModelAssumptions {
    /// Keep the projection total: both calendar figures must be positive
    /// and no larger than a leap year allows, and both reduction factors
    /// must be fractions.
    pub fn validate(&self) -> FraudRoiResult<()> {
        check_between(
            "working_days_per_year",
            self.working_days_per_year,
            Decimal::ONE,
            MAX_DAYS_PER_YEAR,
        )?;
        check_between(
            "working_hours_per_year",
            self.working_hours_per_year,
            Decimal::ONE,
            MAX_HOURS_PER_YEAR,
        )?;
        check_between(
            "investigation_time_reduction",
            self.investigation_time_reduction,
            Decimal::ZERO,
            Decimal::ONE,
        )?;
        check_between(
            "false_positive_reduction",
            self.false_positive_reduction,
            Decimal::ZERO,
            Decimal::ONE,
        )?;
        Ok(())
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

fn check_between(field: &str, value: Decimal, min: Decimal, max: Decimal) -> FraudRoiResult<()> {
    if value < min || value > max {
        return Err(FraudRoiError::InvalidAssumption {
            field: field.into(),
            reason: format!("must be between {min} and {max}, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let a = ModelAssumptions::default();
        assert_eq!(a.working_days_per_year, dec!(260));
        assert_eq!(a.working_hours_per_year, dec!(2080));
        assert_eq!(a.investigation_time_reduction, dec!(0.85));
        assert_eq!(a.false_positive_reduction, dec!(0.40));
        assert!(a.validate().is_ok());
        assert!(a.is_default());
    }

    #[test]
    fn test_zero_hours_rejected() {
        let a = ModelAssumptions {
            working_hours_per_year: Decimal::ZERO,
            ..Default::default()
        };
        match a.validate().unwrap_err() {
            FraudRoiError::InvalidAssumption { field, .. } => {
                assert_eq!(field, "working_hours_per_year");
            }
            other => panic!("Expected InvalidAssumption, got {other:?}"),
        }
    }

    #[test]
    fn test_reduction_above_one_rejected() {
        let a = ModelAssumptions {
            false_positive_reduction: dec!(1.2),
            ..Default::default()
        };
        assert!(matches!(
            a.validate(),
            Err(FraudRoiError::InvalidAssumption { .. })
        ));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let a: ModelAssumptions =
            serde_json::from_str(r#"{"investigation_time_reduction": "0.5"}"#).unwrap();
        assert_eq!(a.investigation_time_reduction, dec!(0.5));
        assert_eq!(a.working_hours_per_year, WORKING_HOURS_PER_YEAR);
        assert!(!a.is_default());
    }
}
