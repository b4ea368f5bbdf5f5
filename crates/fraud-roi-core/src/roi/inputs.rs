use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{types::*, FraudRoiError, FraudRoiResult};

// ---------------------------------------------------------------------------
// Input fields and their slider ranges
// ---------------------------------------------------------------------------

/// One of the five calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    TeamSize,
    AvgSalaryThousands,
    AlertsPerAnalystPerDay,
    FalsePositiveRatePercent,
    AvgInvestigationMinutes,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::TeamSize,
        InputField::AvgSalaryThousands,
        InputField::AlertsPerAnalystPerDay,
        InputField::FalsePositiveRatePercent,
        InputField::AvgInvestigationMinutes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TeamSize => "team_size",
            Self::AvgSalaryThousands => "avg_salary_thousands",
            Self::AlertsPerAnalystPerDay => "alerts_per_analyst_per_day",
            Self::FalsePositiveRatePercent => "false_positive_rate_percent",
            Self::AvgInvestigationMinutes => "avg_investigation_minutes",
        }
    }

    /// Closed interval, slider step and default for the field.
    pub fn range(&self) -> InputRange {
        match self {
            Self::TeamSize => InputRange::new(dec!(2), dec!(50), dec!(1), dec!(10)),
            Self::AvgSalaryThousands => InputRange::new(dec!(50), dec!(150), dec!(5), dec!(85)),
            Self::AlertsPerAnalystPerDay => {
                InputRange::new(dec!(10), dec!(150), dec!(5), dec!(50))
            }
            Self::FalsePositiveRatePercent => {
                InputRange::new(dec!(30), dec!(95), dec!(5), dec!(80))
            }
            Self::AvgInvestigationMinutes => {
                InputRange::new(dec!(10), dec!(90), dec!(5), dec!(45))
            }
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for InputField {
    type Err = FraudRoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('-', "_");
        InputField::ALL
            .into_iter()
            .find(|f| f.name() == normalised)
            .ok_or_else(|| FraudRoiError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
    pub default: Decimal,
}

impl InputRange {
    pub const fn new(min: Decimal, max: Decimal, step: Decimal, default: Decimal) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into the interval and snap to the nearest step counted from
    /// `min`, the way a range control settles its thumb.
    pub fn snap(&self, value: Decimal) -> Decimal {
        let bounded = value.max(self.min).min(self.max);
        let steps = ((bounded - self.min) / self.step)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        (self.min + steps * self.step).min(self.max)
    }

    /// Every slider stop from `min` to `max`; `max` is always included.
    pub fn stops(&self) -> Vec<Decimal> {
        let mut values = Vec::new();
        let mut current = self.min;
        while current <= self.max {
            values.push(current);
            current += self.step;
        }
        if let Some(&last) = values.last() {
            if last < self.max {
                values.push(self.max);
            }
        }
        values
    }
}

// ---------------------------------------------------------------------------
// RoiInput
// ---------------------------------------------------------------------------

/// The five calculator inputs. Camel-case aliases accept payloads straight
/// from a JavaScript front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    /// Fraud analysts on the team
    #[serde(alias = "teamSize")]
    pub team_size: u32,
    /// Fully loaded annual cost per analyst, in thousands
    #[serde(alias = "avgSalaryThousands", alias = "avgSalary")]
    pub avg_salary_thousands: Money,
    #[serde(alias = "alertsPerAnalystPerDay", alias = "alertsPerDay")]
    pub alerts_per_analyst_per_day: u32,
    #[serde(alias = "falsePositiveRatePercent", alias = "falsePositiveRate")]
    pub false_positive_rate_percent: Percent,
    /// Minutes spent per alert
    #[serde(alias = "avgInvestigationMinutes", alias = "avgInvestTime")]
    pub avg_investigation_minutes: Decimal,
}

impl Default for RoiInput {
    fn default() -> Self {
        Self {
            team_size: 10,
            avg_salary_thousands: dec!(85),
            alerts_per_analyst_per_day: 50,
            false_positive_rate_percent: dec!(80),
            avg_investigation_minutes: dec!(45),
        }
    }
}

impl RoiInput {
    pub fn get(&self, field: InputField) -> Decimal {
        match field {
            InputField::TeamSize => Decimal::from(self.team_size),
            InputField::AvgSalaryThousands => self.avg_salary_thousands,
            InputField::AlertsPerAnalystPerDay => Decimal::from(self.alerts_per_analyst_per_day),
            InputField::FalsePositiveRatePercent => self.false_positive_rate_percent,
            InputField::AvgInvestigationMinutes => self.avg_investigation_minutes,
        }
    }

    /// Copy with one field replaced. Integer fields drop any fraction;
    /// negative values become zero and fail validation later.
    pub fn with(&self, field: InputField, value: Decimal) -> Self {
        let mut next = self.clone();
        match field {
            InputField::TeamSize => next.team_size = to_count(value),
            InputField::AvgSalaryThousands => next.avg_salary_thousands = value,
            InputField::AlertsPerAnalystPerDay => next.alerts_per_analyst_per_day = to_count(value),
            InputField::FalsePositiveRatePercent => next.false_positive_rate_percent = value,
            InputField::AvgInvestigationMinutes => next.avg_investigation_minutes = value,
        }
        next
    }

    /// Reject the first field outside its closed interval.
    ///
    /// Out-of-range values point at a bug in whatever produced the input,
    /// so they are reported rather than clamped.
    pub fn validate(&self) -> FraudRoiResult<()> {
        for field in InputField::ALL {
            let range = field.range();
            let value = self.get(field);
            if !range.contains(value) {
                return Err(FraudRoiError::OutOfRange {
                    field: field.name().into(),
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    /// Slider semantics for an input-control layer: every field clamped and
    /// snapped to its step grid.
    pub fn clamped(&self) -> Self {
        InputField::ALL.into_iter().fold(self.clone(), |acc, field| {
            let snapped = field.range().snap(acc.get(field));
            acc.with(field, snapped)
        })
    }
}

fn to_count(value: Decimal) -> u32 {
    value.trunc().to_u32().unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
