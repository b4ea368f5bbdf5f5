use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::projection::RoiProjection;
use crate::types::*;

/// Below this many recovered full-time analysts the story is told in hours.
pub const REDEPLOY_THRESHOLD_ANALYSTS: Decimal = dec!(2);

/// What the recovered capacity means for the team in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CapacityImpact {
    /// Whole analysts that can move from triage to real investigations.
    Redeploy {
        analysts: Count,
        additional_cases: Count,
    },
    /// Too little for a whole headcount; hours handed back to the team.
    RecoveredHours {
        hours: Hours,
        additional_cases: Count,
    },
}

impl CapacityImpact {
    pub fn from_projection(p: &RoiProjection) -> Self {
        if p.analyst_equivalent_saved >= REDEPLOY_THRESHOLD_ANALYSTS {
            CapacityImpact::Redeploy {
                analysts: p.analyst_equivalent_saved.floor(),
                additional_cases: p.additional_real_cases_handled,
            }
        } else {
            CapacityImpact::RecoveredHours {
                hours: p.saved_hours,
                additional_cases: p.additional_real_cases_handled,
            }
        }
    }

    pub fn additional_cases(&self) -> Count {
        match self {
            Self::Redeploy {
                additional_cases, ..
            }
            | Self::RecoveredHours {
                additional_cases, ..
            } => *additional_cases,
        }
    }
}

impl std::fmt::Display for CapacityImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Redeploy {
                analysts,
                additional_cases,
            } => write!(
                f,
                "Your team could redeploy {analysts} analysts from false-positive triage to \
                 high-value investigations, or handle {additional_cases} more real cases per \
                 year with the same team."
            ),
            Self::RecoveredHours {
                hours,
                additional_cases,
            } => write!(
                f,
                "Your team recovers {} hours/year, redirected from false alarms to \
                 investigating real threats. That's {additional_cases} more real cases your \
                 team can close annually.",
                hours.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            ),
        }
    }
}
