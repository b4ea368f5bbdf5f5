use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use fraud_roi_core::roi::inputs::RoiInput;
use fraud_roi_core::roi::projection::RoiProjection;

const MILLION: Decimal = dec!(1_000_000);
const THOUSAND: Decimal = dec!(1_000);

/// Round half away from zero, then pad to exactly `dp` decimals.
fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// Compact count: `1.2M`, `340K`, `950`.
pub fn fmt_count(value: Decimal) -> String {
    if value >= MILLION {
        format!("{}M", fixed(value / MILLION, 1))
    } else if value >= THOUSAND {
        format!("{}K", fixed(value / THOUSAND, 0))
    } else {
        fixed(value, 0)
    }
}

/// Compact currency: `$1.2M`, `$340K`, `$950`.
pub fn fmt_money(value: Decimal) -> String {
    format!("${}", fmt_count(value))
}

pub fn fmt_percent(value: Decimal) -> String {
    format!("{}%", fixed(value, 0))
}

/// Whole number with thousands separators: `88,400`.
pub fn fmt_grouped(value: Decimal) -> String {
    let digits = fixed(value.abs(), 0);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value.is_sign_negative() && !value.is_zero() {
        grouped.insert(0, '-');
    }
    grouped
}

/// The calculator's two result panels as display strings.
#[derive(Debug, Clone, Serialize)]
pub struct RoiDisplay {
    pub total_team_cost: String,
    pub alerts_processed: String,
    pub wasted_on_false_positives: String,
    pub false_positive_cost_share: String,
    pub hours_on_false_positives: String,
    pub annual_savings: String,
    pub hours_freed: String,
    pub headcount_equivalent: String,
    pub effective_false_positive_rate: String,
    pub false_positive_rate_before: String,
    pub additional_real_cases: String,
}

impl RoiDisplay {
    pub fn new(input: &RoiInput, p: &RoiProjection) -> Self {
        Self {
            total_team_cost: fmt_money(p.total_team_cost),
            alerts_processed: fmt_count(p.total_alerts_per_year),
            wasted_on_false_positives: fmt_money(p.cost_of_false_positives),
            false_positive_cost_share: fmt_percent(p.false_positive_cost_percent),
            hours_on_false_positives: fmt_count(p.hours_on_false_positives),
            annual_savings: fmt_money(p.saved_cost),
            hours_freed: fmt_count(p.saved_hours),
            headcount_equivalent: fixed(p.analyst_equivalent_saved, 1),
            effective_false_positive_rate: fmt_percent(p.effective_false_positive_rate),
            false_positive_rate_before: format!(
                "{}%",
                input.false_positive_rate_percent.normalize()
            ),
            additional_real_cases: fmt_grouped(p.additional_real_cases_handled),
        }
    }
}
