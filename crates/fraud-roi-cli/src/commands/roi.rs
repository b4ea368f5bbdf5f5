use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use fraud_roi_core::roi::assumptions::ModelAssumptions;
use fraud_roi_core::roi::impact::CapacityImpact;
use fraud_roi_core::roi::inputs::{InputField, RoiInput};
use fraud_roi_core::roi::projection::{self, RoiRequest};
use fraud_roi_core::roi::sensitivity::{self, SweepInput};
use fraud_roi_core::ComputationOutput;

use crate::display::RoiDisplay;
use crate::input;

/// Calculator inputs shared by `roi`, `impact` and `sweep`
#[derive(Args, Debug, Clone)]
#[command(allow_hyphen_values = true)]
pub struct CalculatorArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Path to JSON or YAML model assumptions (partial documents allowed)
    #[arg(long)]
    pub assumptions: Option<String>,

    /// Fraud analysts on the team [2-50, default 10]
    #[arg(long)]
    pub team_size: Option<u32>,

    /// Fully loaded annual cost per analyst, in thousands [50-150, default 85]
    #[arg(long, alias = "salary")]
    pub avg_salary_thousands: Option<Decimal>,

    /// Alerts per analyst per day [10-150, default 50]
    #[arg(long, alias = "alerts")]
    pub alerts_per_analyst_per_day: Option<u32>,

    /// False positive rate in percent [30-95, default 80]
    #[arg(long, alias = "fp-rate")]
    pub false_positive_rate_percent: Option<Decimal>,

    /// Average investigation time per alert in minutes [10-90, default 45]
    #[arg(long, alias = "minutes")]
    pub avg_investigation_minutes: Option<Decimal>,

    /// Reject out-of-range flag values instead of clamping them
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the ROI projection
#[derive(Args)]
pub struct RoiArgs {
    #[command(flatten)]
    pub calculator: CalculatorArgs,

    /// Show compact display values ($3.2M, 130K, 48%) instead of raw numbers
    #[arg(long)]
    pub display: bool,
}

/// Arguments for the capacity impact summary
#[derive(Args)]
pub struct ImpactArgs {
    #[command(flatten)]
    pub calculator: CalculatorArgs,
}

/// Arguments for a one-way sensitivity sweep
#[derive(Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub calculator: CalculatorArgs,

    /// Input to sweep across its slider range (e.g. team_size, avg_investigation_minutes)
    #[arg(long)]
    pub field: InputField,

    /// Keep only this output column (e.g. saved_cost)
    #[arg(long)]
    pub metric: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImpactOutput {
    #[serde(flatten)]
    impact: CapacityImpact,
    analyst_equivalent_saved: Decimal,
    summary: String,
}

// ---------------------------------------------------------------------------
// Input resolution
// ---------------------------------------------------------------------------

/// Resolve calculator input: file, then piped stdin, then flags.
///
/// Documents are passed through untouched and validated by the model. Flag
/// values behave like sliders: clamped and snapped unless `--strict`, with
/// every adjustment returned as a note.
fn resolve_input(
    args: &CalculatorArgs,
) -> Result<(RoiInput, Vec<String>), Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return Ok((input::file::read_document(path)?, Vec::new()));
    }
    if let Some(piped) = input::stdin::read_piped::<RoiInput>()? {
        return Ok((piped, Vec::new()));
    }

    Ok(from_flags(args))
}

fn from_flags(args: &CalculatorArgs) -> (RoiInput, Vec<String>) {
    let defaults = RoiInput::default();
    let raw = RoiInput {
        team_size: args.team_size.unwrap_or(defaults.team_size),
        avg_salary_thousands: args
            .avg_salary_thousands
            .unwrap_or(defaults.avg_salary_thousands),
        alerts_per_analyst_per_day: args
            .alerts_per_analyst_per_day
            .unwrap_or(defaults.alerts_per_analyst_per_day),
        false_positive_rate_percent: args
            .false_positive_rate_percent
            .unwrap_or(defaults.false_positive_rate_percent),
        avg_investigation_minutes: args
            .avg_investigation_minutes
            .unwrap_or(defaults.avg_investigation_minutes),
    };
    if args.strict {
        return (raw, Vec::new());
    }

    let clamped = raw.clamped();
    let notes = adjustment_notes(&raw, &clamped);
    for note in &notes {
        tracing::warn!("{note}");
    }
    (clamped, notes)
}

fn adjustment_notes(raw: &RoiInput, clamped: &RoiInput) -> Vec<String> {
    InputField::ALL
        .into_iter()
        .filter(|f| raw.get(*f) != clamped.get(*f))
        .map(|f| {
            let range = f.range();
            format!(
                "--{} {} adjusted to {} (range {}..={}, step {})",
                f.name().replace('_', "-"),
                raw.get(f),
                clamped.get(f),
                range.min,
                range.max,
                range.step
            )
        })
        .collect()
}

fn resolve_assumptions(
    args: &CalculatorArgs,
) -> Result<ModelAssumptions, Box<dyn std::error::Error>> {
    match args.assumptions {
        Some(ref path) => input::file::read_document(path),
        None => Ok(ModelAssumptions::default()),
    }
}

fn resolve_request(
    args: &CalculatorArgs,
) -> Result<(RoiRequest, Vec<String>), Box<dyn std::error::Error>> {
    let (input, notes) = resolve_input(args)?;
    let assumptions = resolve_assumptions(args)?;
    Ok((RoiRequest { input, assumptions }, notes))
}

/// Flag adjustments go ahead of the model's own warnings.
fn prepend_notes(warnings: &mut Vec<String>, mut notes: Vec<String>) {
    notes.append(warnings);
    *warnings = notes;
}

/// Re-wrap an envelope around a different result, keeping its metadata.
fn rewrap<T: Serialize, U: Serialize>(
    out: ComputationOutput<T>,
    result: U,
) -> ComputationOutput<U> {
    ComputationOutput {
        result,
        methodology: out.methodology,
        assumptions: out.assumptions,
        warnings: out.warnings,
        metadata: out.metadata,
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub fn run_roi(args: RoiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (request, notes) = resolve_request(&args.calculator)?;
    let mut out = projection::calculate_roi(&request)?;
    prepend_notes(&mut out.warnings, notes);

    if args.display {
        let display = RoiDisplay::new(&request.input, &out.result);
        return Ok(serde_json::to_value(rewrap(out, display))?);
    }
    Ok(serde_json::to_value(out)?)
}

pub fn run_impact(args: ImpactArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (request, notes) = resolve_request(&args.calculator)?;
    let mut out = projection::calculate_roi(&request)?;
    prepend_notes(&mut out.warnings, notes);

    let impact = CapacityImpact::from_projection(&out.result);
    let result = ImpactOutput {
        summary: impact.to_string(),
        analyst_equivalent_saved: out.result.analyst_equivalent_saved,
        impact,
    };
    Ok(serde_json::to_value(rewrap(out, result))?)
}

pub fn run_sweep(args: SweepArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (request, mut warnings) = resolve_request(&args.calculator)?;
    let sweep_input = SweepInput {
        base: request.input,
        field: args.field,
        assumptions: request.assumptions,
    };
    let out = sensitivity::sweep(&sweep_input)?;
    warnings.extend(out.warnings);

    let mut results = Vec::with_capacity(out.result.rows.len());
    for row in &out.result.rows {
        let full = serde_json::to_value(row)?;
        let kept = match args.metric {
            Some(ref metric) => {
                let value = full
                    .get(metric.as_str())
                    .ok_or_else(|| format!("Unknown metric '{metric}'"))?;
                serde_json::json!({ "value": row.value, metric.as_str(): value })
            }
            None => full,
        };
        results.push(kept);
    }

    Ok(serde_json::json!({
        "field": out.result.field,
        "base_case_index": out.result.base_case_index,
        "results": results,
        "warnings": warnings,
        "methodology": out.methodology,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn flags(team: u32, minutes: Decimal, strict: bool) -> CalculatorArgs {
        CalculatorArgs {
            input: None,
            assumptions: None,
            team_size: Some(team),
            avg_salary_thousands: None,
            alerts_per_analyst_per_day: None,
            false_positive_rate_percent: None,
            avg_investigation_minutes: Some(minutes),
            strict,
        }
    }

    #[test]
    fn test_adjustment_notes_name_each_field() {
        let raw = RoiInput {
            team_size: 80,
            avg_investigation_minutes: dec!(47),
            ..RoiInput::default()
        };
        let notes = adjustment_notes(&raw, &raw.clamped());
        assert_eq!(notes.len(), 2);
        assert!(notes[0].starts_with("--team-size 80 adjusted to 50"));
        assert!(notes[1].starts_with("--avg-investigation-minutes 47 adjusted to 45"));
    }

    #[test]
    fn test_no_notes_for_valid_input() {
        let raw = RoiInput::default();
        assert!(adjustment_notes(&raw, &raw.clamped()).is_empty());
    }

    #[test]
    fn test_flags_clamped_by_default() {
        let (input, notes) = from_flags(&flags(80, dec!(47), false));
        assert_eq!(input.team_size, 50);
        assert_eq!(input.avg_investigation_minutes, dec!(45));
        assert_eq!(input.avg_salary_thousands, dec!(85));
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn test_strict_flags_pass_through() {
        let (input, notes) = from_flags(&flags(80, dec!(47), true));
        assert_eq!(input.team_size, 80);
        assert!(notes.is_empty());
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_notes_precede_model_warnings() {
        let mut warnings = vec!["model".to_string()];
        prepend_notes(&mut warnings, vec!["flag".to_string()]);
        assert_eq!(warnings, vec!["flag".to_string(), "model".to_string()]);
    }
}
