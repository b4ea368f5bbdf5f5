use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Serialize;

use fraud_roi_core::roi::impact::CapacityImpact;
use fraud_roi_core::roi::projection::{self, RoiRequest};
use fraud_roi_core::roi::sensitivity::{self, SweepInput};
use fraud_roi_core::{content, positioning};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> NapiResult<String> {
    serde_json::to_string(value).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// ROI model
// ---------------------------------------------------------------------------

/// Accepts `{"input": {...}, "assumptions": {...}}`; assumptions may be omitted.
#[napi]
pub fn calculate_roi(request_json: String) -> NapiResult<String> {
    let request: RoiRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let output = projection::calculate_roi(&request).map_err(to_napi_error)?;
    to_json(&output)
}

#[derive(Serialize)]
struct ImpactResult {
    #[serde(flatten)]
    impact: CapacityImpact,
    analyst_equivalent_saved: Decimal,
    summary: String,
}

#[napi]
pub fn capacity_impact(request_json: String) -> NapiResult<String> {
    let request: RoiRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let p = projection::project(&request.input, &request.assumptions).map_err(to_napi_error)?;
    let impact = CapacityImpact::from_projection(&p);
    to_json(&ImpactResult {
        summary: impact.to_string(),
        analyst_equivalent_saved: p.analyst_equivalent_saved,
        impact,
    })
}

#[napi]
pub fn sensitivity_sweep(input_json: String) -> NapiResult<String> {
    let input: SweepInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = sensitivity::sweep(&input).map_err(to_napi_error)?;
    to_json(&output)
}

// ---------------------------------------------------------------------------
// Positioning and content
// ---------------------------------------------------------------------------

#[napi]
pub fn comparison_matrix() -> NapiResult<String> {
    to_json(&positioning::matrix::comparison_matrix())
}

#[napi]
pub fn matrix_attribute(id: String) -> NapiResult<String> {
    let attr = positioning::matrix::find_attribute(&id).map_err(to_napi_error)?;
    to_json(attr)
}

#[napi]
pub fn counter_positions() -> NapiResult<String> {
    to_json(&positioning::counter::counter_positions())
}

#[napi]
pub fn content_plan() -> NapiResult<String> {
    to_json(&content::plan::plan_items())
}

#[napi]
pub fn industry_benchmarks() -> NapiResult<String> {
    to_json(&content::benchmarks::industry_benchmarks())
}
