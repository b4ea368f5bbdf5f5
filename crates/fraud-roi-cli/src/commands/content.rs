use serde_json::{json, Value};

use fraud_roi_core::content::{benchmarks, plan};

pub fn run_plan() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({ "results": plan::plan_items() }))
}

pub fn run_benchmarks() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({ "results": benchmarks::industry_benchmarks() }))
}
