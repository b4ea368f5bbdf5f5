use clap::Args;
use serde_json::{json, Value};

use fraud_roi_core::positioning::approach::Approach;
use fraud_roi_core::positioning::counter::{self, POSITIONING_ANCHOR, POSITIONING_STATEMENT};
use fraud_roi_core::positioning::matrix;

use crate::view::ViewState;

/// Arguments for the comparison matrix
#[derive(Args)]
pub struct MatrixArgs {
    /// Attribute to expand (speed, fp, explain, deploy, scale, cost)
    #[arg(long)]
    pub expand: Option<String>,

    /// Collapse every attribute row
    #[arg(long, conflicts_with = "expand")]
    pub collapse: bool,
}

/// Arguments for the counter-positioning list
#[derive(Args)]
pub struct CounterArgs {
    /// Zero-based entry to expand with strength and analogy
    #[arg(long)]
    pub expand: Option<usize>,
}

fn leader_labels(leaders: &[Approach]) -> String {
    leaders
        .iter()
        .map(|a| a.short_label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn run_matrix(
    args: MatrixArgs,
    view: &mut ViewState,
) -> Result<Value, Box<dyn std::error::Error>> {
    if let Some(ref id) = args.expand {
        let attr = matrix::find_attribute(id)?;
        if !view.is_attribute_expanded(attr.id) {
            view.toggle_attribute(attr.id);
        }
    } else if args.collapse {
        if let Some(current) = view.expanded_attribute.clone() {
            view.toggle_attribute(&current);
        }
    }

    let rows: Vec<Value> = matrix::attributes()
        .iter()
        .map(|attr| {
            json!({
                "attribute": attr.label,
                "manual": attr.scores.manual,
                "rules": attr.scores.rules,
                "ml": attr.scores.ml,
                "agents": attr.scores.agents,
                "leaders": leader_labels(&attr.leaders()),
            })
        })
        .collect();

    let totals: serde_json::Map<String, Value> = matrix::score_totals()
        .into_iter()
        .map(|t| (t.approach.id().to_string(), json!(t.total)))
        .collect();

    let expanded = match view.expanded_attribute {
        Some(ref id) => {
            let attr = matrix::find_attribute(id)?;
            let details: Vec<Value> = attr
                .details
                .iter()
                .map(|(approach, detail)| {
                    json!({
                        "approach": approach.label(),
                        "score": attr.scores.get(approach),
                        "detail": detail,
                    })
                })
                .collect();
            json!({
                "attribute": attr.label,
                "description": attr.description,
                "why_buyers_care": attr.buyer_care,
                "details": details,
            })
        }
        None => Value::Null,
    };

    tracing::debug!(expanded = ?view.expanded_attribute, "comparison matrix rendered");

    Ok(json!({
        "max_score": matrix::MAX_SCORE,
        "results": rows,
        "totals": totals,
        "expanded": expanded,
    }))
}

pub fn run_counter(
    args: CounterArgs,
    view: &mut ViewState,
) -> Result<Value, Box<dyn std::error::Error>> {
    if !view.show_counter_positions {
        view.toggle_counter_positions();
    }

    let entries = counter::counter_positions();
    if let Some(index) = args.expand {
        if index >= entries.len() {
            return Err(format!(
                "--expand {index} is out of range (0..{})",
                entries.len()
            )
            .into());
        }
        view.toggle_counter(index);
    }

    let rows: Vec<Value> = entries
        .iter()
        .enumerate()
        .map(|(i, cp)| {
            let open = view.is_counter_expanded(i);
            json!({
                "index": i,
                "against": cp.against,
                "their_gap": cp.weakness,
                "flipped": if open { cp.strength } else { "" },
                "analogy": if open { cp.analogy } else { "" },
            })
        })
        .collect();

    Ok(json!({
        "results": rows,
        "statement": POSITIONING_STATEMENT,
        "anchor": POSITIONING_ANCHOR,
    }))
}
