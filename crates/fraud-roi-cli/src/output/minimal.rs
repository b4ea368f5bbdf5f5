use serde_json::Value;

use super::cell;

/// Headline figures, most important first.
const PRIORITY_KEYS: [&str; 6] = [
    "summary",
    "saved_cost",
    "annual_savings",
    "analyst_equivalent_saved",
    "false_positive_cost_percent",
    "statement",
];

/// Print just the headline answer.
///
/// Looks for well-known keys in the `result` envelope (or the top level),
/// then falls back to the first field. Row sets print their row count.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let target = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = target {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                return cell(val);
            }
        }
        if let Some(Value::Array(rows)) = map.get("results") {
            return format!("{} rows", rows.len());
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{key}: {}", cell(val));
        }
    }

    cell(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_projection_headline_is_saved_cost() {
        let v = json!({"result": {"annual_fp_hours": "104000", "saved_cost": "2709375"}});
        assert_eq!(headline(&v), "2709375");
    }

    #[test]
    fn test_cost_share_headline() {
        let v = json!({
            "result": {"total_team_cost": "850000", "false_positive_cost_percent": "100"}
        });
        assert_eq!(headline(&v), "100");
    }

    #[test]
    fn test_display_headline() {
        let v = json!({"result": {"annual_savings": "$2.7M", "team_cost": "$850K"}});
        assert_eq!(headline(&v), "$2.7M");
    }

    #[test]
    fn test_row_set_headline() {
        let v = json!({"results": [{"week": "Week 1"}, {"week": "Week 2"}]});
        assert_eq!(headline(&v), "2 rows");
    }
}
