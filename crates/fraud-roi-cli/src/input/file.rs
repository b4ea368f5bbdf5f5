use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON or YAML file (chosen by extension) into a typed struct.
pub fn read_document<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let value: T = if is_yaml(&canonical) {
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    };
    tracing::debug!(path = %canonical.display(), "input document loaded");
    Ok(value)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Resolve and validate the path, preventing directory traversal.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraud_roi_core::roi::assumptions::ModelAssumptions;
    use rust_decimal_macros::dec;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fraud-roi-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_reads_yaml_by_extension() {
        let path = write_temp("assumptions.yaml", "investigation_time_reduction: 0.7\n");
        let a: ModelAssumptions = read_document(path.to_str().unwrap()).unwrap();
        assert_eq!(a.investigation_time_reduction, dec!(0.7));
        assert_eq!(a.working_hours_per_year, dec!(2080));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_reads_json_otherwise() {
        let path = write_temp("assumptions.json", r#"{"working_days_per_year": 250}"#);
        let a: ModelAssumptions = read_document(path.to_str().unwrap()).unwrap();
        assert_eq!(a.working_days_per_year, dec!(250));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = read_document::<ModelAssumptions>("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
