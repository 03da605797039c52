//! Scan report type and JSON helpers.

use fridge_scan_core::{ColorTally, IngredientCandidate};
use fridge_scan_recipes::Recipe;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result of one full scan, ready for display or persistence.
///
/// Carries only what the pipeline produced; identity, storage handles, and
/// timestamps belong to whatever service wraps the scan.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Bucket tally behind the detection; `None` when the image never
    /// decoded and the fallback ingredients stood in.
    #[serde(default)]
    pub color_tally: Option<ColorTally>,
    /// Ranked ingredient guesses, highest confidence first.
    pub ingredients: Vec<IngredientCandidate>,
    /// Recipe suggestions in fixed template order.
    pub recipes: Vec<Recipe>,
}

impl ScanReport {
    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ScanReport {
        let ingredients = vec![
            IngredientCandidate::new("tomatoes", 92),
            IngredientCandidate::new("cucumbers", 88),
        ];
        let recipes = fridge_scan_recipes::synthesize(&ingredients).unwrap();
        ScanReport {
            color_tally: Some(ColorTally {
                red: 600,
                green: 120,
                ..Default::default()
            }),
            ingredients,
            recipes,
        }
    }

    #[test]
    fn report_roundtrips_through_disk_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = sample_report();
        report.write_json(&path).unwrap();
        let back = ScanReport::load_json(&path).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn report_uses_wire_keys() {
        let json = serde_json::to_string(&sample_report()).unwrap();
        assert!(json.contains("\"colorTally\""), "json: {json}");
        assert!(json.contains("\"darkGreen\":0"), "json: {json}");
        assert!(json.contains("\"cookingTime\":20"), "json: {json}");
    }

    #[test]
    fn tally_is_optional_on_the_wire() {
        let json = r#"{"ingredients":[{"name":"eggs","confidence":92}],"recipes":[]}"#;
        let report: ScanReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.color_tally, None);
        assert_eq!(report.ingredients.len(), 1);
    }

    #[test]
    fn load_json_reports_missing_files_as_io() {
        let err = ScanReport::load_json("/nonexistent/report.json").unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
