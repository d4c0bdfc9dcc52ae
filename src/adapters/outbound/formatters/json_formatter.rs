use crate::application::dto::AnalysisResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable output
///
/// Serializes the full response, including the load-order outcome and any
/// skipped dependencies, as pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let json = serde_json::to_string_pretty(response)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::LoadOrderOutcome;
    use crate::dependency_graph::domain::{AnalysisReport, SkippedDependency};
    use chrono::Utc;
    use serde_json::Value;

    fn sample_response(load_order: LoadOrderOutcome) -> AnalysisResponse {
        AnalysisResponse {
            root: "app@1.0.0".to_string(),
            max_depth: 2,
            generated_at: Utc::now(),
            node_count: 2,
            edge_count: 1,
            report: AnalysisReport {
                tree: "app@1.0.0 (depth=0)\n`-- lib@0.3.1 (depth=1)".to_string(),
                repeated_nodes: vec![],
                cycles: vec![],
            },
            load_order,
            skipped_dependencies: vec![SkippedDependency {
                parent: "app@1.0.0".to_string(),
                name: "ghost".to_string(),
                requirement: "^9".to_string(),
                reason: "No available version for crate 'ghost'".to_string(),
            }],
        }
    }

    #[test]
    fn test_format_ordered_response() {
        let response = sample_response(LoadOrderOutcome::Ordered {
            order: vec!["lib@0.3.1".to_string(), "app@1.0.0".to_string()],
        });

        let json = JsonFormatter::new().format(&response).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["root"], "app@1.0.0");
        assert_eq!(value["max_depth"], 2);
        assert!(value["tree"].as_str().unwrap().contains("lib@0.3.1 (depth=1)"));
        assert_eq!(value["repeated_nodes"], Value::Array(vec![]));
        assert_eq!(value["load_order"]["status"], "ok");
        assert_eq!(value["load_order"]["order"][0], "lib@0.3.1");
        assert_eq!(value["skipped_dependencies"][0]["name"], "ghost");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_format_cycle_response() {
        let response = sample_response(LoadOrderOutcome::CycleDetected {
            message: "cycle".to_string(),
        });

        let json = JsonFormatter::new().format(&response).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["load_order"]["status"], "cycle_detected");
        assert_eq!(value["load_order"]["message"], "cycle");
        assert!(value["load_order"].get("order").is_none());
    }
}
