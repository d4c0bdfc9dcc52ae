use crate::application::dto::{AnalysisResponse, LoadOrderOutcome};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

const EMPTY_SECTION: &str = "  (none)";

/// TextFormatter adapter for the human-readable report
///
/// Renders the dependency tree followed by the repeated-node, cycle and
/// load-order sections. Empty sections print `(none)`.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_section(output: &mut String, title: &str, entries: &[String]) {
        output.push_str(title);
        output.push('\n');
        if entries.is_empty() {
            output.push_str(EMPTY_SECTION);
            output.push('\n');
            return;
        }
        for entry in entries {
            output.push_str("  ");
            output.push_str(entry);
            output.push('\n');
        }
    }

    fn write_load_order(output: &mut String, outcome: &LoadOrderOutcome) {
        output.push_str("Load order:\n");
        match outcome {
            LoadOrderOutcome::Ordered { order } if order.is_empty() => {
                output.push_str(EMPTY_SECTION);
                output.push('\n');
            }
            LoadOrderOutcome::Ordered { order } => {
                for (index, label) in order.iter().enumerate() {
                    // Infallible for String
                    let _ = writeln!(output, "  {}. {}", index + 1, label);
                }
            }
            LoadOrderOutcome::CycleDetected { message } => {
                let _ = writeln!(output, "  unavailable: {}", message);
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let mut output = String::new();

        output.push_str(&response.report.tree);
        output.push_str("\n\n");

        Self::write_section(
            &mut output,
            "Repeated nodes:",
            &response.report.repeated_nodes,
        );
        output.push('\n');
        Self::write_section(&mut output, "Cycles:", &response.report.cycles);
        output.push('\n');
        Self::write_load_order(&mut output, &response.load_order);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::AnalysisReport;
    use chrono::Utc;

    fn response(report: AnalysisReport, load_order: LoadOrderOutcome) -> AnalysisResponse {
        AnalysisResponse {
            root: "a".to_string(),
            max_depth: 0,
            generated_at: Utc::now(),
            node_count: 4,
            edge_count: 4,
            report,
            load_order,
            skipped_dependencies: vec![],
        }
    }

    #[test]
    fn test_format_diamond_report() {
        let report = AnalysisReport {
            tree: "a (depth=0)\n|-- b (depth=1)\n|   `-- d (depth=2)\n`-- c (depth=1)\n    `-- d (depth=2)".to_string(),
            repeated_nodes: vec!["d".to_string()],
            cycles: vec![],
        };
        let order = LoadOrderOutcome::Ordered {
            order: vec!["d", "b", "c", "a"].into_iter().map(String::from).collect(),
        };

        let output = TextFormatter::new().format(&response(report, order)).unwrap();

        assert!(output.starts_with("a (depth=0)\n|-- b (depth=1)\n"));
        assert!(output.contains("Repeated nodes:\n  d\n"));
        assert!(output.contains("Cycles:\n  (none)\n"));
        assert!(output.contains("Load order:\n  1. d\n  2. b\n  3. c\n  4. a\n"));
    }

    #[test]
    fn test_format_cycle_report() {
        let report = AnalysisReport {
            tree: "a (depth=0)\n`-- b (depth=1)\n    `-- a (depth=2)".to_string(),
            repeated_nodes: vec![],
            cycles: vec!["a -> b -> a".to_string()],
        };
        let outcome = LoadOrderOutcome::CycleDetected {
            message: "Cycle detected in dependency graph of a".to_string(),
        };

        let output = TextFormatter::new()
            .format(&response(report, outcome))
            .unwrap();

        assert!(output.contains("Repeated nodes:\n  (none)\n"));
        assert!(output.contains("Cycles:\n  a -> b -> a\n"));
        assert!(output.contains("Load order:\n  unavailable: Cycle detected"));
    }
}
