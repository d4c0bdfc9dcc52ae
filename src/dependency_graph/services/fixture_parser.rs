use crate::dependency_graph::domain::DependencyGraph;
use crate::shared::error::DepGraphError;
use crate::shared::Result;

const ARROW: &str = "->";
const COLON: char = ':';

/// FixtureParser service for the line-oriented adjacency fixture format
///
/// ```text
/// # comment            ; also a comment
/// a: b, c              parent with two children
/// b -> c d             arrow form, whitespace separated
/// lonely               standalone node, no children
/// ```
///
/// Children may be separated by commas, whitespace, or both. When a line
/// contains both `->` and `:`, the arrow wins. Repeated parents append.
pub struct FixtureParser;

impl FixtureParser {
    /// Parses fixture text into an adjacency structure.
    ///
    /// # Errors
    /// Returns `DepGraphError::FixtureParse` with the 1-based line number if
    /// a line has an empty parent, or a standalone declaration contains
    /// whitespace.
    pub fn parse(content: &str) -> Result<DependencyGraph> {
        let mut graph = DependencyGraph::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let split = line
                .split_once(ARROW)
                .or_else(|| line.split_once(COLON));

            let Some((parent, children)) = split else {
                if line.split_whitespace().count() > 1 {
                    return Err(parse_error(
                        line_number,
                        format!("standalone node {:?} contains whitespace", line),
                    ));
                }
                graph.ensure_node(line);
                continue;
            };

            let parent = parent.trim();
            if parent.is_empty() {
                return Err(parse_error(line_number, "missing parent before delimiter".to_string()));
            }
            if parent.split_whitespace().count() > 1 {
                return Err(parse_error(
                    line_number,
                    format!("parent {:?} contains whitespace", parent),
                ));
            }

            let children = children
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|child| !child.is_empty())
                .map(str::to_string);
            graph.add_edges(parent, children);
        }

        Ok(graph)
    }
}

fn parse_error(line: usize, details: String) -> anyhow::Error {
    DepGraphError::FixtureParse { line, details }.into()
}
