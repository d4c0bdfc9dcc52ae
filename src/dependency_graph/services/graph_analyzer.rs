use super::graph_crawler::UNBOUNDED_DEPTH;
use crate::dependency_graph::domain::{AnalysisReport, DependencyGraph};
use std::collections::{BTreeSet, HashMap, HashSet};

const BRANCH: &str = "|-- ";
const LAST_BRANCH: &str = "`-- ";
const PIPE: &str = "|   ";
const SPACE: &str = "    ";

enum Frame {
    Enter {
        label: String,
        depth: usize,
        prefix: String,
        is_last: bool,
    },
    /// All descendants of the node on top of the path have been processed
    Exit,
}

/// GraphAnalyzer service rendering a dependency tree and reporting
/// repeated nodes and cycles.
///
/// Everything comes out of a single iterative traversal, so the tree,
/// the repeated-node list and the cycle list always agree on which nodes
/// were visited. Child lists are sorted before the walk and the same
/// depth truncation as the crawler applies.
pub struct GraphAnalyzer;

impl GraphAnalyzer {
    /// Analyzes the graph reachable from `root`.
    ///
    /// The graph is mutated: every child list is sorted in place.
    pub fn analyze(root: &str, graph: &mut DependencyGraph, max_depth: usize) -> AnalysisReport {
        graph.sort_children();

        let mut lines: Vec<String> = Vec::new();
        let mut on_path: HashSet<String> = HashSet::new();
        let mut path: Vec<String> = Vec::new();
        let mut parents_by_node: HashMap<String, BTreeSet<String>> = HashMap::new();
        let mut cycles: BTreeSet<String> = BTreeSet::new();

        let mut stack = vec![Frame::Enter {
            label: root.to_string(),
            depth: 0,
            prefix: String::new(),
            is_last: true,
        }];

        while let Some(frame) = stack.pop() {
            let (label, depth, prefix, is_last) = match frame {
                Frame::Exit => {
                    if let Some(finished) = path.pop() {
                        on_path.remove(&finished);
                    }
                    continue;
                }
                Frame::Enter {
                    label,
                    depth,
                    prefix,
                    is_last,
                } => (label, depth, prefix, is_last),
            };

            lines.push(Self::render_line(&label, depth, &prefix, is_last));

            // Back-edge: report it, never re-enter
            if on_path.contains(&label) {
                cycles.insert(Self::cycle_string(&path, &label));
                continue;
            }

            on_path.insert(label.clone());
            path.push(label.clone());
            stack.push(Frame::Exit);

            if max_depth != UNBOUNDED_DEPTH && depth >= max_depth {
                continue;
            }

            let children = graph.children(&label);
            let child_prefix = if depth == 0 {
                String::new()
            } else if is_last {
                format!("{}{}", prefix, SPACE)
            } else {
                format!("{}{}", prefix, PIPE)
            };

            for (index, child) in children.iter().enumerate().rev() {
                parents_by_node
                    .entry(child.clone())
                    .or_default()
                    .insert(label.clone());
                stack.push(Frame::Enter {
                    label: child.clone(),
                    depth: depth + 1,
                    prefix: child_prefix.clone(),
                    is_last: index + 1 == children.len(),
                });
            }
        }

        let mut repeated_nodes: Vec<String> = parents_by_node
            .into_iter()
            .filter(|(_, parents)| parents.len() > 1)
            .map(|(node, _)| node)
            .collect();
        repeated_nodes.sort();

        AnalysisReport {
            tree: lines.join("\n"),
            repeated_nodes,
            cycles: cycles.into_iter().collect(),
        }
    }

    fn render_line(label: &str, depth: usize, prefix: &str, is_last: bool) -> String {
        if depth == 0 {
            return format!("{} (depth=0)", label);
        }
        let branch = if is_last { LAST_BRANCH } else { BRANCH };
        format!("{}{}{} (depth={})", prefix, branch, label, depth)
    }

    /// `path[first occurrence of label..] -> label`
    fn cycle_string(path: &[String], label: &str) -> String {
        let start = path.iter().position(|node| node == label).unwrap_or(0);
        let mut segment: Vec<&str> = path[start..].iter().map(String::as_str).collect();
        segment.push(label);
        segment.join(" -> ")
    }
}
