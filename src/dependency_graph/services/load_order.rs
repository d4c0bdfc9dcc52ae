use crate::dependency_graph::domain::DependencyGraph;
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use std::collections::{BTreeSet, HashMap};

/// LoadOrderComputer service producing an install/build order
///
/// Topologically sorts the subgraph reachable from the root so that every
/// label comes after everything it depends on. Ties are broken by label so
/// identical input always yields identical output. Only nodes present in the
/// given structure are ordered; truncated branches are not re-expanded.
pub struct LoadOrderComputer;

impl LoadOrderComputer {
    /// Computes the load order for `root`.
    ///
    /// # Errors
    /// Returns `DepGraphError::CycleDetected` if the reachable subgraph
    /// contains a cycle. No partial order is returned.
    pub fn compute(root: &str, graph: &DependencyGraph) -> Result<Vec<String>> {
        let reachable = Self::reachable_from(root, graph);

        let mut pending_dependencies: HashMap<&str, usize> = HashMap::new();
        let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
        for &node in &reachable {
            let dependencies: BTreeSet<&str> =
                graph.children(node).iter().map(String::as_str).collect();
            pending_dependencies.insert(node, dependencies.len());
            for dependency in dependencies {
                dependents.entry(dependency).or_default().push(node);
            }
        }

        let mut ready: BTreeSet<&str> = pending_dependencies
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(node, _)| *node)
            .collect();

        let mut order: Vec<String> = Vec::with_capacity(reachable.len());
        while let Some(node) = ready.pop_first() {
            order.push(node.to_string());
            for &dependent in dependents.get(node).map(Vec::as_slice).unwrap_or_default() {
                if let Some(count) = pending_dependencies.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        ready.insert(dependent);
                    }
                }
            }
        }

        if order.len() != reachable.len() {
            return Err(DepGraphError::CycleDetected {
                root: root.to_string(),
            }
            .into());
        }

        Ok(order)
    }

    fn reachable_from<'g>(root: &'g str, graph: &'g DependencyGraph) -> BTreeSet<&'g str> {
        let mut reachable: BTreeSet<&str> = BTreeSet::new();
        let mut stack: Vec<&str> = vec![root];
        while let Some(node) = stack.pop() {
            if !reachable.insert(node) {
                continue;
            }
            stack.extend(graph.children(node).iter().map(String::as_str));
        }
        reachable
    }
}
