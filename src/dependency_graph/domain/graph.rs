use std::collections::{BTreeSet, HashMap};

/// Adjacency structure: label -> labels it depends on.
///
/// Edge `A -> B` means A depends on B. The structure may contain cycles,
/// and children need not have an entry of their own (a missing entry reads
/// as "no children").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    adjacency: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `label` as a node without touching its children.
    pub fn ensure_node(&mut self, label: &str) {
        if !self.adjacency.contains_key(label) {
            self.adjacency.insert(label.to_string(), Vec::new());
        }
    }

    /// Replaces the child list of `label`.
    pub fn set_children(&mut self, label: String, children: Vec<String>) {
        self.adjacency.insert(label, children);
    }

    /// Appends edges `parent -> child` for each child.
    pub fn add_edges<I>(&mut self, parent: &str, children: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.adjacency
            .entry(parent.to_string())
            .or_default()
            .extend(children);
    }

    pub fn children(&self, label: &str) -> &[String] {
        self.adjacency
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Sorts every child list lexicographically, in place.
    pub fn sort_children(&mut self) {
        for children in self.adjacency.values_mut() {
            children.sort();
        }
    }

    /// All labels mentioned anywhere in the structure, sorted.
    pub fn labels(&self) -> BTreeSet<&str> {
        self.adjacency
            .iter()
            .flat_map(|(parent, children)| {
                std::iter::once(parent.as_str()).chain(children.iter().map(String::as_str))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.labels().len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
