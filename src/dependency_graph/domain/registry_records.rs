use serde::{Deserialize, Serialize};

/// One dependency edge candidate as published by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Target crate name
    #[serde(rename = "crate_id")]
    pub name: String,
    /// Version requirement text, e.g. `^1.0`
    #[serde(rename = "req", default)]
    pub requirement: String,
    #[serde(default)]
    pub optional: bool,
    /// `normal`, `build`, `dev`, or absent
    #[serde(default)]
    pub kind: Option<String>,
}

impl DependencyRecord {
    pub fn new(name: &str, requirement: &str) -> Self {
        Self {
            name: name.to_string(),
            requirement: requirement.to_string(),
            optional: false,
            kind: None,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    /// Whether this record contributes an edge: non-optional, and of
    /// kind absent or `normal`.
    pub fn is_normal_edge(&self) -> bool {
        if self.optional {
            return false;
        }
        match self.kind.as_deref() {
            None | Some("") | Some("normal") => true,
            Some(_) => false,
        }
    }
}

/// One entry of a crate's version catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    #[serde(rename = "num")]
    pub number: String,
    #[serde(default)]
    pub yanked: bool,
}

impl VersionRecord {
    pub fn new(number: &str, yanked: bool) -> Self {
        Self {
            number: number.to_string(),
            yanked,
        }
    }
}
