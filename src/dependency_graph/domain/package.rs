use crate::shared::error::DepGraphError;
use crate::shared::Result;

/// Maximum length for crate names (crates.io limit is 64; leave headroom for mirrors)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions
const MAX_VERSION_LENGTH: usize = 100;

/// Formats the node identity used throughout the graph: `"<name>@<version>"`.
pub fn format_label(name: &str, version: &str) -> String {
    format!("{}@{}", name, version)
}

/// NewType wrapper for crate name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(invalid("Package name cannot be empty".to_string()));
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid(format!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            )));
        }

        // The name ends up in registry URL paths
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid(format!(
                "Package name {:?} contains invalid characters. Only ASCII alphanumerics, hyphens and underscores are allowed.",
                name
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a concrete version string in registry-native form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            return Err(invalid("Package version cannot be empty".to_string()));
        }

        if version.len() > MAX_VERSION_LENGTH {
            return Err(invalid(format!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            )));
        }

        if !version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '+')
        {
            return Err(invalid(format!(
                "Package version {:?} contains invalid characters. Only ASCII alphanumerics, dots, hyphens and plus are allowed.",
                version
            )));
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated (name, version) pair identifying one node of the graph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageRef {
    name: PackageName,
    version: Version,
}

impl PackageRef {
    pub fn new(name: String, version: String) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: Version::new(version)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn label(&self) -> String {
        format_label(self.name(), self.version())
    }
}

impl std::fmt::Display for PackageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

fn invalid(reason: String) -> anyhow::Error {
    DepGraphError::InvalidPackage { reason }.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_new_valid() {
        let name = PackageName::new("serde_json".to_string()).unwrap();
        assert_eq!(name.as_str(), "serde_json");
    }

    #[test]
    fn test_package_name_new_empty() {
        let err = PackageName::new("".to_string()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepGraphError>(),
            Some(DepGraphError::InvalidPackage { .. })
        ));
    }

    #[test]
    fn test_package_name_rejects_path_characters() {
        assert!(PackageName::new("../etc".to_string()).is_err());
        assert!(PackageName::new("a/b".to_string()).is_err());
    }

    #[test]
    fn test_version_new_valid() {
        let version = Version::new("1.0.0-beta.1+build.5".to_string()).unwrap();
        assert_eq!(version.as_str(), "1.0.0-beta.1+build.5");
    }

    #[test]
    fn test_version_new_empty() {
        assert!(Version::new("".to_string()).is_err());
    }

    #[test]
    fn test_version_rejects_wildcards() {
        assert!(Version::new("1.*".to_string()).is_err());
    }

    #[test]
    fn test_package_ref_label() {
        let package = PackageRef::new("tokio".to_string(), "1.38.0".to_string()).unwrap();
        assert_eq!(package.name(), "tokio");
        assert_eq!(package.version(), "1.38.0");
        assert_eq!(package.label(), "tokio@1.38.0");
        assert_eq!(format!("{}", package), "tokio@1.38.0");
    }

    #[test]
    fn test_package_ref_equality() {
        let a = PackageRef::new("tokio".to_string(), "1.38.0".to_string()).unwrap();
        let b = PackageRef::new("tokio".to_string(), "1.38.0".to_string()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("serde", "1.0.200"), "serde@1.0.200");
    }
}
