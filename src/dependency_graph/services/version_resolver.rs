use crate::dependency_graph::domain::VersionRecord;
use crate::ports::outbound::CrateRegistry;
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use semver::VersionReq;

/// A parsed version requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Empty requirement: every non-yanked version is a candidate
    Any,
    /// A range constraint such as `^1.2`, `>=0.3, <0.5` or `~2`
    Range(VersionReq),
    /// Not a valid range but a valid concrete version. Used verbatim,
    /// without consulting the catalog (and therefore without a yanked check).
    ///
    /// `semver` follows Cargo's requirement grammar, where a bare version
    /// such as `1.0.0` (or `1.0.0+build.1`, build metadata dropped) already
    /// is a caret range. [`Requirement::parse`] therefore never yields this
    /// variant for registry input; it exists for callers that pin a version
    /// explicitly.
    Exact(String),
}

impl Requirement {
    /// Parses requirement text: range first, then concrete version.
    ///
    /// A bare version parses as a range (`1.0.0` means `^1.0.0`), so the
    /// concrete-version fallback only applies to text the range grammar
    /// rejects and the version grammar accepts.
    ///
    /// # Errors
    /// Returns `DepGraphError::InvalidRequirement` if neither parse succeeds
    pub fn parse(name: &str, requirement: &str) -> Result<Self> {
        let trimmed = requirement.trim();
        if trimmed.is_empty() {
            return Ok(Requirement::Any);
        }

        if let Ok(req) = VersionReq::parse(trimmed) {
            return Ok(Requirement::Range(req));
        }

        if semver::Version::parse(trimmed).is_ok() {
            return Ok(Requirement::Exact(trimmed.to_string()));
        }

        Err(DepGraphError::InvalidRequirement {
            name: name.to_string(),
            requirement: trimmed.to_string(),
        }
        .into())
    }

    fn accepts(&self, version: &semver::Version) -> bool {
        match self {
            Requirement::Any => true,
            Requirement::Range(req) => req.matches(version),
            Requirement::Exact(_) => false,
        }
    }
}

/// VersionResolver service mapping a requirement to one concrete version
///
/// Selection rules:
/// 1. An exact-version literal is returned as written.
/// 2. Otherwise the highest non-yanked catalog entry accepted by the
///    requirement wins (standard semver precedence, pre-releases included).
/// 3. If nothing matches, the first non-yanked entry in catalog order is used.
/// 4. A catalog with no non-yanked entry is an error.
pub struct VersionResolver<'a, R: CrateRegistry + ?Sized> {
    registry: &'a R,
}

impl<'a, R: CrateRegistry + ?Sized> VersionResolver<'a, R> {
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Resolves `requirement` for crate `name`, fetching the catalog only
    /// when the requirement needs it.
    pub async fn resolve(&self, name: &str, requirement: &str) -> Result<String> {
        let requirement = Requirement::parse(name, requirement)?;
        if let Requirement::Exact(version) = requirement {
            return Ok(version);
        }

        let catalog = self.registry.fetch_versions(name).await?;
        select_version(name, &requirement, &catalog)
    }
}

/// Pure selection step of [`VersionResolver::resolve`].
pub fn select_version(
    name: &str,
    requirement: &Requirement,
    catalog: &[VersionRecord],
) -> Result<String> {
    if let Requirement::Exact(version) = requirement {
        return Ok(version.clone());
    }

    let best = catalog
        .iter()
        .filter(|record| !record.yanked)
        .filter_map(|record| {
            semver::Version::parse(&record.number)
                .ok()
                .map(|parsed| (parsed, record))
        })
        .filter(|(parsed, _)| requirement.accepts(parsed))
        .max_by(|(a, _), (b, _)| a.cmp(b));

    if let Some((_, record)) = best {
        return Ok(record.number.clone());
    }

    catalog
        .iter()
        .find(|record| !record.yanked)
        .map(|record| record.number.clone())
        .ok_or_else(|| {
            DepGraphError::NoAvailableVersion {
                name: name.to_string(),
            }
            .into()
        })
}
