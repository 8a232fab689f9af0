use semver::Version;

use super::alias::CanonicalAlias;
use super::level::CapabilityLevel;

/// Everything that stops a build from resolving its capability plan.
///
/// Known compiler defects are not errors: they silently select the degraded
/// form of the affected token.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error(
        "ambiguous capability: `{alias}` is provided by both {first} and {second} \
         at COMPAT_VERSION {version}"
    )]
    AmbiguousCapability {
        alias: CanonicalAlias,
        first: String,
        second: String,
        version: u32,
    },

    #[error("unsupported environment: rust {found} is older than the minimum {floor}")]
    UnsupportedEnvironment { found: Version, floor: Version },

    #[error(
        "no implementation of `{alias}` at capability level {level}: \
         enable the `bundled` feature or supply one through CSV_COMPAT_EXTERNAL"
    )]
    NoCandidate {
        alias: CanonicalAlias,
        level: CapabilityLevel,
    },

    #[error("invalid external source {path}: {reason}")]
    InvalidExternal { path: String, reason: String },

    #[error("invalid CSV_COMPAT_STD `{value}`: expected legacy, modern, latest or a rust version")]
    InvalidDeclaration { value: String },
}
