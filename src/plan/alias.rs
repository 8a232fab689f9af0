//! Canonical aliases and the precedence rule that binds each one.

use core::fmt;

use super::error::PlanError;
use super::level::{CapabilityFlag, CapabilityLevel};

/// Version of the local compatibility layer.
///
/// An external source declaring the same or a newer `COMPAT_VERSION` takes
/// over every canonical name it provides.
pub const COMPAT_VERSION: u32 = 2;

/// A name that is stable across environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalAlias {
    /// `Lazy<T, F = fn() -> T>`.
    Lazy,
    /// `trim_ascii`, `trim_ascii_start`, `trim_ascii_end`.
    TrimAscii,
    /// `Utf8Chunks`, `Utf8Chunk`, `utf8_chunks`.
    Utf8Chunks,
}

impl CanonicalAlias {
    pub const ALL: [Self; 3] = [Self::Lazy, Self::TrimAscii, Self::Utf8Chunks];

    pub fn name(self) -> &'static str {
        match self {
            Self::Lazy => "Lazy",
            Self::TrimAscii => "trim_ascii",
            Self::Utf8Chunks => "Utf8Chunks",
        }
    }

    /// Public items a source must define to provide this alias.
    pub fn items(self) -> &'static [&'static str] {
        match self {
            Self::Lazy => &["Lazy"],
            Self::TrimAscii => &["trim_ascii", "trim_ascii_start", "trim_ascii_end"],
            Self::Utf8Chunks => &["Utf8Chunks", "Utf8Chunk", "utf8_chunks"],
        }
    }

    pub fn cfg_name(self) -> &'static str {
        match self {
            Self::Lazy => "csv_alias_lazy",
            Self::TrimAscii => "csv_alias_trim_ascii",
            Self::Utf8Chunks => "csv_alias_utf8_chunks",
        }
    }

    /// Flag the standard library candidate needs.
    pub fn standard_flag(self) -> CapabilityFlag {
        match self {
            Self::Lazy => CapabilityFlag::LazyLock,
            Self::TrimAscii => CapabilityFlag::TrimAscii,
            Self::Utf8Chunks => CapabilityFlag::Utf8Chunks,
        }
    }
}

impl fmt::Display for CanonicalAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Which candidate an alias is bound to.
///
/// Ordered by capability: `Bundled < Standard < External`, which is also
/// the reverse of the order candidates are consulted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Binding {
    Bundled,
    Standard,
    External,
}

impl Binding {
    pub const ALL: [Self; 3] = [Self::External, Self::Standard, Self::Bundled];

    pub fn cfg_value(self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::Standard => "standard",
            Self::External => "external",
        }
    }
}

/// Cargo features that affect resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub bundled: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self { bundled: true }
    }
}

/// An externally supplied implementation of canonical names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSource {
    /// Human-readable origin, usually a file path.
    pub label: String,
    pub version: u32,
    pub provides: Vec<CanonicalAlias>,
}

impl ExternalSource {
    /// Describe a source from the public names it defines.
    ///
    /// An alias is provided only when every one of its items is present.
    /// Aliases with some but not all items are returned separately and are
    /// not provided.
    pub fn from_names(label: String, version: u32, names: &[String]) -> (Self, Vec<CanonicalAlias>) {
        let mut provides = Vec::new();
        let mut partial = Vec::new();
        for alias in CanonicalAlias::ALL {
            let present = alias
                .items()
                .iter()
                .filter(|item| names.iter().any(|name| name == *item))
                .count();
            if present == alias.items().len() {
                provides.push(alias);
            } else if present > 0 {
                partial.push(alias);
            }
        }
        let source = Self {
            label,
            version,
            provides,
        };
        (source, partial)
    }

    /// Sources older than the local layer are ignored entirely.
    pub fn is_eligible(&self) -> bool {
        self.version >= COMPAT_VERSION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub alias: CanonicalAlias,
    pub binding: Binding,
    /// Index into the external source list when `binding` is `External`.
    pub source: Option<usize>,
}

/// Bind `alias` to exactly one candidate.
///
/// Consults, in order: the newest eligible external source providing the
/// alias, the standard library when `level` owns the alias's flag, and the
/// bundled fallback when the feature is on. Two external sources at the
/// winning version are ambiguous; exhausting every candidate is an error.
pub fn resolve_alias(
    alias: CanonicalAlias,
    level: CapabilityLevel,
    features: Features,
    externals: &[ExternalSource],
) -> Result<Resolution, PlanError> {
    let candidates: Vec<(usize, &ExternalSource)> = externals
        .iter()
        .enumerate()
        .filter(|(_, source)| source.is_eligible() && source.provides.contains(&alias))
        .collect();

    if let Some(newest) = candidates.iter().map(|(_, source)| source.version).max() {
        let mut winners = candidates.iter().filter(|(_, source)| source.version == newest);
        if let Some(&(index, first)) = winners.next() {
            if let Some((_, second)) = winners.next() {
                return Err(PlanError::AmbiguousCapability {
                    alias,
                    first: first.label.clone(),
                    second: second.label.clone(),
                    version: newest,
                });
            }
            return Ok(Resolution {
                alias,
                binding: Binding::External,
                source: Some(index),
            });
        }
    }

    let binding = if level.has(alias.standard_flag()) {
        Binding::Standard
    } else if features.bundled {
        Binding::Bundled
    } else {
        return Err(PlanError::NoCandidate { alias, level });
    };
    Ok(Resolution {
        alias,
        binding,
        source: None,
    })
}

pub fn resolve_aliases(
    level: CapabilityLevel,
    features: Features,
    externals: &[ExternalSource],
) -> Result<Vec<Resolution>, PlanError> {
    CanonicalAlias::ALL
        .into_iter()
        .map(|alias| resolve_alias(alias, level, features, externals))
        .collect()
}
