//! Build signals and the capability detector.

use core::fmt;
use std::ffi::OsStr;

use semver::Version;

use super::alias::ExternalSource;
use super::error::PlanError;
use super::level::{CapabilityLevel, FLOOR};

/// Compiler identity as reported by `$RUSTC -vV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompilerKind {
    Rustc,
    Gccrs,
    #[default]
    Unknown,
}

impl CompilerKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rustc => "rustc",
            Self::Gccrs => "gccrs",
            Self::Unknown => "unknown compiler",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compiler {
    pub kind: CompilerKind,
    pub version: Option<Version>,
}

impl Compiler {
    pub fn new(kind: CompilerKind, version: Option<Version>) -> Self {
        Self { kind, version }
    }

    pub fn rustc(major: u64, minor: u64, patch: u64) -> Self {
        Self::new(CompilerKind::Rustc, Some(Version::new(major, minor, patch)))
    }

    /// Parse the output of `rustc -vV` (or a compatible driver).
    ///
    /// The identity comes from the first word of the first line. The version
    /// comes from the `release:` line, falling back to the first token of the
    /// first line that parses as a version. Anything unrecognised yields an
    /// unknown compiler or an unknown version, never a guess.
    pub fn from_verbose_version(output: &str) -> Self {
        let mut lines = output.lines();
        let Some(banner) = lines.next() else {
            return Self::default();
        };

        let kind = match banner.split_whitespace().next() {
            Some("rustc") => CompilerKind::Rustc,
            Some("gccrs") => CompilerKind::Gccrs,
            _ => return Self::default(),
        };

        let release = lines
            .filter_map(|line| line.strip_prefix("release:"))
            .find_map(|value| parse_version(value.trim()));
        let version =
            release.or_else(|| banner.split_whitespace().skip(1).find_map(parse_version));

        Self { kind, version }
    }

    /// Cargo accepts `rustc-check-cfg` from 1.80 on and warns about it before.
    pub fn understands_check_cfg(&self) -> bool {
        match (self.kind, &self.version) {
            (CompilerKind::Rustc, Some(version)) => *version >= Version::new(1, 80, 0),
            _ => false,
        }
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {version}", self.kind.name()),
            None => f.write_str(self.kind.name()),
        }
    }
}

/// Accepts `1.80`, `1.80.1` and `1.85.0-nightly`.
pub fn parse_version(text: &str) -> Option<Version> {
    let text = text.trim();
    Version::parse(text).ok().or_else(|| {
        let (numbers, pre) = match text.split_once('-') {
            Some((numbers, pre)) => (numbers, Some(pre)),
            None => (text, None),
        };
        if numbers.split('.').count() != 2 {
            return None;
        }
        let padded = match pre {
            Some(pre) => format!("{numbers}.0-{pre}"),
            None => format!("{numbers}.0"),
        };
        Version::parse(&padded).ok()
    })
}

/// Explicit level from build configuration (`CSV_COMPAT_STD`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredLevel {
    Named(CapabilityLevel),
    Version(Version),
}

impl DeclaredLevel {
    pub fn parse(value: &str) -> Result<Self, PlanError> {
        let value = value.trim();
        if let Some(level) = CapabilityLevel::from_name(value) {
            return Ok(Self::Named(level));
        }
        parse_version(value)
            .map(Self::Version)
            .ok_or_else(|| PlanError::InvalidDeclaration {
                value: value.to_owned(),
            })
    }

    /// Read the raw environment value. Unset or blank means no declaration.
    pub fn from_env(value: Option<&OsStr>) -> Result<Option<Self>, PlanError> {
        let Some(value) = value else {
            return Ok(None);
        };
        let Some(text) = value.to_str() else {
            return Err(PlanError::InvalidDeclaration {
                value: value.to_string_lossy().into_owned(),
            });
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        Self::parse(text).map(Some)
    }

    pub fn level(&self) -> Result<CapabilityLevel, PlanError> {
        match self {
            Self::Named(level) => Ok(*level),
            Self::Version(version) => {
                CapabilityLevel::from_version(version).ok_or_else(|| unsupported(version))
            }
        }
    }
}

/// Everything the detector and resolver look at.
#[derive(Debug, Clone, Default)]
pub struct Signals {
    pub declared: Option<DeclaredLevel>,
    pub compiler: Compiler,
    pub externals: Vec<ExternalSource>,
}

/// Level chosen by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub level: CapabilityLevel,
    /// Declared level that exceeded what the compiler supports.
    pub clamped_from: Option<CapabilityLevel>,
}

/// Resolve the capability level from build signals.
///
/// Only a known rustc version counts as evidence of features. A declaration
/// may lower that level but never raise it; with no usable version the
/// declaration is the only evidence, and with neither the level is
/// [`CapabilityLevel::Legacy`].
pub fn detect_level(signals: &Signals) -> Result<Detection, PlanError> {
    let detected = match (signals.compiler.kind, &signals.compiler.version) {
        (CompilerKind::Rustc, Some(version)) => {
            Some(CapabilityLevel::from_version(version).ok_or_else(|| unsupported(version))?)
        }
        _ => None,
    };
    let declared = signals.declared.as_ref().map(DeclaredLevel::level).transpose()?;

    let detection = match (declared, detected) {
        (Some(declared), Some(detected)) if declared > detected => Detection {
            level: detected,
            clamped_from: Some(declared),
        },
        (Some(level), _) | (None, Some(level)) => Detection {
            level,
            clamped_from: None,
        },
        (None, None) => Detection {
            level: CapabilityLevel::Legacy,
            clamped_from: None,
        },
    };
    Ok(detection)
}

fn unsupported(found: &Version) -> PlanError {
    let (major, minor, patch) = FLOOR;
    PlanError::UnsupportedEnvironment {
        found: found.clone(),
        floor: Version::new(major, minor, patch),
    }
}
