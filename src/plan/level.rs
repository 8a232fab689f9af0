//! Capability flags and the totally ordered level they compose into.
//!
//! Every flag is owned by exactly one level. A level implies every flag of
//! the levels below it, so "has flag" reduces to a level comparison.

use core::fmt;

use semver::Version;

/// Oldest rustc the crate builds with at all (`OnceLock`).
pub const FLOOR: (u64, u64, u64) = (1, 70, 0);

/// Build-time summary of which language features are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilityLevel {
    /// Floor: rustc 1.70 through 1.79.
    Legacy,
    /// rustc 1.80 through 1.82.
    Modern,
    /// rustc 1.83 and newer.
    Latest,
}

impl CapabilityLevel {
    pub const ALL: [Self; 3] = [Self::Legacy, Self::Modern, Self::Latest];

    /// First rustc release that satisfies this level.
    pub fn min_version(self) -> Version {
        let (major, minor, patch) = match self {
            Self::Legacy => FLOOR,
            Self::Modern => (1, 80, 0),
            Self::Latest => (1, 83, 0),
        };
        Version::new(major, minor, patch)
    }

    /// Highest level `version` satisfies, or `None` below the floor.
    ///
    /// Pre-release versions order before their release (`1.83.0-nightly <
    /// 1.83.0`), so a nightly is credited with the previous level.
    pub fn from_version(version: &Version) -> Option<Self> {
        Self::ALL
            .into_iter()
            .rev()
            .find(|level| *version >= level.min_version())
    }

    pub fn has(self, flag: CapabilityFlag) -> bool {
        flag.level() <= self
    }

    pub fn flags(self) -> impl Iterator<Item = CapabilityFlag> {
        CapabilityFlag::ALL.into_iter().filter(move |flag| self.has(*flag))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Modern => "modern",
            Self::Latest => "latest",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CapabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One language or library feature, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityFlag {
    /// `const { .. }` blocks in expression position.
    InlineConst,
    /// `<[u8]>::utf8_chunks` and `core::str::Utf8Chunks`.
    Utf8Chunks,
    /// `std::sync::LazyLock`.
    LazyLock,
    /// `<[u8]>::trim_ascii` and friends.
    TrimAscii,
    /// `&mut` references inside `const fn`.
    ConstMutRefs,
}

impl CapabilityFlag {
    pub const ALL: [Self; 5] = [
        Self::InlineConst,
        Self::Utf8Chunks,
        Self::LazyLock,
        Self::TrimAscii,
        Self::ConstMutRefs,
    ];

    /// rustc release that stabilized the feature.
    pub fn stabilized_in(self) -> Version {
        match self {
            Self::InlineConst | Self::Utf8Chunks => Version::new(1, 79, 0),
            Self::LazyLock | Self::TrimAscii => Version::new(1, 80, 0),
            Self::ConstMutRefs => Version::new(1, 83, 0),
        }
    }

    /// Lowest level that owns this flag.
    pub fn level(self) -> CapabilityLevel {
        match self {
            Self::InlineConst | Self::Utf8Chunks | Self::LazyLock | Self::TrimAscii => {
                CapabilityLevel::Modern
            }
            Self::ConstMutRefs => CapabilityLevel::Latest,
        }
    }
}
