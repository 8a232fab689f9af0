//! Compilers known to mishandle a construct the level would otherwise allow.

use semver::Version;

use super::signals::{Compiler, CompilerKind};
use super::token::ConditionalToken;

/// A compiler/version range that must use the degraded form of `token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownDefect {
    pub compiler: CompilerKind,
    /// Inclusive lower bound, `None` for every earlier version.
    pub from: Option<(u64, u64, u64)>,
    /// Exclusive upper bound, `None` for every later version.
    pub until: Option<(u64, u64, u64)>,
    pub token: ConditionalToken,
}

pub const KNOWN_DEFECTS: &[KnownDefect] = &[
    // gccrs cannot const-evaluate methods taking `&mut self`.
    KnownDefect {
        compiler: CompilerKind::Gccrs,
        from: None,
        until: Some((15, 0, 0)),
        token: ConditionalToken::ConstFn,
    },
];

impl KnownDefect {
    /// A compiler with no known version is treated as affected.
    pub fn matches(&self, compiler: &Compiler) -> bool {
        if compiler.kind != self.compiler {
            return false;
        }
        let Some(version) = &compiler.version else {
            return true;
        };
        let after_start = self
            .from
            .map_or(true, |(major, minor, patch)| *version >= Version::new(major, minor, patch));
        let before_end = self
            .until
            .map_or(true, |(major, minor, patch)| *version < Version::new(major, minor, patch));
        after_start && before_end
    }
}

pub fn known_defect(token: ConditionalToken, compiler: &Compiler) -> Option<&'static KnownDefect> {
    KNOWN_DEFECTS
        .iter()
        .find(|defect| defect.token == token && defect.matches(compiler))
}
