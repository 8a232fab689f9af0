//! What the build script resolved, as an immutable constant.
//!
//! Meant for diagnostics and tests. Library code selects behaviour through
//! the canonical names, never by inspecting the report.

use core::fmt;

use crate::plan::{Binding, CanonicalAlias, CapabilityLevel, CompilerKind, ConditionalToken, Expansion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub level: CapabilityLevel,
    /// Declared level the compiler could not honour.
    pub clamped_from: Option<CapabilityLevel>,
    pub compiler: CompilerKind,
    pub compiler_release: Option<&'static str>,
    pub aliases: &'static [(CanonicalAlias, Binding)],
    pub tokens: &'static [(ConditionalToken, Expansion)],
}

impl BuildReport {
    pub fn binding(&self, alias: CanonicalAlias) -> Option<Binding> {
        self.aliases
            .iter()
            .find_map(|&(candidate, binding)| (candidate == alias).then_some(binding))
    }

    pub fn expansion(&self, token: ConditionalToken) -> Option<Expansion> {
        self.tokens
            .iter()
            .find_map(|&(candidate, expansion)| (candidate == token).then_some(expansion))
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capability level: {}", self.level)?;
        if let Some(declared) = self.clamped_from {
            write!(f, " (declared {declared})")?;
        }
        match self.compiler_release {
            Some(release) => writeln!(f, ", {} {release}", self.compiler.name())?,
            None => writeln!(f, ", {}", self.compiler.name())?,
        }
        for (alias, binding) in self.aliases {
            writeln!(f, "  {alias:<12} -> {}", binding.cfg_value())?;
        }
        for (token, expansion) in self.tokens {
            writeln!(f, "  {token:<12} -> {}", expansion.cfg_value())?;
        }
        Ok(())
    }
}

include!(concat!(env!("OUT_DIR"), "/report.rs"));
