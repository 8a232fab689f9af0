//! # Layer 0: Build Plan
//!
//! Pure model of every build-time decision. The build script compiles this
//! module through `#[path]` and turns a [`BuildPlan`] into cfg flags; the
//! library compiles it so the decisions are testable and so the
//! [`REPORT`](crate::REPORT) can name them.
//!
//! ```text
//! Signals --detect_level--> CapabilityLevel --+--resolve_aliases--> [Resolution]
//!    |                                        |
//!    +-- Compiler ------------------------- expand_token --> [Expansion]
//! ```

mod alias;
mod defects;
mod error;
mod level;
mod signals;
mod token;

use core::fmt;

pub use alias::{
    resolve_alias, resolve_aliases, Binding, CanonicalAlias, ExternalSource, Features,
    Resolution, COMPAT_VERSION,
};
pub use defects::{known_defect, KnownDefect, KNOWN_DEFECTS};
pub use error::PlanError;
pub use level::{CapabilityFlag, CapabilityLevel, FLOOR};
pub use signals::{detect_level, parse_version, Compiler, CompilerKind, DeclaredLevel, Detection, Signals};
pub use token::{expand_token, ConditionalToken, Expansion};

/// Cfg carrying the resolved level.
pub const LEVEL_CFG: &str = "csv_level";

/// Cfg set when any alias is bound to an external source.
pub const EXTERNAL_CFG: &str = "csv_external";

/// Everything resolved for one build.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub level: CapabilityLevel,
    pub clamped_from: Option<CapabilityLevel>,
    pub compiler: Compiler,
    pub aliases: Vec<Resolution>,
    pub tokens: Vec<(ConditionalToken, Expansion)>,
    /// Non-fatal findings to surface as cargo warnings.
    pub warnings: Vec<String>,
}

impl BuildPlan {
    pub fn resolve(signals: &Signals, features: Features) -> Result<Self, PlanError> {
        let Detection {
            level,
            clamped_from,
        } = detect_level(signals)?;

        let mut warnings = Vec::new();
        if let Some(declared) = clamped_from {
            warnings.push(format!(
                "CSV_COMPAT_STD declares {declared} but {} only supports {level}",
                signals.compiler
            ));
        }
        for source in signals.externals.iter().filter(|source| !source.is_eligible()) {
            warnings.push(format!(
                "ignoring {}: COMPAT_VERSION {} is older than {COMPAT_VERSION}",
                source.label, source.version
            ));
        }

        let aliases = resolve_aliases(level, features, &signals.externals)?;
        let tokens = ConditionalToken::ALL
            .into_iter()
            .map(|token| (token, expand_token(token, level, &signals.compiler)))
            .collect();

        Ok(Self {
            level,
            clamped_from,
            compiler: signals.compiler.clone(),
            aliases,
            tokens,
            warnings,
        })
    }

    pub fn binding(&self, alias: CanonicalAlias) -> Option<Resolution> {
        self.aliases.iter().copied().find(|resolution| resolution.alias == alias)
    }

    pub fn expansion(&self, token: ConditionalToken) -> Option<Expansion> {
        self.tokens
            .iter()
            .find_map(|&(candidate, expansion)| (candidate == token).then_some(expansion))
    }

    /// Cfg flags that select the compiled candidates.
    pub fn cfgs(&self) -> Vec<CfgDirective> {
        let mut cfgs = vec![CfgDirective::value(LEVEL_CFG, self.level.name())];
        cfgs.extend(
            self.aliases
                .iter()
                .map(|resolution| CfgDirective::value(resolution.alias.cfg_name(), resolution.binding.cfg_value())),
        );
        cfgs.extend(
            self.tokens
                .iter()
                .map(|(token, expansion)| CfgDirective::value(token.cfg_name(), expansion.cfg_value())),
        );
        if self.aliases.iter().any(|resolution| resolution.binding == Binding::External) {
            cfgs.push(CfgDirective::flag(EXTERNAL_CFG));
        }
        cfgs
    }

    /// `rustc-check-cfg` declarations for every cfg [`cfgs`](Self::cfgs) may emit.
    pub fn check_cfgs() -> Vec<String> {
        let mut checks = vec![check_cfg(LEVEL_CFG, CapabilityLevel::ALL.map(CapabilityLevel::name))];
        checks.extend(
            CanonicalAlias::ALL
                .into_iter()
                .map(|alias| check_cfg(alias.cfg_name(), Binding::ALL.map(Binding::cfg_value))),
        );
        checks.extend(
            ConditionalToken::ALL
                .into_iter()
                .map(|token| check_cfg(token.cfg_name(), Expansion::ALL.map(Expansion::cfg_value))),
        );
        checks.push(format!("cfg({EXTERNAL_CFG})"));
        checks
    }
}

fn check_cfg<const N: usize>(name: &str, values: [&str; N]) -> String {
    let values: Vec<String> = values.iter().map(|value| format!("{value:?}")).collect();
    format!("cfg({name}, values({}))", values.join(", "))
}

/// One `cargo:rustc-cfg` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CfgDirective {
    pub name: &'static str,
    pub value: Option<&'static str>,
}

impl CfgDirective {
    pub fn flag(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn value(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }
}

impl fmt::Display for CfgDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}={value:?}", self.name),
            None => f.write_str(self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_cfg_per_alias_and_token() {
        let plan = BuildPlan::resolve(
            &Signals {
                compiler: Compiler::rustc(1, 83, 0),
                ..Signals::default()
            },
            Features::default(),
        )
        .unwrap();

        let rendered: Vec<String> = plan.cfgs().iter().map(ToString::to_string).collect();
        assert!(rendered.contains(&r#"csv_level="latest""#.to_owned()));
        assert!(rendered.contains(&r#"csv_alias_lazy="standard""#.to_owned()));
        assert!(rendered.contains(&r#"csv_token_const_fn="optimal""#.to_owned()));
        assert!(!rendered.contains(&EXTERNAL_CFG.to_owned()));
        assert_eq!(rendered.len(), 1 + CanonicalAlias::ALL.len() + ConditionalToken::ALL.len());
    }

    #[test]
    fn check_cfgs_cover_every_value() {
        let checks = BuildPlan::check_cfgs();
        assert!(checks.contains(&r#"cfg(csv_level, values("legacy", "modern", "latest"))"#.to_owned()));
        assert!(checks.contains(
            &r#"cfg(csv_alias_utf8_chunks, values("external", "standard", "bundled"))"#.to_owned()
        ));
        assert!(checks.contains(&"cfg(csv_external)".to_owned()));
    }

    #[test]
    fn clamped_declaration_warns() {
        let plan = BuildPlan::resolve(
            &Signals {
                declared: Some(DeclaredLevel::Named(CapabilityLevel::Latest)),
                compiler: Compiler::rustc(1, 75, 0),
                ..Signals::default()
            },
            Features::default(),
        )
        .unwrap();
        assert_eq!(plan.level, CapabilityLevel::Legacy);
        assert_eq!(plan.warnings.len(), 1);
    }
}
