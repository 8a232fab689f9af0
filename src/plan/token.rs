//! Conditional tokens and how each one expands.

use core::fmt;

use super::defects::known_defect;
use super::level::{CapabilityFlag, CapabilityLevel};
use super::signals::Compiler;

/// A construct with one stable spelling and a level-dependent expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConditionalToken {
    /// `if_const!`: compile-time branch.
    IfConst,
    /// `const_value!`: compile-time constant item.
    ConstValue,
    /// `const_fn!`: method constancy qualifier.
    ConstFn,
}

impl ConditionalToken {
    pub const ALL: [Self; 3] = [Self::IfConst, Self::ConstValue, Self::ConstFn];

    /// Flag the optimal form depends on.
    ///
    /// `const_value!` shares `InlineConst` with `if_const!`: inline `const`
    /// blocks can read `const` items but not `static`s, so the two switch
    /// together and a declared value always works inside an `if_const!`
    /// condition.
    pub fn flag(self) -> CapabilityFlag {
        match self {
            Self::IfConst | Self::ConstValue => CapabilityFlag::InlineConst,
            Self::ConstFn => CapabilityFlag::ConstMutRefs,
        }
    }

    /// Lowest level at which the optimal form compiles.
    pub fn minimum_level(self) -> CapabilityLevel {
        self.flag().level()
    }

    pub fn macro_name(self) -> &'static str {
        match self {
            Self::IfConst => "if_const!",
            Self::ConstValue => "const_value!",
            Self::ConstFn => "const_fn!",
        }
    }

    pub fn cfg_name(self) -> &'static str {
        match self {
            Self::IfConst => "csv_token_if_const",
            Self::ConstValue => "csv_token_const_value",
            Self::ConstFn => "csv_token_const_fn",
        }
    }
}

impl fmt::Display for ConditionalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.macro_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expansion {
    /// Weaker form with identical observable behaviour.
    Degraded,
    /// Strongest form the toolchain supports.
    Optimal,
}

impl Expansion {
    pub const ALL: [Self; 2] = [Self::Optimal, Self::Degraded];

    pub fn cfg_value(self) -> &'static str {
        match self {
            Self::Degraded => "degraded",
            Self::Optimal => "optimal",
        }
    }
}

/// Expansion of `token` for a level and compiler.
///
/// Total over its inputs. A known-defect entry for the compiler forces the
/// degraded form even when the level allows the optimal one.
pub fn expand_token(token: ConditionalToken, level: CapabilityLevel, compiler: &Compiler) -> Expansion {
    if known_defect(token, compiler).is_some() || level < token.minimum_level() {
        Expansion::Degraded
    } else {
        Expansion::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::signals::CompilerKind;

    #[test]
    fn every_combination_is_defined() {
        let compilers = [
            Compiler::rustc(1, 83, 0),
            Compiler::new(CompilerKind::Gccrs, None),
            Compiler::default(),
        ];
        for token in ConditionalToken::ALL {
            for level in CapabilityLevel::ALL {
                for compiler in &compilers {
                    let expansion = expand_token(token, level, compiler);
                    assert!(Expansion::ALL.contains(&expansion));
                }
            }
        }
    }

    #[test]
    fn compile_time_branch_and_value_switch_together() {
        let mut compilers = vec![Compiler::rustc(1, 70, 0), Compiler::rustc(1, 83, 0), Compiler::default()];
        compilers.extend(
            crate::plan::KNOWN_DEFECTS
                .iter()
                .map(|defect| Compiler::new(defect.compiler, None)),
        );
        for level in CapabilityLevel::ALL {
            for compiler in &compilers {
                assert_eq!(
                    expand_token(ConditionalToken::IfConst, level, compiler),
                    expand_token(ConditionalToken::ConstValue, level, compiler),
                    "{level} {compiler}"
                );
            }
        }
    }

    #[test]
    fn below_minimum_level_degrades() {
        let rustc = Compiler::rustc(1, 81, 0);
        assert_eq!(
            expand_token(ConditionalToken::ConstFn, CapabilityLevel::Modern, &rustc),
            Expansion::Degraded
        );
        assert_eq!(
            expand_token(ConditionalToken::IfConst, CapabilityLevel::Modern, &rustc),
            Expansion::Optimal
        );
    }
}
