//! Alias resolution and token expansion across levels, compilers and
//! external sources.

use csv_compat::plan::{
    expand_token, resolve_alias, resolve_aliases, Binding, BuildPlan, CanonicalAlias, CapabilityLevel, Compiler,
    CompilerKind, ConditionalToken, DeclaredLevel, Expansion, ExternalSource, Features, PlanError, Signals,
    COMPAT_VERSION, KNOWN_DEFECTS,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use semver::Version;

fn external(label: &str, version: u32, provides: &[CanonicalAlias]) -> ExternalSource {
    ExternalSource {
        label: label.to_owned(),
        version,
        provides: provides.to_vec(),
    }
}

fn rustc(minor: u64) -> Signals {
    Signals {
        compiler: Compiler::rustc(1, minor, 0),
        ..Signals::default()
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
#[case::modern_binds_standard(CapabilityLevel::Modern, Binding::Standard)]
#[case::latest_binds_standard(CapabilityLevel::Latest, Binding::Standard)]
#[case::legacy_binds_bundled(CapabilityLevel::Legacy, Binding::Bundled)]
fn level_selects_candidate(#[case] level: CapabilityLevel, #[case] expected: Binding) {
    for alias in CanonicalAlias::ALL {
        let resolution = resolve_alias(alias, level, Features::default(), &[]).unwrap();
        assert_eq!(resolution.binding, expected, "{alias}");
        assert_eq!(resolution.source, None);
    }
}

#[rstest]
fn external_override_wins_at_every_level(
    #[values(CapabilityLevel::Legacy, CapabilityLevel::Modern, CapabilityLevel::Latest)] level: CapabilityLevel,
) {
    let externals = [external("vendor/compat.rs", COMPAT_VERSION, &CanonicalAlias::ALL)];
    for alias in CanonicalAlias::ALL {
        let resolution = resolve_alias(alias, level, Features::default(), &externals).unwrap();
        assert_eq!(resolution.binding, Binding::External);
        assert_eq!(resolution.source, Some(0));
    }
}

#[rstest]
fn known_defect_forces_degraded_form(
    #[values(CapabilityLevel::Legacy, CapabilityLevel::Modern, CapabilityLevel::Latest)] level: CapabilityLevel,
) {
    for defect in KNOWN_DEFECTS {
        let version = defect.from.map(|(major, minor, patch)| Version::new(major, minor, patch));
        let compiler = Compiler::new(defect.compiler, version);
        assert_eq!(expand_token(defect.token, level, &compiler), Expansion::Degraded);
    }
}

#[test]
fn gccrs_declared_latest_still_degrades_const_fn() {
    let signals = Signals {
        declared: Some(DeclaredLevel::Named(CapabilityLevel::Latest)),
        compiler: Compiler::from_verbose_version("gccrs (GCC) 14.2.0\n"),
        ..Signals::default()
    };
    let plan = BuildPlan::resolve(&signals, Features::default()).unwrap();

    assert_eq!(plan.level, CapabilityLevel::Latest);
    assert_eq!(plan.compiler.kind, CompilerKind::Gccrs);
    assert_eq!(plan.expansion(ConditionalToken::ConstFn), Some(Expansion::Degraded));
    assert_eq!(plan.expansion(ConditionalToken::IfConst), Some(Expansion::Optimal));
    assert!(plan.warnings.is_empty(), "defect substitution is silent");
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn exactly_one_binding_per_alias() {
    for level in CapabilityLevel::ALL {
        let resolutions = resolve_aliases(level, Features::default(), &[]).unwrap();
        for alias in CanonicalAlias::ALL {
            let count = resolutions.iter().filter(|resolution| resolution.alias == alias).count();
            assert_eq!(count, 1, "{alias} at {level}");
        }
    }
}

#[test]
fn bindings_never_regress_as_level_rises() {
    let override_states = [
        Vec::new(),
        vec![external("lazy.rs", COMPAT_VERSION, &[CanonicalAlias::Lazy])],
    ];
    for externals in &override_states {
        for alias in CanonicalAlias::ALL {
            let bindings: Vec<Binding> = CapabilityLevel::ALL
                .into_iter()
                .map(|level| resolve_alias(alias, level, Features::default(), externals).unwrap().binding)
                .collect();
            assert!(bindings.windows(2).all(|pair| pair[0] <= pair[1]), "{alias}: {bindings:?}");
        }
    }
}

#[test]
fn expansions_never_regress_as_level_rises() {
    let compiler = Compiler::rustc(1, 90, 0);
    for token in ConditionalToken::ALL {
        let expansions: Vec<Expansion> = CapabilityLevel::ALL
            .into_iter()
            .map(|level| expand_token(token, level, &compiler))
            .collect();
        assert!(expansions.windows(2).all(|pair| pair[0] <= pair[1]), "{token}: {expansions:?}");
    }
}

// =============================================================================
// Detector
// =============================================================================

#[rstest]
#[case(70, CapabilityLevel::Legacy)]
#[case(79, CapabilityLevel::Legacy)]
#[case(80, CapabilityLevel::Modern)]
#[case(82, CapabilityLevel::Modern)]
#[case(83, CapabilityLevel::Latest)]
#[case(95, CapabilityLevel::Latest)]
fn rustc_version_maps_to_level(#[case] minor: u64, #[case] expected: CapabilityLevel) {
    let plan = BuildPlan::resolve(&rustc(minor), Features::default()).unwrap();
    assert_eq!(plan.level, expected);
}

#[test]
fn same_signals_same_plan() {
    let signals = Signals {
        declared: DeclaredLevel::parse("1.81").ok(),
        compiler: Compiler::rustc(1, 85, 0),
        externals: vec![external("a.rs", COMPAT_VERSION, &[CanonicalAlias::TrimAscii])],
    };
    let first = BuildPlan::resolve(&signals, Features::default()).unwrap();
    let second = BuildPlan::resolve(&signals, Features::default()).unwrap();
    assert_eq!(first.cfgs(), second.cfgs());
}

#[test]
fn unknown_compiler_trusts_declaration_only() {
    let signals = Signals {
        declared: Some(DeclaredLevel::Named(CapabilityLevel::Modern)),
        ..Signals::default()
    };
    let plan = BuildPlan::resolve(&signals, Features::default()).unwrap();
    assert_eq!(plan.level, CapabilityLevel::Modern);
    assert_eq!(plan.clamped_from, None);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn equal_precedence_externals_are_ambiguous() {
    let signals = Signals {
        externals: vec![
            external("first.rs", COMPAT_VERSION, &[CanonicalAlias::Utf8Chunks]),
            external("second.rs", COMPAT_VERSION, &[CanonicalAlias::Utf8Chunks]),
        ],
        ..rustc(83)
    };
    let err = BuildPlan::resolve(&signals, Features::default()).unwrap_err();
    match &err {
        PlanError::AmbiguousCapability {
            alias, first, second, ..
        } => {
            assert_eq!(*alias, CanonicalAlias::Utf8Chunks);
            assert_eq!((first.as_str(), second.as_str()), ("first.rs", "second.rs"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("first.rs"));
}

#[test]
fn legacy_without_bundled_fails() {
    let err = BuildPlan::resolve(&rustc(75), Features { bundled: false }).unwrap_err();
    assert!(matches!(
        err,
        PlanError::NoCandidate {
            level: CapabilityLevel::Legacy,
            ..
        }
    ));
}

#[test]
fn modern_without_bundled_succeeds() {
    let plan = BuildPlan::resolve(&rustc(80), Features { bundled: false }).unwrap();
    assert!(plan.aliases.iter().all(|resolution| resolution.binding == Binding::Standard));
}

#[test]
fn below_floor_is_unsupported() {
    let err = BuildPlan::resolve(&rustc(63), Features::default()).unwrap_err();
    assert_eq!(err.to_string(), "unsupported environment: rust 1.63.0 is older than the minimum 1.70.0");
}

#[test]
fn older_external_is_ignored_with_warning() {
    let signals = Signals {
        externals: vec![external("stale.rs", COMPAT_VERSION - 1, &[CanonicalAlias::Lazy])],
        ..rustc(83)
    };
    let plan = BuildPlan::resolve(&signals, Features::default()).unwrap();
    assert_eq!(plan.binding(CanonicalAlias::Lazy).map(|r| r.binding), Some(Binding::Standard));
    assert_eq!(plan.warnings.len(), 1);
    assert!(plan.warnings[0].contains("stale.rs"));
}
