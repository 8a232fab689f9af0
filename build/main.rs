//! Build script: gathers toolchain signals, resolves the capability plan and
//! hands the result to rustc as cfg flags plus generated modules.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::{self, Command};

#[allow(dead_code, unused_imports)]
#[path = "../src/plan/mod.rs"]
mod plan;

mod external;
mod report;

use plan::{BuildPlan, Compiler, DeclaredLevel, Features, Signals};

/// Explicit capability level, the `CMAKE_CXX_STANDARD` of this crate.
const DECLARED_VAR: &str = "CSV_COMPAT_STD";

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build");
    println!("cargo:rerun-if-changed=src/plan");
    println!("cargo:rerun-if-env-changed={DECLARED_VAR}");
    println!("cargo:rerun-if-env-changed={}", external::EXTERNAL_VAR);

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?);
    let mut warnings = Vec::new();

    let declared = DeclaredLevel::from_env(env::var_os(DECLARED_VAR).as_deref())?;

    let sources = external::load_all(env::var_os(external::EXTERNAL_VAR).as_deref(), &mut warnings)?;
    for loaded in &sources {
        println!("cargo:rerun-if-changed={}", loaded.path.display());
    }

    let signals = Signals {
        declared,
        compiler: detect_compiler(),
        externals: sources.iter().map(|loaded| loaded.source.clone()).collect(),
    };
    let features = Features {
        bundled: env::var_os("CARGO_FEATURE_BUNDLED").is_some(),
    };
    let plan = BuildPlan::resolve(&signals, features)?;
    warnings.extend(plan.warnings.iter().cloned());

    for warning in &warnings {
        println!("cargo:warning={warning}");
    }
    if plan.compiler.understands_check_cfg() {
        for check in BuildPlan::check_cfgs() {
            println!("cargo:rustc-check-cfg={check}");
        }
    }
    for cfg in plan.cfgs() {
        println!("cargo:rustc-cfg={cfg}");
    }

    fs::write(out_dir.join("external.rs"), external::render(&sources, &plan))?;
    fs::write(out_dir.join("report.rs"), report::render(&plan))?;
    Ok(())
}

/// Ask `$RUSTC -vV`. A compiler that cannot be queried is unknown.
fn detect_compiler() -> Compiler {
    let rustc = env::var_os("RUSTC").unwrap_or_else(|| "rustc".into());
    match Command::new(rustc).arg("-vV").output() {
        Ok(output) if output.status.success() => {
            Compiler::from_verbose_version(&String::from_utf8_lossy(&output.stdout))
        }
        _ => Compiler::default(),
    }
}
