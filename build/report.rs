//! Renders the `REPORT` constant the library includes from `OUT_DIR`.

use core::fmt::Debug;

use proc_macro2::{Ident, Span};
use quote::quote;

use crate::plan::BuildPlan;

pub fn render(plan: &BuildPlan) -> String {
    let level = variant(plan.level);
    let clamped_from = match plan.clamped_from {
        Some(declared) => {
            let declared = variant(declared);
            quote!(Some(CapabilityLevel::#declared))
        }
        None => quote!(None),
    };
    let compiler = variant(plan.compiler.kind);
    let release = match &plan.compiler.version {
        Some(version) => {
            let version = version.to_string();
            quote!(Some(#version))
        }
        None => quote!(None),
    };
    let aliases = plan.aliases.iter().map(|resolution| {
        let alias = variant(resolution.alias);
        let binding = variant(resolution.binding);
        quote!((CanonicalAlias::#alias, Binding::#binding))
    });
    let tokens = plan.tokens.iter().map(|(token, expansion)| {
        let token = variant(token);
        let expansion = variant(expansion);
        quote!((ConditionalToken::#token, Expansion::#expansion))
    });

    quote! {
        /// Capability plan the build script resolved for this build.
        pub const REPORT: BuildReport = BuildReport {
            level: CapabilityLevel::#level,
            clamped_from: #clamped_from,
            compiler: CompilerKind::#compiler,
            compiler_release: #release,
            aliases: &[#(#aliases),*],
            tokens: &[#(#tokens),*],
        };
    }
    .to_string()
}

/// Unit variants debug-print as their own name.
fn variant(value: impl Debug) -> Ident {
    Ident::new(&format!("{value:?}"), Span::call_site())
}
