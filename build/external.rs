//! External implementations of canonical names.
//!
//! Each file listed in `CSV_COMPAT_EXTERNAL` is parsed with `syn`. Its
//! `pub const COMPAT_VERSION: u32` plays the role of an include guard: a file
//! without one is rejected, and its value decides precedence. The files that
//! win at least one alias are re-emitted into `$OUT_DIR/external.rs`, minus
//! the canonical items they lost.

use std::collections::BTreeSet;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use quote::{format_ident, quote};
use syn::{Expr, ExprLit, Item, Lit, UseTree, Visibility};

use crate::plan::{Binding, BuildPlan, CanonicalAlias, ExternalSource, PlanError};

/// Path list of external source files.
pub const EXTERNAL_VAR: &str = "CSV_COMPAT_EXTERNAL";

const VERSION_ITEM: &str = "COMPAT_VERSION";

pub struct LoadedSource {
    pub path: PathBuf,
    pub file: syn::File,
    pub source: ExternalSource,
}

pub fn load_all(paths: Option<&OsStr>, warnings: &mut Vec<String>) -> Result<Vec<LoadedSource>, PlanError> {
    let Some(paths) = paths else {
        return Ok(Vec::new());
    };
    env::split_paths(paths)
        .filter(|path| !path.as_os_str().is_empty())
        .map(|path| load(path, warnings))
        .collect()
}

fn load(path: PathBuf, warnings: &mut Vec<String>) -> Result<LoadedSource, PlanError> {
    let text = fs::read_to_string(&path).map_err(|err| PlanError::InvalidExternal {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    parse(path, &text, warnings)
}

/// Parse the text of one external source.
pub fn parse(path: PathBuf, text: &str, warnings: &mut Vec<String>) -> Result<LoadedSource, PlanError> {
    let label = path.display().to_string();
    let invalid = |reason: String| PlanError::InvalidExternal {
        path: label.clone(),
        reason,
    };

    let file = syn::parse_file(text).map_err(|err| invalid(err.to_string()))?;
    let version = compat_version(&file)
        .ok_or_else(|| invalid(format!("missing `pub const {VERSION_ITEM}: u32`")))?;

    let names: Vec<String> = file
        .items
        .iter()
        .filter(|item| is_public(item))
        .flat_map(exported_names)
        .collect();

    let (source, partial) = ExternalSource::from_names(label, version, &names);
    for alias in partial {
        warnings.push(format!(
            "{} defines only part of `{alias}` (needs {}); the local binding is kept",
            source.label,
            alias.items().join(", ")
        ));
    }

    Ok(LoadedSource { path, file, source })
}

fn compat_version(file: &syn::File) -> Option<u32> {
    file.items.iter().find_map(|item| match item {
        Item::Const(item) if item.ident == VERSION_ITEM && matches!(item.vis, Visibility::Public(_)) => {
            match &*item.expr {
                Expr::Lit(ExprLit {
                    lit: Lit::Int(value), ..
                }) => value.base10_parse::<u32>().ok(),
                _ => None,
            }
        }
        _ => None,
    })
}

fn is_public(item: &Item) -> bool {
    let vis = match item {
        Item::Const(item) => &item.vis,
        Item::Enum(item) => &item.vis,
        Item::Fn(item) => &item.vis,
        Item::Static(item) => &item.vis,
        Item::Struct(item) => &item.vis,
        Item::Trait(item) => &item.vis,
        Item::Type(item) => &item.vis,
        Item::Union(item) => &item.vis,
        Item::Use(item) => &item.vis,
        _ => return false,
    };
    matches!(vis, Visibility::Public(_))
}

/// Names an item introduces into its module.
fn exported_names(item: &Item) -> Vec<String> {
    let ident = match item {
        Item::Const(item) => &item.ident,
        Item::Enum(item) => &item.ident,
        Item::Fn(item) => &item.sig.ident,
        Item::Static(item) => &item.ident,
        Item::Struct(item) => &item.ident,
        Item::Trait(item) => &item.ident,
        Item::Type(item) => &item.ident,
        Item::Union(item) => &item.ident,
        Item::Use(item) => {
            let mut names = Vec::new();
            use_names(&item.tree, &mut names);
            return names;
        }
        _ => return Vec::new(),
    };
    vec![ident.to_string()]
}

fn use_names(tree: &UseTree, names: &mut Vec<String>) {
    match tree {
        UseTree::Path(path) => use_names(&path.tree, names),
        UseTree::Name(name) => names.push(name.ident.to_string()),
        UseTree::Rename(rename) => names.push(rename.rename.to_string()),
        UseTree::Glob(_) => {}
        UseTree::Group(group) => {
            for tree in &group.items {
                use_names(tree, names);
            }
        }
    }
}

/// Module source for every external file that won at least one alias.
///
/// Canonical items a file did not win are stripped, so a losing candidate is
/// never compiled. A `use` item that names one is stripped whole.
pub fn render(sources: &[LoadedSource], plan: &BuildPlan) -> String {
    let mut modules = Vec::new();
    let mut exports = Vec::new();

    for (index, loaded) in sources.iter().enumerate() {
        let won: Vec<CanonicalAlias> = plan
            .aliases
            .iter()
            .filter(|resolution| resolution.binding == Binding::External && resolution.source == Some(index))
            .map(|resolution| resolution.alias)
            .collect();
        if won.is_empty() {
            continue;
        }

        let kept: BTreeSet<&str> = won.iter().flat_map(|alias| alias.items().iter().copied()).collect();
        let stripped: BTreeSet<&str> = CanonicalAlias::ALL
            .iter()
            .flat_map(|alias| alias.items().iter().copied())
            .filter(|name| !kept.contains(name))
            .collect();

        let module = format_ident!("source_{index}");
        let items = loaded.file.items.iter().filter(|item| {
            exported_names(item)
                .iter()
                .all(|name| !stripped.contains(name.as_str()))
        });
        modules.push(quote! {
            pub mod #module {
                #(#items)*
            }
        });
        for name in kept {
            let name = format_ident!("{name}");
            exports.push(quote!(pub use self::#module::#name;));
        }
    }

    quote!(#(#modules)* #(#exports)*).to_string()
}
