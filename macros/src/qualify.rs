//! Constancy qualifiers for `fn` items.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream},
    parse_quote, Ident, ItemFn, Token,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Qualifier {
    /// `const fn`.
    Const,
    /// `#[inline] fn`, never `const`.
    Inline,
}

impl Parse for Qualifier {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![const]) {
            input.parse::<Token![const]>()?;
            return Ok(Self::Const);
        }
        let ident: Ident = input.parse()?;
        if ident == "inline" {
            Ok(Self::Inline)
        } else {
            Err(syn::Error::new(ident.span(), "expected `const` or `inline`"))
        }
    }
}

pub struct QualifyInput {
    pub qualifier: Qualifier,
    pub items: Vec<ItemFn>,
}

impl Parse for QualifyInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let qualifier = input.parse()?;
        let mut items = Vec::new();
        while !input.is_empty() {
            items.push(input.parse()?);
        }
        Ok(Self { qualifier, items })
    }
}

pub fn expand(input: QualifyInput) -> TokenStream {
    let mut output = TokenStream::new();
    for mut item in input.items {
        match apply(input.qualifier, &mut item) {
            Ok(()) => item.to_tokens(&mut output),
            Err(err) => output.extend(err.to_compile_error()),
        }
    }
    output
}

fn apply(qualifier: Qualifier, item: &mut ItemFn) -> syn::Result<()> {
    match qualifier {
        Qualifier::Const => {
            if let Some(asyncness) = &item.sig.asyncness {
                return Err(syn::Error::new_spanned(asyncness, "`const_fn!` cannot qualify an async fn"));
            }
            item.sig.constness.get_or_insert_with(Default::default);
        }
        Qualifier::Inline => {
            item.sig.constness = None;
            if !item.attrs.iter().any(|attr| attr.path().is_ident("inline")) {
                item.attrs.push(parse_quote!(#[inline]));
            }
        }
    }
    Ok(())
}
