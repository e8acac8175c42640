//! Procedural macros for configuration shapes.
//!
//! `#[derive(ZeroInit)]` builds a value whose nested containers are all
//! present but empty: every field is initialised through its own
//! `ZeroInit` implementation, so vectors and maps start empty and optional
//! sub-structures start as `Some` zero values. The derive also implements
//! `Default` by delegating to `zero_init`, which is what `#[serde(default)]`
//! uses to fill fields missing from a file.

#![warn(missing_docs, clippy::pedantic)]

use proc_macro::TokenStream;
use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, Generics, LitStr, Path, parse_macro_input,
    parse_quote,
};

/// Derives `ZeroInit` (and `Default`) for a struct.
///
/// Structs with named fields must also carry `#[serde(default)]`, so that
/// fields absent from the JSON document, including inside sequence
/// elements, fall back to their zero value instead of failing.
///
/// Supported attributes:
///
/// - `#[zero_init(default)]` on a field initialises it with
///   `Default::default()` instead of `ZeroInit::zero_init()`.
/// - `#[zero_init(no_default)]` on the struct skips the generated `Default`
///   impl, for shapes that provide their own.
/// - `#[zero_init(crate = "path")]` on the struct overrides the path to the
///   crate exporting the trait (defaults to `::jconfig`).
///
/// ```ignore
/// use jconfig::ZeroInit;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, ZeroInit)]
/// #[serde(default)]
/// struct Settings {
///     servers: Vec<String>,
///     #[zero_init(default)]
///     timeout: std::time::Duration,
/// }
/// ```
#[proc_macro_derive(ZeroInit, attributes(zero_init))]
pub fn derive_zero_init(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct ContainerAttrs {
    krate: Path,
    emit_default: bool,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ContainerAttrs {
        krate,
        emit_default,
    } = container_attrs(&input.attrs)?;
    let name = &input.ident;

    let body = match &input.data {
        Data::Struct(data) => {
            if matches!(data.fields, Fields::Named(_)) && !has_serde_default(&input.attrs) {
                return Err(syn::Error::new_spanned(
                    name,
                    "ZeroInit shapes with named fields need `#[serde(default)]` \
                     so missing fields fall back to their zero value",
                ));
            }
            init_fields(&data.fields, &krate)?
        }
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "ZeroInit cannot be derived for enums; implement it by hand",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "ZeroInit cannot be derived for unions",
            ));
        }
    };

    let generics = bound_type_params(&input.generics, &krate);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let default_impl = emit_default.then(|| {
        quote! {
            impl #impl_generics ::core::default::Default for #name #ty_generics #where_clause {
                fn default() -> Self {
                    <Self as #krate::ZeroInit>::zero_init()
                }
            }
        }
    });

    Ok(quote! {
        impl #impl_generics #krate::ZeroInit for #name #ty_generics #where_clause {
            fn zero_init() -> Self {
                #body
            }
        }

        #default_impl
    })
}

fn init_fields(fields: &Fields, krate: &Path) -> syn::Result<TokenStream2> {
    match fields {
        Fields::Named(named) => {
            let inits = named
                .named
                .iter()
                .map(|field| {
                    let ident = &field.ident;
                    let value = field_init(field, krate)?;
                    Ok(quote!(#ident: #value))
                })
                .collect::<syn::Result<Vec<_>>>()?;
            Ok(quote!(Self { #(#inits),* }))
        }
        Fields::Unnamed(unnamed) => {
            let values = unnamed
                .unnamed
                .iter()
                .map(|field| field_init(field, krate))
                .collect::<syn::Result<Vec<_>>>()?;
            Ok(quote!(Self( #(#values),* )))
        }
        Fields::Unit => Ok(quote!(Self)),
    }
}

fn field_init(field: &Field, krate: &Path) -> syn::Result<TokenStream2> {
    let mut use_default = false;
    for attr in zero_init_attrs(&field.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                use_default = true;
                Ok(())
            } else {
                Err(meta.error("unsupported zero_init field attribute"))
            }
        })?;
    }

    if use_default {
        Ok(quote!(::core::default::Default::default()))
    } else {
        Ok(quote!(#krate::ZeroInit::zero_init()))
    }
}

fn container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut parsed = ContainerAttrs {
        krate: parse_quote!(::jconfig),
        emit_default: true,
    };
    for attr in zero_init_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                parsed.krate = lit.parse()?;
                Ok(())
            } else if meta.path.is_ident("no_default") {
                parsed.emit_default = false;
                Ok(())
            } else {
                Err(meta.error("unsupported zero_init container attribute"))
            }
        })?;
    }
    Ok(parsed)
}

// `default` and `default = "path"` both make serde fill missing fields.
fn has_serde_default(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .filter_map(|attr| attr.meta.require_list().ok())
        .any(|list| {
            list.tokens
                .clone()
                .into_iter()
                .any(|token| matches!(token, TokenTree::Ident(ident) if ident == "default"))
        })
}

fn zero_init_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("zero_init"))
}

// Every type parameter must itself be zero-initialisable.
fn bound_type_params(generics: &Generics, krate: &Path) -> Generics {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(#krate::ZeroInit));
    }
    generics
}
