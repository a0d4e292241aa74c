use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Type, Variant};

/// What the generator needs to know about one enum variant.
struct Shape<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    contextual: bool,
    cfg: Vec<Attribute>,
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "anum_error can only be applied to enums")
            .to_compile_error();
    };

    let mut shapes = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        match inspect(variant) {
            Ok(shape) => shapes.push(shape),
            Err(err) => return err.to_compile_error(),
        }
    }

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let derives = missing_derives(&input);
    let context_trait = context_trait(name, &ext, &shapes);
    let conversions = shapes.iter().filter_map(|s| source_conversion(name, &ext, s));
    let internal = internal_conversions(name, &shapes);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #(#conversions)*
        #internal

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn inspect(variant: &Variant) -> syn::Result<Shape<'_>> {
    let cfg = variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).cloned().collect();

    let fields = match &variant.fields {
        Fields::Unit => {
            return Ok(Shape { ident: &variant.ident, source: None, contextual: false, cfg });
        },
        Fields::Named(fields) => fields,
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                variant,
                "anum_error expects unit variants or variants with named fields",
            ));
        },
    };

    let mut contextual = false;
    let mut source = None;
    for field in &fields.named {
        let Some(ident) = &field.ident else { continue };
        if ident == "context" {
            if !is_cow_option(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "context field must be Option<Cow<'static, str>>",
                ));
            }
            contextual = true;
        } else if source.is_none()
            && (ident == "source" || has_attr(field, "source") || has_attr(field, "from"))
        {
            source = Some((ident, &field.ty));
        }
    }

    if source.is_some() && !contextual {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "anum_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        ));
    }

    Ok(Shape { ident: &variant.ident, source, contextual, cfg })
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let present = derived_names(input);
    let mut wanted = Vec::new();
    if !present.contains("Debug") {
        wanted.push(quote! { Debug });
    }
    if !present.contains("Error") {
        wanted.push(quote! { ::thiserror::Error });
    }
    if wanted.is_empty() { quote! {} } else { quote! { #[derive(#(#wanted),*)] } }
}

fn context_trait(name: &Ident, ext: &Ident, shapes: &[Shape<'_>]) -> TokenStream {
    let arms = shapes.iter().filter(|s| s.contextual).map(|s| {
        let cfg = &s.cfg;
        let ident = s.ident;
        quote! { #(#cfg)* #name::#ident { context: c, .. } => *c = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        #( #arms )*
                        _ => {}
                    }
                    e
                })
            }
        }
    }
}

fn source_conversion(name: &Ident, ext: &Ident, shape: &Shape<'_>) -> Option<TokenStream> {
    if shape.ident == "Internal" {
        return None;
    }
    let (field, ty) = shape.source?;
    let ident = shape.ident;
    let cfg = &shape.cfg;

    Some(quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg)*
        impl<T> #ext<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_conversions(name: &Ident, shapes: &[Shape<'_>]) -> TokenStream {
    let Some(internal) = shapes.iter().find(|s| s.ident == "Internal") else {
        return quote!();
    };
    let cfg = &internal.cfg;

    quote! {
        #(#cfg)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        #(#cfg)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

fn has_attr(field: &syn::Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn derived_names(input: &DeriveInput) -> FxHashSet<String> {
    let mut names = FxHashSet::default();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                names.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    names
}

/// Matches `Option<Cow<'static, str>>` by the last path segment of each layer.
fn is_cow_option(ty: &Type) -> bool {
    fn generic_args(ty: &Type, expected: &str) -> Option<Vec<syn::GenericArgument>> {
        let Type::Path(path) = ty else { return None };
        let segment = path.path.segments.last()?;
        if segment.ident != expected {
            return None;
        }
        let syn::PathArguments::AngleBracketed(args) = &segment.arguments else { return None };
        Some(args.args.iter().cloned().collect())
    }

    let Some(outer) = generic_args(ty, "Option") else { return false };
    let Some(syn::GenericArgument::Type(cow)) = outer.first() else { return false };
    let Some(inner) = generic_args(cow, "Cow") else { return false };

    match inner.as_slice() {
        [syn::GenericArgument::Lifetime(lt), syn::GenericArgument::Type(Type::Path(s))] => {
            lt.ident == "static" && s.path.segments.last().is_some_and(|seg| seg.ident == "str")
        },
        _ => false,
    }
}
