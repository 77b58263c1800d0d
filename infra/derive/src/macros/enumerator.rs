use fxhash::FxHashMap;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Ident, Lit, LitStr, Path, UnOp};

struct VariantMeta<'a> {
    ident: &'a Ident,
    code: i32,
    name: String,
    span: Span,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "Enumerator can only be derived for enums"));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Enumerator families cannot be generic",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(name, "Enumerator family must declare a variant"));
    }

    let krate = registry_path(input)?;
    let variants: Vec<VariantMeta<'_>> =
        data.variants.iter().map(parse_variant).collect::<syn::Result<_>>()?;
    check_unique(&variants)?;

    let idents: Vec<&Ident> = variants.iter().map(|v| v.ident).collect();
    let codes = variants.iter().map(|v| v.code);
    let names = variants.iter().map(|v| v.name.as_str());

    Ok(quote! {
        #[automatically_derived]
        impl #krate::Enumerator for #name {
            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            #[inline]
            fn code(&self) -> i32 {
                match self { #(Self::#idents => #codes,)* }
            }

            #[inline]
            fn name(&self) -> &'static str {
                match self { #(Self::#idents => #names,)* }
            }

            fn registry() -> &'static #krate::Registry<Self> {
                static REGISTRY: ::std::sync::LazyLock<#krate::Registry<#name>> =
                    ::std::sync::LazyLock::new(|| {
                        #krate::Registry::build(<#name as #krate::Enumerator>::VARIANTS)
                    });
                &REGISTRY
            }
        }

        #[automatically_derived]
        impl ::core::cmp::PartialEq for #name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                #krate::Enumerator::code(self) == #krate::Enumerator::code(other)
            }
        }

        #[automatically_derived]
        impl ::core::cmp::Eq for #name {}

        #[automatically_derived]
        impl ::core::hash::Hash for #name {
            #[inline]
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&#krate::Enumerator::code(self), state);
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#krate::Enumerator::name(self))
            }
        }

        #[automatically_derived]
        impl ::core::convert::TryFrom<i32> for #name {
            type Error = #krate::RegistryError;

            #[inline]
            fn try_from(code: i32) -> ::core::result::Result<Self, Self::Error> {
                <Self as #krate::Enumerator>::registry().try_from_code(code)
            }
        }

        #[automatically_derived]
        impl ::core::str::FromStr for #name {
            type Err = #krate::RegistryError;

            #[inline]
            fn from_str(name: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as #krate::Enumerator>::registry().try_from_name(name)
            }
        }
    })
}

fn registry_path(input: &DeriveInput) -> syn::Result<Path> {
    let mut path: Path = syn::parse_quote!(::smenum_registry);

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("enumerator")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                path = meta.value()?.parse()?;
                Ok(())
            } else {
                Err(meta.error("expected `crate = path`"))
            }
        })?;
    }

    Ok(path)
}

fn parse_variant(v: &syn::Variant) -> syn::Result<VariantMeta<'_>> {
    if !matches!(v.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            &v.fields,
            "Enumerator variants must be unit variants",
        ));
    }
    if let Some((_, discriminant)) = &v.discriminant {
        return Err(syn::Error::new_spanned(
            discriminant,
            "use #[enumerator(code = ..)] instead of an explicit discriminant",
        ));
    }

    let mut code = None;
    let mut name = None;

    for attr in v.attrs.iter().filter(|attr| attr.path().is_ident("enumerator")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("code") {
                let expr: Expr = meta.value()?.parse()?;
                code = Some(parse_code(&expr)?);
                Ok(())
            } else if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("expected `code = <int>` or `name = \"...\"`"))
            }
        })?;
    }

    let Some(code) = code else {
        return Err(syn::Error::new_spanned(
            &v.ident,
            "missing #[enumerator(code = ..)] on Enumerator variant",
        ));
    };
    let name = name.unwrap_or_else(|| v.ident.to_string());
    if name.is_empty() {
        return Err(syn::Error::new_spanned(&v.ident, "Enumerator display name cannot be empty"));
    }

    Ok(VariantMeta { ident: &v.ident, code, name, span: v.ident.span() })
}

fn parse_code(expr: &Expr) -> syn::Result<i32> {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) => lit.base10_parse(),
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr: inner, .. }) => match inner.as_ref() {
            Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) => {
                let magnitude: i64 = lit.base10_parse()?;
                i32::try_from(-magnitude)
                    .map_err(|_| syn::Error::new_spanned(expr, "code does not fit in i32"))
            },
            _ => Err(syn::Error::new_spanned(expr, "code must be an integer literal")),
        },
        _ => Err(syn::Error::new_spanned(expr, "code must be an integer literal")),
    }
}

fn check_unique(variants: &[VariantMeta<'_>]) -> syn::Result<()> {
    let mut codes: FxHashMap<i32, &Ident> = FxHashMap::default();
    let mut names: FxHashMap<&str, &Ident> = FxHashMap::default();

    for v in variants {
        if let Some(first) = codes.insert(v.code, v.ident) {
            return Err(syn::Error::new(
                v.span,
                format!("duplicate Enumerator code {} (already used by `{first}`)", v.code),
            ));
        }
        if let Some(first) = names.insert(v.name.as_str(), v.ident) {
            return Err(syn::Error::new(
                v.span,
                format!("duplicate Enumerator name \"{}\" (already used by `{first}`)", v.name),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expanded(input: DeriveInput) -> String {
        expand_derive(input).to_string()
    }

    #[test]
    fn expands_family_with_default_and_custom_names() {
        let out = expanded(parse_quote! {
            enum Tier {
                #[enumerator(code = 1)]
                Bronze,
                #[enumerator(code = -2, name = "Silver+")]
                Silver,
            }
        });

        assert!(!out.contains("compile_error"), "{out}");
        assert!(out.contains("\"Bronze\""));
        assert!(out.contains("\"Silver+\""));
        assert!(out.contains(":: smenum_registry :: Enumerator for Tier"));
    }

    #[test]
    fn honours_crate_override() {
        let out = expanded(parse_quote! {
            #[enumerator(crate = ::smenum::registry)]
            enum Tier {
                #[enumerator(code = 1)]
                Bronze,
            }
        });

        assert!(out.contains(":: smenum :: registry :: Enumerator for Tier"), "{out}");
    }

    #[test]
    fn rejects_duplicate_codes() {
        let out = expanded(parse_quote! {
            enum Tier {
                #[enumerator(code = 1)]
                Bronze,
                #[enumerator(code = 1)]
                Silver,
            }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("duplicate Enumerator code 1"), "{out}");
    }

    #[test]
    fn rejects_duplicate_names() {
        let out = expanded(parse_quote! {
            enum Tier {
                #[enumerator(code = 1, name = "Gold")]
                Bronze,
                #[enumerator(code = 2)]
                Gold,
            }
        });

        assert!(out.contains("duplicate Enumerator name"), "{out}");
    }

    #[test]
    fn rejects_missing_code() {
        let out = expanded(parse_quote! {
            enum Tier {
                Bronze,
            }
        });

        assert!(out.contains("missing #[enumerator(code = ..)]"), "{out}");
    }

    #[test]
    fn rejects_non_unit_variants_and_structs() {
        let out = expanded(parse_quote! {
            enum Tier {
                #[enumerator(code = 1)]
                Bronze(u8),
            }
        });
        assert!(out.contains("unit variants"), "{out}");

        let out = expanded(parse_quote! {
            struct Tier;
        });
        assert!(out.contains("only be derived for enums"), "{out}");
    }

    #[test]
    fn rejects_empty_and_generic_families() {
        let out = expanded(parse_quote! {
            enum Tier {}
        });
        assert!(out.contains("must declare a variant"), "{out}");

        let out = expanded(parse_quote! {
            enum Tier<T> {
                #[enumerator(code = 1)]
                Bronze,
            }
        });
        assert!(out.contains("cannot be generic"), "{out}");
    }

    #[test]
    fn parses_code_literals() {
        assert_eq!(parse_code(&parse_quote!(42)).ok(), Some(42));
        assert_eq!(parse_code(&parse_quote!(-7)).ok(), Some(-7));
        assert!(parse_code(&parse_quote!(1 + 1)).is_err());
        assert!(parse_code(&parse_quote!(4_294_967_296)).is_err());
    }
}
