use proc_macro2::TokenStream;
use quote::quote;

/// `Option::Some("..")` for a present literal, `Option::None` otherwise.
pub(crate) fn opt_str(keel: &TokenStream, lit: Option<&syn::LitStr>) -> TokenStream {
    match lit {
        Some(lit) => quote!(#keel::Option::Some(#lit)),
        None => quote!(#keel::Option::None),
    }
}

/// Creates a new identifier prefixed with `__keel_` so generated locals
/// never collide with user field names.
pub(crate) fn ident(name: &str) -> syn::Ident {
    quote::format_ident!("__keel_{name}")
}
