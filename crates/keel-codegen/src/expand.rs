mod entity;
mod primitive;
mod util;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    model: &'a Model,

    /// Path prefix for keel types
    keel: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let entity_impl = self.expand_entity_impl();
        let primitive_impl = self.expand_primitive_impl();

        wrap_in_const(quote! {
            #entity_impl
            #primitive_impl
        })
    }
}

pub(super) fn entity(model: &Model) -> TokenStream {
    Expand {
        model,
        keel: quote!(_keel::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use keel as _keel;
            #code
        };
    }
}
