use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets the record appear as a member of another record.
    pub(super) fn expand_primitive_impl(&self) -> TokenStream {
        let keel = &self.keel;
        let ident = &self.model.ident;
        let local = util::ident("local");
        let datum = util::ident("datum");

        quote! {
            impl #keel::Primitive for #ident {
                fn ty() -> #keel::Result<#keel::Type> {
                    let shape = <Self as #keel::Entity>::shape();
                    #keel::Result::Ok(#keel::Type::structure(shape.name, shape.namespace))
                }

                fn shape() -> #keel::Option<#keel::Shape> {
                    #keel::Option::Some(<Self as #keel::Entity>::shape())
                }

                fn dump(
                    &self,
                    #local: &#keel::Local,
                ) -> #keel::Result<#keel::Option<#keel::Datum>> {
                    #local.dump_entity(self)
                }

                fn load(
                    #local: &#keel::Local,
                    #datum: #keel::Option<#keel::Datum>,
                ) -> #keel::Result<Self> {
                    #local.load_entity(#datum)
                }
            }
        }
    }
}
