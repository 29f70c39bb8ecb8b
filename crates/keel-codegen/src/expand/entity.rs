use super::{util, Expand};
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let keel = &self.keel;
        let ident = &self.model.ident;
        let name = self.model.name();
        let local = util::ident("local");
        let data = util::ident("data");

        let members = self.model.fields.iter().map(|field| self.expand_member(field));

        let dump_fields = self.model.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let ty = &field.ty;

            if field.is_declared() {
                quote!(<#ty as #keel::Primitive>::dump(&self.#field_ident, #local)?)
            } else {
                quote!(#keel::Option::None)
            }
        });

        let load_fields = self.model.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let ty = &field.ty;

            if field.is_declared() {
                quote! {
                    #field_ident: <#ty as #keel::Primitive>::load(
                        #local,
                        #keel::Iterator::next(&mut #data).flatten(),
                    )?
                }
            } else {
                quote! {
                    #field_ident: {
                        let _ = #keel::Iterator::next(&mut #data);
                        #keel::Default::default()
                    }
                }
            }
        });

        quote! {
            impl #keel::Entity for #ident {
                fn shape() -> #keel::Shape {
                    #keel::Shape {
                        name: #name,
                        namespace: ::core::module_path!(),
                        members: #keel::vec![ #( #members, )* ],
                    }
                }

                fn dump(
                    &self,
                    #local: &#keel::Local,
                ) -> #keel::Result<#keel::Vec<#keel::Option<#keel::Datum>>> {
                    #keel::Result::Ok(#keel::vec![ #( #dump_fields, )* ])
                }

                fn load(
                    #local: &#keel::Local,
                    #data: #keel::Vec<#keel::Option<#keel::Datum>>,
                ) -> #keel::Result<Self> {
                    let mut #data = #keel::IntoIterator::into_iter(#data);
                    #keel::Result::Ok(Self {
                        #( #load_fields, )*
                    })
                }
            }
        }
    }

    fn expand_member(&self, field: &Field) -> TokenStream {
        let keel = &self.keel;
        let index = field.index;
        let name = field.name();
        let ty = &field.ty;

        let (spec, view, constraint) = match &field.attr {
            Some(attr) => {
                let spec = attr.spec.clone().unwrap_or_else(|| {
                    syn::LitStr::new("", field.ident.span())
                });
                (
                    util::opt_str(keel, Some(&spec)),
                    util::opt_str(keel, attr.view.as_ref()),
                    util::opt_str(keel, attr.constraint.as_ref()),
                )
            }
            None => (
                util::opt_str(keel, None),
                util::opt_str(keel, None),
                util::opt_str(keel, None),
            ),
        };

        // Undeclared members still describe their type so that the shape
        // mirrors the struct, but the type is never consulted.
        let (member_ty, member_shape) = if field.is_declared() {
            (
                quote!(<#ty as #keel::Primitive>::ty),
                quote!(<#ty as #keel::Primitive>::shape),
            )
        } else {
            (quote!(#keel::undeclared_type), quote!(#keel::undeclared_shape))
        };

        quote! {
            #keel::Member {
                index: #index,
                ident: #name,
                spec: #spec,
                view: #view,
                constraint: #constraint,
                ty: #member_ty,
                shape: #member_shape,
            }
        }
    }
}
