/// Parsed `#[orm(spec = "..", view = "..", constraint = "..")]`.
#[derive(Debug, Default)]
pub(crate) struct OrmAttr {
    pub(crate) spec: Option<syn::LitStr>,
    pub(crate) view: Option<syn::LitStr>,
    pub(crate) constraint: Option<syn::LitStr>,
}

impl OrmAttr {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<OrmAttr> {
        // `#[orm]` alone declares the member under its identifier
        if let syn::Meta::Path(_) = &attr.meta {
            return Ok(OrmAttr::default());
        }

        attr.parse_args()
    }
}

impl syn::parse::Parse for OrmAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = OrmAttr::default();

        // Allowed syntax, in any order:
        //
        // #[orm(spec = "name key auto")]
        // #[orm(view = "detail,lite")]
        // #[orm(constraint = "required,min=1")]
        loop {
            if input.is_empty() {
                break;
            }

            let lookahead = input.lookahead1();

            let slot = if lookahead.peek(kw::spec) {
                let _: kw::spec = input.parse()?;
                &mut result.spec
            } else if lookahead.peek(kw::view) {
                let _: kw::view = input.parse()?;
                &mut result.view
            } else if lookahead.peek(kw::constraint) {
                let _: kw::constraint = input.parse()?;
                &mut result.constraint
            } else {
                return Err(lookahead.error());
            };

            let _eq_token: syn::Token![=] = input.parse()?;
            let lit: syn::LitStr = input.parse()?;

            if slot.is_some() {
                return Err(syn::Error::new(lit.span(), "duplicate #[orm] argument"));
            }
            *slot = Some(lit);

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

mod kw {
    syn::custom_keyword!(spec);
    syn::custom_keyword!(view);
    syn::custom_keyword!(constraint);
}
