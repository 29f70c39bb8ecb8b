use super::{ErrorSet, OrmAttr};

#[derive(Debug)]
pub(crate) struct Field {
    /// Declaration position inside the struct
    pub(crate) index: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// `None` when the field carries no `#[orm]` attribute
    pub(crate) attr: Option<OrmAttr>,

    /// Field type
    pub(crate) ty: syn::Type,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, index: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attr = None;

        for node in &field.attrs {
            if !node.path().is_ident("orm") {
                continue;
            }

            if attr.is_some() {
                errs.push(syn::Error::new_spanned(node, "duplicate #[orm] attribute"));
                continue;
            }

            match OrmAttr::from_ast(node) {
                Ok(parsed) => attr = Some(parsed),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            index,
            ident: ident.clone(),
            attr,
            ty: field.ty.clone(),
        })
    }

    /// Member name reported in the shape, without any `r#` prefix.
    pub(crate) fn name(&self) -> String {
        use syn::ext::IdentExt;
        self.ident.unraw().to_string()
    }

    pub(crate) fn is_declared(&self) -> bool {
        self.attr.is_some()
    }
}
