use syn::{parse_quote, Data, DeriveInput, Path, Result, Type};

/// Rewrites every field type `T` of a struct into `Wrapper<T>`.
pub struct WrapFields {
    wrapper: Path,
}

impl WrapFields {
    pub fn new(wrapper: Path) -> Self {
        Self { wrapper }
    }

    pub fn wrapper(&self) -> &Path {
        &self.wrapper
    }

    pub fn apply(&self, data: &mut DeriveInput) -> Result<()> {
        let wrapper = &self.wrapper;
        match &mut data.data {
            Data::Struct(data) => {
                for field in data.fields.iter_mut() {
                    if !self.is_wrapped(&field.ty) {
                        let inner = &field.ty;
                        field.ty = parse_quote!(#wrapper<#inner>);
                    }
                }
                Ok(())
            }
            _ => Err(syn::Error::new_spanned(
                &data,
                "only struct is supported",
            )),
        }
    }

    // A bare name matches the wrapper's last segment, so an imported
    // `Optional<T>` counts. Qualified paths must name the wrapper in full.
    fn is_wrapped(&self, ty: &Type) -> bool {
        let path = match ty {
            Type::Path(ty) if ty.qself.is_none() => &ty.path,
            _ => return false,
        };
        if path.leading_colon.is_none() && path.segments.len() == 1 {
            let name = &path.segments[0].ident;
            return self.wrapper.segments.last().map(|t| &t.ident) == Some(name);
        }
        path.segments.len() == self.wrapper.segments.len()
            && path
                .segments
                .iter()
                .zip(&self.wrapper.segments)
                .all(|(a, b)| a.ident == b.ident)
    }
}
