use crate::{default_wrapper, WrapFields};
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Expr, Path, Result,
};

/// Input of `optional!`: an expression for a present value, nothing for an
/// empty one. Prints as the matching constructor call.
pub struct OptionalInput {
    value: Option<Expr>,
}

impl OptionalInput {
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

impl Parse for OptionalInput {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            value: parse_if_any(input)?,
        })
    }
}

impl ToTokens for OptionalInput {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match &self.value {
            Some(value) => quote!(::optional::Optional::of(#value)),
            None => quote!(::optional::Optional::empty()),
        })
    }
}

/// Arguments of `#[fields]`: the wrapper path, if one was given.
pub struct FieldsArgs {
    wrapper: Option<Path>,
}

impl FieldsArgs {
    pub fn is_custom(&self) -> bool {
        self.wrapper.is_some()
    }

    pub fn into_wrap_fields(self) -> WrapFields {
        WrapFields::new(self.wrapper.unwrap_or_else(default_wrapper))
    }
}

impl Parse for FieldsArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            wrapper: parse_if_any(input)?,
        })
    }
}

fn parse_if_any<T: Parse>(input: ParseStream) -> Result<Option<T>> {
    if input.is_empty() {
        Ok(None)
    } else {
        input.parse().map(Some)
    }
}
