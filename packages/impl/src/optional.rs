use optional_lib::OptionalInput;
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::Result;

pub fn expand(input: OptionalInput) -> Result<TokenStream> {
    Ok(input.into_token_stream())
}
