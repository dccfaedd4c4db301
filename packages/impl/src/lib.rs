mod fields;
mod optional;

use optional_lib::{FieldsArgs, OptionalInput};
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Builds an `Optional` from an expression, or an empty one when given
/// nothing.
///
/// ```ignore
/// let a = optional!(1);
/// let b: Optional<i32> = optional!();
/// ```
#[proc_macro]
pub fn optional(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as OptionalInput);
    optional::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Turns every field of a struct into an `Optional` of its type, or into
/// the given wrapper, e.g. `#[fields(Option)]`.
#[proc_macro_attribute]
pub fn fields(attr: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as FieldsArgs);
    let input = parse_macro_input!(input as DeriveInput);
    fields::expand(input, args)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
