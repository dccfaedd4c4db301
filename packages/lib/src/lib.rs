mod input;
mod wrap;

pub use input::{FieldsArgs, OptionalInput};
pub use wrap::WrapFields;

use syn::{parse_quote, Path};

/// The wrapper used when `#[fields]` is given no argument.
pub fn default_wrapper() -> Path {
    parse_quote!(::optional::Optional)
}
