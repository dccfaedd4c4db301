use optional_lib::FieldsArgs;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

pub fn expand(mut data: DeriveInput, args: FieldsArgs) -> Result<TokenStream> {
    let custom = args.is_custom();
    let wrap = args.into_wrap_fields();
    wrap.apply(&mut data)?;

    if !custom {
        return Ok(quote!(#data));
    }
    let wrapper = wrap.wrapper();
    Ok(quote!(
        const _: () = {
            ::optional::private::assert_wrapper::<
                #wrapper::<::optional::private::Slot>,
            >();
        };
        #data
    ))
}
