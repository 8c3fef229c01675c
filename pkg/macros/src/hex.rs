use proc_macro::TokenStream;
use proc_macro2::Span;
use syn::{parse_macro_input, LitStr};

pub fn hex(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);

    match decode_literal(&lit.value(), lit.span()) {
        Ok(data) => TokenStream::from(quote! {
            [#( #data, )*]
        }),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

/// Decodes the contents of a hex!() literal.
///
/// Unlike the runtime decoder, an odd number of digits is an error here as the
/// last digit would otherwise be silently lost.
fn decode_literal(value: &str, span: Span) -> syn::Result<Vec<u8>> {
    let mut text = value.to_string();
    text.retain(|c| !c.is_whitespace());

    if text.chars().count() % 2 != 0 {
        return Err(syn::Error::new(
            span,
            format!(
                "hex literal has an odd number of digits ({})",
                text.chars().count()
            ),
        ));
    }

    base_radix::hex_decode_strict(&text).map_err(|e| syn::Error::new(span, e.to_string()))
}
