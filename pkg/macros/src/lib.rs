extern crate proc_macro;
extern crate syn;
#[macro_use]
extern crate quote;

mod hex;

use proc_macro::TokenStream;

/// Converts a string literal of hex digits into a '[u8; N]' at compile time.
///
/// Whitespace anywhere in the literal is ignored, so long constants can be
/// split up:
///
/// ```
/// let key = macros::hex!("0011 2233 4455");
/// assert_eq!(key, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
/// ```
#[proc_macro]
pub fn hex(input: TokenStream) -> TokenStream {
    hex::hex(input)
}
