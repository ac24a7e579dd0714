//! Proc macros for accessibility snapshot tests.
//!
//! Provides the `#[a11y_test]` attribute macro for snapshot
//! verification tests.
//!
//! # Example
//!
//! ```ignore
//! use a11ysnap_test_macros::a11y_test;
//!
//! #[a11y_test]
//! fn test_button_accessibility() {
//!     let mut case = button_test_case("test_button_accessibility");
//!     assert_accessibility_snapshot!(case, button());
//! }
//!
//! #[a11y_test(record)]
//! fn test_new_screen() {
//!     // Missing references are recorded instead of failing
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Ident, ItemFn, Token,
};

/// Parsed attributes for `#[a11y_test]`.
#[derive(Default)]
struct A11yTestAttrs {
    should_panic: bool,
    ignore: bool,
    record: bool,
}

impl Parse for A11yTestAttrs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs = Self::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            let ident_str = ident.to_string();

            match ident_str.as_str() {
                "should_panic" => {
                    attrs.should_panic = true;
                }
                "ignore" => {
                    attrs.ignore = true;
                }
                "record" => {
                    attrs.record = true;
                }
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {ident_str}"),
                    ));
                }
            }

            // Consume optional comma
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(attrs)
    }
}

/// Test attribute for accessibility snapshot tests.
///
/// # Attributes
///
/// - `should_panic` - Expect the test to panic
/// - `ignore` - Skip this test by default
/// - `record` - Run the test in record mode: missing references are
///   recorded instead of failing the test
///
/// # Example
///
/// ```ignore
/// #[a11y_test]
/// fn test_settings_screen() {
///     // Test code
/// }
///
/// #[a11y_test(record)]
/// fn test_new_widget() {
///     // References recorded on first run
/// }
/// ```
#[proc_macro_attribute]
pub fn a11y_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let attrs = parse_macro_input!(attr as A11yTestAttrs);

    let expanded = impl_a11y_test(&input, &attrs);
    TokenStream::from(expanded)
}

fn impl_a11y_test(input: &ItemFn, attrs: &A11yTestAttrs) -> TokenStream2 {
    let fn_body = &input.block;
    let fn_attrs = &input.attrs;
    let fn_vis = &input.vis;
    let fn_sig = &input.sig;

    let test_attr = if attrs.should_panic {
        quote! { #[test] #[should_panic] }
    } else {
        quote! { #[test] }
    };

    let ignore_attr = if attrs.ignore {
        quote! { #[ignore] }
    } else {
        quote! {}
    };

    // Record mode is scoped to the test body, so parallel tests
    // without the attribute are unaffected.
    let body = if attrs.record {
        quote! {
            ::a11ysnap_test::with_record_mode(|| #fn_body)
        }
    } else {
        quote! { #fn_body }
    };

    quote! {
        #(#fn_attrs)*
        #test_attr
        #ignore_attr
        #fn_vis #fn_sig {
            #body
        }
    }
}
