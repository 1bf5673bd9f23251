// SPDX-License-Identifier: MIT

//!
//! *Part of the wider OpenKeyframe project*
//!
//! This crate contains the OpenKeyframe procedural macros
//!

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{LitInt, Token, parse_macro_input};

// TODO: these are copied from the core crate's time module (so are not synced)
const MIN_TIME: i64 = -16_777_216;
const MAX_TIME: i64 = 16_777_216;

/// An integer literal with an optional leading minus sign
struct SignedLitInt {
    negative: bool,
    lit: LitInt,
}

impl Parse for SignedLitInt {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let negative = input.parse::<Option<Token![-]>>()?.is_some();
        let lit = input.parse()?;
        Ok(SignedLitInt { negative, lit })
    }
}

/// Generate the type with compile time bounds checking
fn generate_const_checked_integer_macro(
    input: TokenStream,
    type_name: &str,
    min: i64,
    max: i64,
) -> TokenStream {
    let SignedLitInt { negative, lit } = parse_macro_input!(input as SignedLitInt);

    let value = match lit.base10_parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) => {
            return syn::Error::new_spanned(lit, "Expected a valid i64 integer literal")
                .to_compile_error()
                .into();
        }
    };

    if value < min || value > max {
        return syn::Error::new_spanned(
            lit,
            format!("{type_name} must be between {min} and {max}"),
        )
        .to_compile_error()
        .into();
    }

    let ident = syn::Ident::new(type_name, proc_macro2::Span::call_site());
    quote! {
        #ident::try_from(#value).unwrap()
    }
    .into()
}

/// Create a `Time`, using `time!(x)` or `time!(-x)`, with compile time checking
/// of the frame number.  `Time` must be in scope.
#[proc_macro]
pub fn time(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "Time", MIN_TIME, MAX_TIME)
}
