//! Derive macros for sqlb
//!
//! Provides the `#[derive(Record)]` macro.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod record;

/// Derive the `Record` trait for a struct.
///
/// # Example
///
/// ```ignore
/// use sqlb::Record;
///
/// #[derive(Record)]
/// struct NewUser {
///     username: String,
///     #[sqlb(column = "email_address")]
///     email: String,
///     active: bool,
/// }
/// ```
///
/// # Generated
///
/// An implementation of `sqlb::Record` returning one `(column, value)`
/// pair per field, in declaration order. Column names are the field
/// identifier converted to lower snake_case unless overridden.
///
/// # Attributes
///
/// - `#[sqlb(column = "name")]` - Map field to an explicit column name
#[proc_macro_derive(Record, attributes(sqlb))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
