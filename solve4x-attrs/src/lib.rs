mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `solve4x-error` for the given struct.
///
/// The report produced for the error is described with the `error` attribute:
///
/// ```ignore
/// use solve4x_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "unexpected end of input",
///     labels = ["add something here"],
///     help = "expressions cannot end with an operator",
/// )]
/// pub struct UnexpectedEof;
/// ```
///
/// | Tag       | Description                                                                 |
/// | --------- | --------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the report.                             |
/// | `labels`  | An iterable of labels; the `n`th label is attached to the `n`th error span. |
/// | `help`    | Optional help text describing what the user can do to fix the error.        |
///
/// Each tag accepts an expression. For structs with named fields, the expression is evaluated
/// with the fields of the struct in scope. Tuple structs are rejected.
///
/// The generated code refers to the `ariadne` and `solve4x_error` crates by name, so both must be
/// dependencies of the crate using the derive.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl solve4x_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
