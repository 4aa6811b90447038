//SPDX-License-Identifier: MIT OR Apache-2.0

//! # minlog procedural macros
//!
//! This crate provides the `#[logged]` attribute for the minlog logging library.  It is
//! re-exported as `minlog::logged`; depend on minlog rather than on this crate.
//!
//! The attribute records how a type's logger should be named by implementing `minlog::Logged`.
//! It does not add fields or change the type: the consumer keeps a `Logger` field of its own and
//! receives the logger from a `minlog::Binder`.

use proc_macro::TokenStream;

mod logged_attr;

/// Records the source-name policy of a struct, enum or union.
///
/// The bare form names the logger after the type, converted to lowercase words joined by
/// underscores.  The parameterized form uses the given name.
///
/// ```
/// use minlog::{Binder, Logger, logged};
///
/// #[logged]
/// struct HttpClient {
///     logger: Logger,
/// }
///
/// #[logged("svc")]
/// struct Service {
///     logger: Logger,
/// }
///
/// let client = Binder::for_logged::<HttpClient>().construct(|logger| HttpClient { logger });
/// assert_eq!(client.logger.source(), Some("http_client"));
///
/// let service = Binder::for_logged::<Service>().construct(|logger| Service { logger });
/// assert_eq!(service.logger.source(), Some("svc"));
/// ```
///
/// # Errors
///
/// Only a string literal is accepted as an argument:
/// ```compile_fail
/// #[minlog::logged(svc)]
/// struct Service;
/// ```
///
/// Generic types must implement `minlog::Logged` by hand:
/// ```compile_fail
/// #[minlog::logged]
/// struct Cache<T>(T);
/// ```
///
/// Functions can't be logged:
/// ```compile_fail
/// #[minlog::logged]
/// fn not_a_type() {}
/// ```
#[proc_macro_attribute]
pub fn logged(attr: TokenStream, item: TokenStream) -> TokenStream {
    logged_attr::logged_attr_impl(attr, item)
}
