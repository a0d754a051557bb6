//! Procedural macros for offmain test routing.
//!
//! Provides attribute macros:
//! * `#[background_test]` - declares a test whose body runs on the background worker

use proc_macro::TokenStream;


/// Declares a test that runs on the background worker thread.
///
/// The annotated function becomes a `#[test]` whose body is routed through
/// `offmain_rule::run_test` with `Marker::Background` attached. A body
/// returning `Result<(), E>` produces a test returning
/// `Result<(), offmain_rule::Failure>`.
///
/// ```ignore
/// #[background_test]
/// fn loads_off_main_thread() -> Result<(), std::io::Error> {
///     assert!(offmain_worker::is_background_thread());
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn background_test(attr: TokenStream, item: TokenStream) -> TokenStream {
	background_test::background_test(attr, item)
}
