//! Marker-driven routing of test invocations onto the background worker.
//!
//! A test carrying [`Marker::Background`] has its whole body evaluated on the
//! `offmain-worker` thread. Unmarked tests run directly and unchanged. The
//! `#[background_test]` attribute attaches the marker at authoring time:
//!
//! ```ignore
//! #[offmain_rule::background_test]
//! fn refuses_main_thread() {
//!     assert!(offmain_worker::is_background_thread());
//! }
//! ```

pub mod marker;
mod rule;
mod statement;

pub use marker::{Marker, TestDescription, TestMetadata};
pub use offmain_macros::background_test;
pub use rule::{BackgroundTestRule, Invocation, run_test};
pub use statement::{Failure, IntoStepResult, Statement};
