//! Dedicated background worker with synchronous outcome relay.
//!
//! This crate owns one process-wide worker thread. Callers hand it a closure
//! and block until the closure has finished on that thread:
//! * [`run_in_background`] / [`call_in_background`]: re-raise a panic from the
//!   work on the caller with its original payload
//! * [`try_run_in_background`] / [`try_call_in_background`]: report every
//!   failure as a [`BackgroundError`]
//! * [`interrupt`]: per-thread interrupt flag that wakes a blocked caller
//!
//! The worker is created lazily on first use and lives for the rest of the
//! process. Submissions are serviced one at a time in FIFO order.

pub mod error;
mod executor;
pub mod interrupt;
mod latch;
mod outcome;
mod panic;
#[cfg(test)]
mod panic_tests;
mod spec;

pub use error::{BackgroundError, Result};
pub use executor::{BackgroundExecutor, call_in_background, is_background_thread, run_in_background, try_call_in_background, try_run_in_background};
pub use outcome::Outcome;
pub use panic::PanicPayload;
pub use spec::{DEFAULT_THREAD_NAME, WorkerSpec};
