//! Error types for background execution.

use thiserror::Error;

use crate::PanicPayload;

/// Failure of one background submission.
#[derive(Debug, Error)]
pub enum BackgroundError {
	/// The work panicked on the worker thread. The original payload is kept.
	#[error("background work panicked: {0}")]
	Panicked(PanicPayload),

	/// The worker thread could not be started.
	#[error("background worker unavailable: {0}")]
	WorkerUnavailable(String),

	/// The worker queue or reply latch closed before an outcome was produced.
	#[error("background worker disconnected before producing an outcome")]
	Disconnected,

	/// The waiting caller was interrupted. Its interrupt flag stays set.
	#[error("interrupted while waiting for background work")]
	Interrupted,

	/// Work was submitted from the worker thread itself.
	#[error("cannot submit background work from the background worker thread")]
	Reentrant,
}

impl BackgroundError {
	/// Returns the captured panic payload when the work itself failed.
	pub fn panic_payload(&self) -> Option<&PanicPayload> {
		match self {
			Self::Panicked(payload) => Some(payload),
			_ => None,
		}
	}
}

/// Result type for background submissions.
pub type Result<T> = std::result::Result<T, BackgroundError>;
