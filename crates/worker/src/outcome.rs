use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::{BackgroundError, PanicPayload, Result};

/// Captured result of running one unit of work.
#[derive(Debug)]
pub enum Outcome<T> {
	/// The work returned normally.
	Completed(T),
	/// The work panicked.
	Panicked(PanicPayload),
}

impl<T> Outcome<T> {
	/// Runs `work` on the current thread and captures how it finished.
	pub fn capture<F>(work: F) -> Self
	where
		F: FnOnce() -> T,
	{
		match catch_unwind(AssertUnwindSafe(work)) {
			Ok(value) => Self::Completed(value),
			Err(payload) => Self::Panicked(PanicPayload::new(payload)),
		}
	}

	/// Returns true when the work panicked.
	pub fn is_panicked(&self) -> bool {
		matches!(self, Self::Panicked(_))
	}

	/// Converts into a result, wrapping a panic as [`BackgroundError::Panicked`].
	pub fn into_result(self) -> Result<T> {
		match self {
			Self::Completed(value) => Ok(value),
			Self::Panicked(payload) => Err(BackgroundError::Panicked(payload)),
		}
	}

	/// Returns the value, re-raising a captured panic with its original payload.
	pub fn unwrap_or_resume(self) -> T {
		match self {
			Self::Completed(value) => value,
			Self::Panicked(payload) => payload.resume(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn captures_return_value() {
		let outcome = Outcome::capture(|| 5);
		assert!(!outcome.is_panicked());
		assert_eq!(outcome.into_result().ok(), Some(5));
	}

	#[test]
	fn captures_panic_as_wrapped_error() {
		let outcome: Outcome<()> = Outcome::capture(|| panic!("boom"));
		assert!(outcome.is_panicked());
		let err = outcome.into_result().expect_err("panic should become an error");
		assert_eq!(err.panic_payload().and_then(PanicPayload::message), Some("boom"));
	}

	#[test]
	#[should_panic(expected = "boom")]
	fn unwrap_or_resume_reraises() {
		let outcome: Outcome<()> = Outcome::capture(|| panic!("boom"));
		outcome.unwrap_or_resume();
	}
}
