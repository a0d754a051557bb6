use std::fmt;

use offmain_worker::{BackgroundError, try_call_in_background};

use crate::{Failure, IntoStepResult, Marker, Statement, TestDescription, TestMetadata};

/// Routes a test body onto the background worker when the test is marked
/// with [`Marker::Background`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BackgroundTestRule;

impl BackgroundTestRule {
	/// Wraps `body` according to the markers in `metadata`.
	///
	/// Without the marker the body is returned untouched as
	/// [`Invocation::Direct`].
	pub fn apply<M>(&self, body: Statement, metadata: &M) -> Invocation
	where
		M: TestMetadata + ?Sized,
	{
		if metadata.has_marker(Marker::Background) {
			tracing::trace!("rule.delegate_background");
			Invocation::Background(body)
		} else {
			Invocation::Direct(body)
		}
	}
}

/// A test body after routing.
pub enum Invocation {
	/// Evaluated on the calling thread.
	Direct(Statement),
	/// Evaluated on the background worker.
	Background(Statement),
}

impl Invocation {
	pub fn is_background(&self) -> bool {
		matches!(self, Self::Background(_))
	}

	/// Returns the raw body without its routing.
	pub fn into_body(self) -> Statement {
		match self {
			Self::Direct(body) | Self::Background(body) => body,
		}
	}

	/// Converts into a step that keeps the routing when called.
	///
	/// A direct invocation yields the body itself. A background invocation
	/// yields a step that evaluates the body on the worker.
	pub fn into_statement(self) -> Statement {
		match self {
			Self::Direct(body) => body,
			background @ Self::Background(_) => Box::new(move || background.evaluate()),
		}
	}

	/// Evaluates the body, blocking until it finishes.
	///
	/// An `Err` from the body is returned as is. A panic in the body is
	/// re-raised on this thread with its original payload. Worker failures
	/// are returned as a boxed [`BackgroundError`].
	pub fn evaluate(self) -> Result<(), Failure> {
		match self {
			Self::Direct(body) => body(),
			Self::Background(body) => {
				let relayed = try_call_in_background(body);
				tracing::trace!(ok = relayed.as_ref().is_ok_and(Result::is_ok), "rule.outcome_relayed");
				match relayed {
					Ok(result) => result,
					Err(BackgroundError::Panicked(payload)) => payload.resume(),
					Err(err) => Err(err.into()),
				}
			}
		}
	}
}

impl fmt::Debug for Invocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Direct(_) => f.write_str("Invocation::Direct"),
			Self::Background(_) => f.write_str("Invocation::Background"),
		}
	}
}

/// Applies [`BackgroundTestRule`] to `body` and evaluates it.
pub fn run_test<F, R>(description: &TestDescription, body: F) -> Result<(), Failure>
where
	F: FnOnce() -> R + Send + 'static,
	R: IntoStepResult,
{
	tracing::trace!(test = description.name(), "rule.run_test");
	BackgroundTestRule.apply(Box::new(move || body().into_step_result()), description).evaluate()
}
