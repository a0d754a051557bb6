use std::error::Error;

/// Failure reported by a test invocation step.
pub type Failure = Box<dyn Error + Send + Sync + 'static>;

/// One deferred "run the rest of this test" step.
pub type Statement = Box<dyn FnOnce() -> Result<(), Failure> + Send + 'static>;

/// Return types accepted from a test body.
pub trait IntoStepResult {
	/// Converts the body's return value into a step result.
	fn into_step_result(self) -> Result<(), Failure>;
}

impl IntoStepResult for () {
	fn into_step_result(self) -> Result<(), Failure> {
		Ok(())
	}
}

impl<E> IntoStepResult for Result<(), E>
where
	E: Into<Failure>,
{
	fn into_step_result(self) -> Result<(), Failure> {
		self.map_err(Into::into)
	}
}
