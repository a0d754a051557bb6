/// Default name of the background worker thread.
pub const DEFAULT_THREAD_NAME: &str = "offmain-background";

/// Configuration for the background worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerSpec {
	pub(crate) thread_name: String,
	pub(crate) stack_size: Option<usize>,
}

impl WorkerSpec {
	/// Sets the worker thread name.
	///
	/// # Panics
	///
	/// Panics if `name` is empty or contains a NUL byte.
	#[must_use]
	pub fn thread_name(mut self, name: impl Into<String>) -> Self {
		let name = name.into();
		assert!(!name.is_empty(), "worker thread name must not be empty");
		assert!(!name.contains('\0'), "worker thread name must not contain NUL");
		self.thread_name = name;
		self
	}

	/// Sets the worker thread stack size in bytes.
	///
	/// # Panics
	///
	/// Panics if `bytes` is zero.
	#[must_use]
	pub fn stack_size(mut self, bytes: usize) -> Self {
		assert!(bytes > 0, "worker stack size must be > 0");
		self.stack_size = Some(bytes);
		self
	}
}

impl Default for WorkerSpec {
	fn default() -> Self {
		Self {
			thread_name: DEFAULT_THREAD_NAME.to_string(),
			stack_size: None,
		}
	}
}
