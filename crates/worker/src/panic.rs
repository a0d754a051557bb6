use std::any::Any;
use std::fmt;

use parking_lot::Mutex;

/// Owned panic payload captured on the worker thread.
///
/// The payload is held unchanged so it can be re-raised on the caller with
/// [`PanicPayload::resume`]. The message is extracted once at capture time
/// for `&str` and `String` payloads.
pub struct PanicPayload {
	message: Option<String>,
	payload: Mutex<Box<dyn Any + Send>>,
}

impl PanicPayload {
	/// Wraps a payload returned by [`std::panic::catch_unwind`].
	pub fn new(payload: Box<dyn Any + Send>) -> Self {
		Self {
			message: panic_message(payload.as_ref()),
			payload: Mutex::new(payload),
		}
	}

	/// Returns the panic message for string payloads.
	pub fn message(&self) -> Option<&str> {
		self.message.as_deref()
	}

	/// Attempts to take the payload as a concrete type.
	pub fn downcast<E: Any>(self) -> Result<Box<E>, Self> {
		let message = self.message;
		self.payload.into_inner().downcast::<E>().map_err(|payload| Self {
			message,
			payload: Mutex::new(payload),
		})
	}

	/// Returns the raw payload.
	pub fn into_inner(self) -> Box<dyn Any + Send> {
		self.payload.into_inner()
	}

	/// Re-raises the original panic on the current thread.
	pub fn resume(self) -> ! {
		std::panic::resume_unwind(self.into_inner())
	}
}

impl fmt::Debug for PanicPayload {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PanicPayload").field("message", &self.message).finish_non_exhaustive()
	}
}

impl fmt::Display for PanicPayload {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.message().unwrap_or("<non-string panic payload>"))
	}
}

/// Extracts the message from a `&str` or `String` panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
	if let Some(s) = payload.downcast_ref::<&'static str>() {
		Some((*s).to_string())
	} else {
		payload.downcast_ref::<String>().cloned()
	}
}
