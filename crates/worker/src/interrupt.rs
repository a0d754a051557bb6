//! Per-thread interrupt flag.
//!
//! A thread blocked on background work can be woken by another thread through
//! its [`Interrupter`]. The waiting call then fails with
//! [`BackgroundError::Interrupted`](crate::BackgroundError::Interrupted) and
//! leaves the flag set, so later code on that thread still observes the
//! interruption. Use [`clear`] to consume it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, Thread};

thread_local! {
	static FLAG: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
}

/// Handle that interrupts one specific thread.
#[derive(Debug, Clone)]
pub struct Interrupter {
	flag: Arc<AtomicBool>,
	thread: Thread,
}

impl Interrupter {
	/// Sets the target thread's interrupt flag and wakes it if parked.
	pub fn interrupt(&self) {
		self.flag.store(true, Ordering::Release);
		self.thread.unpark();
	}

	/// Returns true when the target thread's flag is set.
	pub fn is_interrupted(&self) -> bool {
		self.flag.load(Ordering::Acquire)
	}

	/// Returns the target thread.
	pub fn thread(&self) -> &Thread {
		&self.thread
	}
}

/// Returns an interrupter for the current thread.
pub fn current() -> Interrupter {
	Interrupter {
		flag: FLAG.with(Arc::clone),
		thread: thread::current(),
	}
}

/// Returns true when the current thread has been interrupted. Does not clear the flag.
pub fn is_interrupted() -> bool {
	FLAG.with(|flag| flag.load(Ordering::Acquire))
}

/// Clears the current thread's flag, returning whether it was set.
pub fn clear() -> bool {
	FLAG.with(|flag| flag.swap(false, Ordering::AcqRel))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn interrupt_sets_and_clear_resets() {
		let handle = current();
		assert!(!is_interrupted());

		handle.interrupt();
		assert!(is_interrupted());
		assert!(handle.is_interrupted());

		assert!(clear());
		assert!(!is_interrupted());
		assert!(!clear());
	}

	#[test]
	fn flag_is_per_thread() {
		current().interrupt();
		let other = thread::spawn(is_interrupted).join().expect("thread should not panic");
		assert!(!other);
		assert!(clear());
	}

	#[test]
	fn interrupt_from_other_thread_wakes_parked_thread() {
		let handle = current();
		let waker = thread::spawn(move || handle.interrupt());
		while !is_interrupted() {
			thread::park();
		}
		waker.join().expect("waker should not panic");
		assert!(clear());
	}
}
