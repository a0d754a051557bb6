//! One-shot handoff between the worker and a blocked caller.
//!
//! The sender stores the value and then unparks the waiter, so the waiter
//! never observes a partially produced outcome. Dropping the sender without
//! sending marks the latch abandoned.

use std::sync::Arc;
use std::thread::{self, Thread};

use parking_lot::Mutex;

use crate::{BackgroundError, Result, interrupt};

enum State<T> {
	Pending,
	Ready(T),
	Abandoned,
}

struct Slot<T> {
	state: State<T>,
	waiter: Option<Thread>,
}

pub(crate) struct LatchSender<T> {
	slot: Option<Arc<Mutex<Slot<T>>>>,
}

pub(crate) struct LatchReceiver<T> {
	slot: Arc<Mutex<Slot<T>>>,
}

pub(crate) fn latch<T>() -> (LatchSender<T>, LatchReceiver<T>) {
	let slot = Arc::new(Mutex::new(Slot {
		state: State::Pending,
		waiter: None,
	}));
	(LatchSender { slot: Some(Arc::clone(&slot)) }, LatchReceiver { slot })
}

impl<T> LatchSender<T> {
	pub(crate) fn send(mut self, value: T) {
		self.complete(State::Ready(value));
	}

	fn complete(&mut self, state: State<T>) {
		let Some(slot) = self.slot.take() else {
			return;
		};
		let waiter = {
			let mut slot = slot.lock();
			slot.state = state;
			slot.waiter.take()
		};
		if let Some(waiter) = waiter {
			waiter.unpark();
		}
	}
}

impl<T> Drop for LatchSender<T> {
	fn drop(&mut self) {
		self.complete(State::Abandoned);
	}
}

impl<T> LatchReceiver<T> {
	/// Blocks until the sender completes or the current thread is interrupted.
	pub(crate) fn wait(self) -> Result<T> {
		loop {
			{
				let mut slot = self.slot.lock();
				match std::mem::replace(&mut slot.state, State::Pending) {
					State::Ready(value) => return Ok(value),
					State::Abandoned => return Err(BackgroundError::Disconnected),
					State::Pending => slot.waiter = Some(thread::current()),
				}
			}
			if interrupt::is_interrupted() {
				return Err(BackgroundError::Interrupted);
			}
			thread::park();
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;

	#[test]
	fn value_sent_before_wait_is_returned() {
		let (tx, rx) = latch();
		tx.send(7);
		assert_eq!(rx.wait().ok(), Some(7));
	}

	#[test]
	fn value_sent_from_other_thread_wakes_waiter() {
		let (tx, rx) = latch();
		let sender = thread::spawn(move || {
			thread::sleep(Duration::from_millis(20));
			tx.send("ready");
		});
		assert_eq!(rx.wait().ok(), Some("ready"));
		sender.join().expect("sender should not panic");
	}

	#[test]
	fn dropped_sender_reports_disconnected() {
		let (tx, rx) = latch::<()>();
		drop(tx);
		assert!(matches!(rx.wait(), Err(BackgroundError::Disconnected)));
	}

	#[test]
	fn ready_value_wins_over_pending_interrupt() {
		let (tx, rx) = latch();
		tx.send(1);
		interrupt::current().interrupt();
		assert_eq!(rx.wait().ok(), Some(1));
		assert!(interrupt::clear());
	}

	#[test]
	fn interrupt_wakes_waiter_and_stays_set() {
		let (tx, rx) = latch::<()>();
		let handle = interrupt::current();
		let interrupter = thread::spawn(move || {
			thread::sleep(Duration::from_millis(20));
			handle.interrupt();
		});
		assert!(matches!(rx.wait(), Err(BackgroundError::Interrupted)));
		assert!(interrupt::is_interrupted());
		assert!(interrupt::clear());
		interrupter.join().expect("interrupter should not panic");
		drop(tx);
	}
}
