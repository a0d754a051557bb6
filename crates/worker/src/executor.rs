//! Process-wide background worker thread.
//!
//! Jobs are sent over an `mpsc` queue to one named thread that runs them in
//! submission order. Each job catches its own panic, so the worker outlives
//! failing work. The caller's tracing span is entered on the worker while the
//! job runs, so logs from the work nest under the submitting span.

use std::io;
use std::sync::OnceLock;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, ThreadId};

use crate::latch::{LatchReceiver, latch};
use crate::{BackgroundError, Outcome, Result, WorkerSpec};

type Job = Box<dyn FnOnce() + Send + 'static>;

static GLOBAL: OnceLock<io::Result<BackgroundExecutor>> = OnceLock::new();

/// Handle to the dedicated background worker thread.
#[derive(Debug)]
pub struct BackgroundExecutor {
	tx: Sender<Job>,
	thread_id: ThreadId,
	name: String,
}

impl BackgroundExecutor {
	/// Returns the global worker, starting it with [`WorkerSpec::default`] on first use.
	pub fn global() -> Result<&'static Self> {
		Self::resolve(GLOBAL.get_or_init(|| Self::spawn(WorkerSpec::default())))
	}

	/// Starts the global worker with `spec`.
	///
	/// The first initialisation wins. When the worker already exists the
	/// existing instance is returned and `spec` is ignored.
	pub fn init_global(spec: WorkerSpec) -> Result<&'static Self> {
		let mut spawned = false;
		let slot = GLOBAL.get_or_init(|| {
			spawned = true;
			Self::spawn(spec)
		});
		if !spawned {
			tracing::debug!("background.init_global.ignored");
		}
		Self::resolve(slot)
	}

	fn resolve(slot: &'static io::Result<Self>) -> Result<&'static Self> {
		slot.as_ref().map_err(|err| BackgroundError::WorkerUnavailable(err.to_string()))
	}

	pub(crate) fn spawn(spec: WorkerSpec) -> io::Result<Self> {
		let (tx, rx) = mpsc::channel::<Job>();
		let mut builder = thread::Builder::new().name(spec.thread_name.clone());
		if let Some(bytes) = spec.stack_size {
			builder = builder.stack_size(bytes);
		}

		let handle = builder.spawn(move || {
			while let Ok(job) = rx.recv() {
				job();
			}
		})?;

		let thread_id = handle.thread().id();
		tracing::debug!(worker = %spec.thread_name, ?thread_id, "background.spawned");
		Ok(Self {
			tx,
			thread_id,
			name: spec.thread_name,
		})
	}

	#[cfg(test)]
	fn from_sender(tx: Sender<Job>) -> Self {
		Self {
			tx,
			thread_id: thread::spawn(|| {}).thread().id(),
			name: "detached".to_string(),
		}
	}

	/// Returns the worker thread's id.
	pub fn thread_id(&self) -> ThreadId {
		self.thread_id
	}

	/// Returns the worker thread's name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns true when called from this worker's thread.
	pub fn is_current(&self) -> bool {
		thread::current().id() == self.thread_id
	}

	/// Enqueues `work` without waiting for it.
	pub(crate) fn submit<F, T>(&self, work: F) -> Result<LatchReceiver<Outcome<T>>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		if self.is_current() {
			return Err(BackgroundError::Reentrant);
		}

		let (reply, receiver) = latch();
		let span = tracing::Span::current();
		let job: Job = Box::new(move || {
			let _guard = span.enter();
			let outcome = Outcome::capture(work);
			log_outcome(&outcome);
			reply.send(outcome);
		});

		tracing::trace!(worker = %self.name, "background.submit");
		self.tx.send(job).map_err(|_| BackgroundError::Disconnected)?;
		Ok(receiver)
	}

	/// Runs `work` on the worker and waits for its outcome.
	///
	/// A panic inside `work` is returned as [`BackgroundError::Panicked`].
	pub fn try_call<F, T>(&self, work: F) -> Result<T>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		self.submit(work)?.wait()?.into_result()
	}

	/// Runs side-effecting `work` on the worker and waits for it.
	pub fn try_run<F>(&self, work: F) -> Result<()>
	where
		F: FnOnce() + Send + 'static,
	{
		self.try_call(work)
	}

	/// Runs `work` on the worker and returns its value.
	///
	/// # Panics
	///
	/// Re-raises a panic from `work` with its original payload. Panics with
	/// the [`BackgroundError`] message for any other failure.
	pub fn call<F, T>(&self, work: F) -> T
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		match self.submit(work).and_then(LatchReceiver::wait) {
			Ok(outcome) => outcome.unwrap_or_resume(),
			Err(err) => panic!("{err}"),
		}
	}

	/// Runs side-effecting `work` on the worker and waits for it.
	///
	/// # Panics
	///
	/// Same as [`Self::call`].
	pub fn run<F>(&self, work: F)
	where
		F: FnOnce() + Send + 'static,
	{
		self.call(work)
	}
}

fn log_outcome<T>(outcome: &Outcome<T>) {
	match outcome {
		Outcome::Completed(_) => tracing::trace!("background.complete"),
		Outcome::Panicked(payload) => tracing::trace!(panic = %payload, "background.panicked"),
	}
}

/// Returns true when called from the global background worker thread.
pub fn is_background_thread() -> bool {
	matches!(GLOBAL.get(), Some(Ok(executor)) if executor.is_current())
}

/// Runs `work` on the global worker and blocks until it finishes.
///
/// # Panics
///
/// Re-raises a panic from `work` with its original payload. Panics with the
/// [`BackgroundError`] message when the worker is unavailable or the caller
/// is interrupted.
pub fn run_in_background<F>(work: F)
where
	F: FnOnce() + Send + 'static,
{
	call_in_background(work)
}

/// Runs `work` on the global worker and returns its value.
///
/// # Panics
///
/// Same as [`run_in_background`].
pub fn call_in_background<F, T>(work: F) -> T
where
	F: FnOnce() -> T + Send + 'static,
	T: Send + 'static,
{
	match BackgroundExecutor::global() {
		Ok(executor) => executor.call(work),
		Err(err) => panic!("{err}"),
	}
}

/// Runs `work` on the global worker, reporting every failure as an error.
pub fn try_run_in_background<F>(work: F) -> Result<()>
where
	F: FnOnce() + Send + 'static,
{
	try_call_in_background(work)
}

/// Runs `work` on the global worker and returns its value, reporting every failure as an error.
pub fn try_call_in_background<F, T>(work: F) -> Result<T>
where
	F: FnOnce() -> T + Send + 'static,
	T: Send + 'static,
{
	BackgroundExecutor::global()?.try_call(work)
}
