//! Declarative per-test markers.

/// Marker attached to a test declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Marker {
	/// Run the whole test body on the background worker.
	Background,
}

/// Per-test metadata lookup.
pub trait TestMetadata {
	/// Returns true when the test carries `marker`.
	fn has_marker(&self, marker: Marker) -> bool;
}

impl<T: TestMetadata + ?Sized> TestMetadata for &T {
	fn has_marker(&self, marker: Marker) -> bool {
		(**self).has_marker(marker)
	}
}

/// Name and markers of one test case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestDescription {
	name: String,
	markers: Vec<Marker>,
}

impl TestDescription {
	/// Creates an unmarked description.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			markers: Vec::new(),
		}
	}

	/// Attaches `marker`. Attaching the same marker twice has no effect.
	#[must_use]
	pub fn with_marker(mut self, marker: Marker) -> Self {
		if !self.markers.contains(&marker) {
			self.markers.push(marker);
		}
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn markers(&self) -> &[Marker] {
		&self.markers
	}
}

impl TestMetadata for TestDescription {
	fn has_marker(&self, marker: Marker) -> bool {
		self.markers.contains(&marker)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn new_description_has_no_markers() {
		let desc = TestDescription::new("plain");
		assert_eq!(desc.name(), "plain");
		assert!(!desc.has_marker(Marker::Background));
	}

	#[test]
	fn with_marker_is_idempotent() {
		let desc = TestDescription::new("bg").with_marker(Marker::Background).with_marker(Marker::Background);
		assert_eq!(desc.markers(), &[Marker::Background]);
		assert!((&desc).has_marker(Marker::Background));
	}
}
