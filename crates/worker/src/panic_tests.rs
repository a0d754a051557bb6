use std::panic::{AssertUnwindSafe, catch_unwind};

use super::PanicPayload;

fn reraise(payload: PanicPayload) {
	payload.resume()
}

fn capture(f: impl FnOnce()) -> PanicPayload {
	let err = catch_unwind(AssertUnwindSafe(f)).expect_err("closure should panic");
	PanicPayload::new(err)
}

#[test]
fn extracts_static_str_payload() {
	let payload = capture(|| panic!("boom-str"));
	assert_eq!(payload.message(), Some("boom-str"));
	assert_eq!(payload.to_string(), "boom-str");
}

#[test]
fn extracts_string_payload() {
	let payload = capture(|| panic!("{}", String::from("boom-string")));
	let msg = payload.message().expect("should carry a message");
	assert!(msg.contains("boom-string"), "expected 'boom-string', got: {msg}");
}

#[test]
fn returns_none_for_non_string_payload() {
	let payload = capture(|| std::panic::panic_any(42_u32));
	assert!(payload.message().is_none(), "typed payload has no message");
	assert_eq!(payload.to_string(), "<non-string panic payload>");
}

#[test]
fn downcast_keeps_payload_on_type_mismatch() {
	let payload = capture(|| std::panic::panic_any(7_i64));
	let payload = payload.downcast::<String>().expect_err("payload is not a String");
	assert_eq!(*payload.downcast::<i64>().expect("payload is an i64"), 7);
}

#[test]
fn resume_reraises_original_payload() {
	let payload = capture(|| std::panic::panic_any(13_u8));
	let err = catch_unwind(AssertUnwindSafe(|| reraise(payload))).expect_err("resume should panic");
	assert_eq!(err.downcast_ref::<u8>(), Some(&13));
}
