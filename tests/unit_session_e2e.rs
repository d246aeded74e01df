#![allow(missing_docs)]

use adfval::adf::{ElementKind, MemorySink, Op, Session, Severity, Value, value_to_json};

/// Lay out a small decoder-style buffer: names and raw array payloads side
/// by side, the way string and data regions coexist in a real decode.
fn fixture_buffer() -> Vec<u8> {
	let mut buf = Vec::new();
	buf.extend_from_slice(b"instance");       // 0..8
	buf.extend_from_slice(b"flags");          // 8..13
	buf.extend_from_slice(b"Enabled");        // 13..20
	buf.extend_from_slice(b"samples");        // 20..27
	for sample in [0.25_f32, -1.0, 4096.0] {
		buf.extend_from_slice(&sample.to_le_bytes()); // 27..39
	}
	buf.extend_from_slice(b"decoded 1 instance"); // 39..57
	buf
}

#[test]
fn full_session_builds_one_root_tree() {
	let buf = fixture_buffer();
	let sink = MemorySink::new();
	let mut session = Session::with_diag_sink(&buf, Box::new(sink.clone()));

	session.dict_push();
	session.str_push(8, 5).unwrap();
	session.enum_push(1, 13, 7).unwrap();
	session.dict_field_set().unwrap();
	session.str_push(20, 7).unwrap();
	session.f32s_push(27, 3).unwrap();
	session.dict_field_set().unwrap();
	session.hash_register(0xcafe_f00d, 0, 8).unwrap();
	session.db_print(39, 18).unwrap();

	assert_eq!(session.depth(), 1);
	let entry = session.hashes().get(0xcafe_f00d).unwrap();
	assert_eq!(entry.name.as_deref(), Some("instance"));
	assert_eq!(entry.width.bits(), 32);

	let root = session.finish().unwrap();
	let Value::Dict(dict) = &root else {
		panic!("expected dict root");
	};
	assert_eq!(dict.len(), 2);

	let Some(Value::Array(samples)) = dict.get("samples") else {
		panic!("expected samples array");
	};
	assert_eq!(samples.kind(), ElementKind::F32);
	assert!(samples.is_view());
	assert_eq!(samples.elements(), vec![Value::F32(0.25), Value::F32(-1.0), Value::F32(4096.0)]);

	assert_eq!(sink.records(), vec![(Severity::Info, "decoded 1 instance".to_owned())]);

	let json = serde_json::to_string(&value_to_json(&root)).unwrap();
	assert_eq!(json, r#"{"flags":{"value":1,"name":"Enabled"},"samples":[0.25,-1.0,4096.0]}"#);
}

#[test]
fn copied_out_root_outlives_the_buffer() {
	let owned_root;
	{
		let buf = fixture_buffer();
		let mut session = Session::new(&buf);
		session.list_push();
		session.f32s_push(27, 3).unwrap();
		session.list_append().unwrap();
		owned_root = session.finish().unwrap().into_owned();
	}

	let Value::List(items) = &owned_root else {
		panic!("expected list root");
	};
	let Value::Array(samples) = &items[0] else {
		panic!("expected array element");
	};
	assert!(!samples.is_view());
	assert_eq!(samples.element(2), Some(Value::F32(4096.0)));
}

#[test]
fn recorded_stream_replays_to_the_same_root() {
	let buf = fixture_buffer();
	let ops = vec![
		Op::DictPush,
		Op::StrPush { offset: 8, size: 5 },
		Op::Hash48Push { value: 0x1_0000_0001 },
		Op::DictFieldSet,
		Op::StrPush { offset: 20, size: 7 },
		Op::U8sPush { offset: 27, count: 4 },
		Op::DictFieldSet,
	];

	let mut first = Session::new(&buf);
	first.run(&ops).unwrap();
	let first_root = first.finish().unwrap();

	let encoded = serde_json::to_vec(&ops).unwrap();
	let replay: Vec<Op> = serde_json::from_slice(&encoded).unwrap();
	let mut second = Session::new(&buf);
	second.run(&replay).unwrap();

	assert_eq!(second.finish().unwrap(), first_root);
}

#[test]
fn failed_session_yields_no_partial_root() {
	let buf = fixture_buffer();
	let mut session = Session::new(&buf);
	session.dict_push();
	session.str_push(8, 5).unwrap();

	// A range past the buffer end aborts the decode mid-compose. The stack
	// is left non-singleton, so finish refuses to hand back a partial tree.
	assert!(session.str_push(buf.len(), 1).is_err());
	assert_eq!(session.depth(), 2);
	assert!(session.finish().is_err());
}
