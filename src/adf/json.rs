use crate::adf::value::Value;

/// Render a reconstructed value as JSON for host consumption.
///
/// Dict entries keep their final-write order, enums render as
/// `{"value": tag, "name": ...}` objects, and typed arrays expand to plain
/// JSON arrays of their decoded elements.
pub fn value_to_json(value: &Value<'_>) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	match value {
		Value::Null => JsonValue::Null,
		Value::Bool(v) => serde_json::json!(v),
		Value::S8(v) => serde_json::json!(v),
		Value::U8(v) => serde_json::json!(v),
		Value::S16(v) => serde_json::json!(v),
		Value::U16(v) => serde_json::json!(v),
		Value::S32(v) => serde_json::json!(v),
		Value::U32(v) => serde_json::json!(v),
		Value::S64(v) => serde_json::json!(v),
		Value::U64(v) => serde_json::json!(v),
		Value::F32(v) => serde_json::json!(v),
		Value::F64(v) => serde_json::json!(v),
		Value::String(v) => serde_json::json!(v),
		Value::Enum(v) => {
			let mut out = Map::new();
			out.insert("value".to_owned(), serde_json::json!(v.value));
			out.insert("name".to_owned(), serde_json::json!(v.name.as_ref()));
			JsonValue::Object(out)
		}
		Value::Array(array) => {
			let elements: Vec<JsonValue> = array.elements().iter().map(value_to_json).collect();
			JsonValue::Array(elements)
		}
		Value::List(items) => {
			let values: Vec<JsonValue> = items.iter().map(value_to_json).collect();
			JsonValue::Array(values)
		}
		Value::Dict(dict) => {
			let entries: Map<String, JsonValue> = dict
				.entries
				.iter()
				.map(|entry| (entry.key.to_string(), value_to_json(&entry.value)))
				.collect();
			JsonValue::Object(entries)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::value_to_json;
	use crate::adf::stack::Session;

	#[test]
	fn dict_renders_in_final_write_order() {
		let buf = b"ab";
		let mut session = Session::new(buf);
		session.dict_push();
		session.str_push(0, 1).unwrap();
		session.u8_push(1);
		session.dict_field_set().unwrap();
		session.str_push(1, 1).unwrap();
		session.u8_push(2);
		session.dict_field_set().unwrap();
		session.str_push(0, 1).unwrap();
		session.u8_push(3);
		session.dict_field_set().unwrap();

		let root = session.finish().unwrap();
		let json = serde_json::to_string(&value_to_json(&root)).unwrap();
		assert_eq!(json, r#"{"b":2,"a":3}"#);
	}

	#[test]
	fn enum_and_array_shapes() {
		let mut buf = b"On".to_vec();
		buf.extend_from_slice(&7_u16.to_le_bytes());
		buf.extend_from_slice(&9_u16.to_le_bytes());

		let mut session = Session::new(&buf);
		session.list_push();
		session.enum_push(1, 0, 2).unwrap();
		session.list_append().unwrap();
		session.u16s_push(2, 2).unwrap();
		session.list_append().unwrap();

		let root = session.finish().unwrap();
		let json = serde_json::to_string(&value_to_json(&root)).unwrap();
		assert_eq!(json, r#"[{"value":1,"name":"On"},[7,9]]"#);
	}

	#[test]
	fn s64_survives_json_without_truncation() {
		let mut session = Session::new(&[]);
		session.s64_push(i64::MIN);
		let root = session.finish().unwrap();
		assert_eq!(value_to_json(&root), serde_json::json!(i64::MIN));
	}
}
