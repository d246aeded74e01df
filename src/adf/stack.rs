use crate::adf::buffer;
use crate::adf::diag::{ConsoleSink, DiagSink, Severity};
use crate::adf::hashes::HashRegistry;
use crate::adf::value::{DictValue, ElementKind, EnumValue, TypedArray, Value};
use crate::adf::{AdfError, Result};

/// One decode session: the value stack plus its side channels.
///
/// The external decoder drives a session call-by-call; every decoded field
/// maps to exactly one method here. Compose operations consume operands
/// from the top of the stack, push operations add one value. When the
/// decoder signals completion, [`Session::finish`] yields the single
/// remaining value as the session root.
///
/// A session borrows the decoder's buffer read-only for its whole lifetime;
/// array pushes alias it zero-copy. Sessions are single-threaded and
/// one-shot: any error is fatal and the partial stack is discarded.
pub struct Session<'buf> {
	buf: &'buf [u8],
	stack: Vec<Value<'buf>>,
	hashes: HashRegistry,
	diag: Box<dyn DiagSink>,
}

impl<'buf> Session<'buf> {
	/// Start a session over the decoder's buffer with console diagnostics.
	pub fn new(buf: &'buf [u8]) -> Self {
		Self::with_diag_sink(buf, Box::new(ConsoleSink))
	}

	/// Start a session with a custom diagnostics sink.
	pub fn with_diag_sink(buf: &'buf [u8], diag: Box<dyn DiagSink>) -> Self {
		Self {
			buf,
			stack: Vec::new(),
			hashes: HashRegistry::new(),
			diag,
		}
	}

	/// Current stack depth.
	pub fn depth(&self) -> usize {
		self.stack.len()
	}

	/// Hash registrations reported so far.
	pub fn hashes(&self) -> &HashRegistry {
		&self.hashes
	}

	/// Move the hash registry out of the session, leaving it empty.
	pub fn take_hashes(&mut self) -> HashRegistry {
		std::mem::take(&mut self.hashes)
	}

	/// Consume the session and return the root value.
	///
	/// The decoder must have composed everything into a single stack entry;
	/// any other depth is a protocol violation.
	pub fn finish(mut self) -> Result<Value<'buf>> {
		if self.stack.len() != 1 {
			return Err(AdfError::UnfinishedSession { depth: self.stack.len() });
		}
		Ok(self.stack.pop().unwrap_or(Value::Null))
	}

	fn require(&self, op: &'static str, need: usize) -> Result<()> {
		if self.stack.len() < need {
			return Err(AdfError::StackUnderflow {
				op,
				need,
				depth: self.stack.len(),
			});
		}
		Ok(())
	}

	/// Push a new empty dict.
	pub fn dict_push(&mut self) {
		self.stack.push(Value::Dict(DictValue::new()));
	}

	/// Pop value, key, and dict; set `dict[key] = value`; push the dict back.
	///
	/// The key must be a string; a duplicate key silently overwrites the
	/// earlier write.
	pub fn dict_field_set(&mut self) -> Result<()> {
		self.require("dict_field_set", 3)?;
		let value = self.stack.pop().unwrap_or(Value::Null);
		let key = self.stack.pop().unwrap_or(Value::Null);
		let dict = self.stack.pop().unwrap_or(Value::Null);

		let Value::String(key) = key else {
			return Err(AdfError::UnexpectedKeyType { got: key.kind_name() });
		};
		let Value::Dict(mut dict) = dict else {
			return Err(AdfError::OperandType {
				op: "dict_field_set",
				expected: "dict",
				got: dict.kind_name(),
			});
		};

		dict.set(key, value);
		self.stack.push(Value::Dict(dict));
		Ok(())
	}

	/// Push a new empty list.
	pub fn list_push(&mut self) {
		self.stack.push(Value::List(Vec::new()));
	}

	/// Pop value and list; append the value; push the list back.
	pub fn list_append(&mut self) -> Result<()> {
		self.require("list_append", 2)?;
		let value = self.stack.pop().unwrap_or(Value::Null);
		let list = self.stack.pop().unwrap_or(Value::Null);

		let Value::List(mut items) = list else {
			return Err(AdfError::OperandType {
				op: "list_append",
				expected: "list",
				got: list.kind_name(),
			});
		};

		items.push(value);
		self.stack.push(Value::List(items));
		Ok(())
	}

	/// Push a boolean.
	pub fn bool_push(&mut self, value: bool) {
		self.stack.push(Value::Bool(value));
	}

	/// Push a signed 8-bit integer.
	pub fn s8_push(&mut self, value: i8) {
		self.stack.push(Value::S8(value));
	}

	/// Push an unsigned 8-bit integer.
	pub fn u8_push(&mut self, value: u8) {
		self.stack.push(Value::U8(value));
	}

	/// Push a signed 16-bit integer.
	pub fn s16_push(&mut self, value: i16) {
		self.stack.push(Value::S16(value));
	}

	/// Push an unsigned 16-bit integer.
	pub fn u16_push(&mut self, value: u16) {
		self.stack.push(Value::U16(value));
	}

	/// Push a signed 32-bit integer.
	pub fn s32_push(&mut self, value: i32) {
		self.stack.push(Value::S32(value));
	}

	/// Push an unsigned 32-bit integer.
	pub fn u32_push(&mut self, value: u32) {
		self.stack.push(Value::U32(value));
	}

	/// Push a signed 64-bit integer.
	pub fn s64_push(&mut self, value: i64) {
		self.stack.push(Value::S64(value));
	}

	/// Push an unsigned 64-bit integer.
	pub fn u64_push(&mut self, value: u64) {
		self.stack.push(Value::U64(value));
	}

	/// Push a 32-bit float.
	pub fn f32_push(&mut self, value: f32) {
		self.stack.push(Value::F32(value));
	}

	/// Push a 64-bit float.
	pub fn f64_push(&mut self, value: f64) {
		self.stack.push(Value::F64(value));
	}

	/// Push a 32-bit hash as a plain unsigned scalar.
	pub fn hash32_push(&mut self, value: u32) {
		self.stack.push(Value::U32(value));
	}

	/// Push a 48-bit hash as a plain unsigned scalar.
	pub fn hash48_push(&mut self, value: u64) {
		self.stack.push(Value::U64(value));
	}

	/// Push a 64-bit hash as a plain unsigned scalar.
	pub fn hash64_push(&mut self, value: u64) {
		self.stack.push(Value::U64(value));
	}

	/// Decode `size` bytes at `offset` as UTF-8 and push an owned string.
	pub fn str_push(&mut self, offset: usize, size: usize) -> Result<()> {
		let text = buffer::text_range(self.buf, "str_push", offset, size)?;
		self.stack.push(Value::String(text.into()));
		Ok(())
	}

	/// Decode an enumerator name like [`Session::str_push`] and push it
	/// paired with its integer tag.
	pub fn enum_push(&mut self, tag: u32, offset: usize, size: usize) -> Result<()> {
		let name = buffer::text_range(self.buf, "enum_push", offset, size)?;
		self.stack.push(Value::Enum(EnumValue {
			value: tag,
			name: name.into(),
		}));
		Ok(())
	}

	fn array_push(&mut self, op: &'static str, kind: ElementKind, offset: usize, count: usize) -> Result<()> {
		let raw = buffer::array_range(self.buf, op, offset, count, kind.width())?;
		self.stack.push(Value::Array(TypedArray::view(kind, raw)));
		Ok(())
	}

	/// Push a zero-copy view over `count` signed 8-bit elements.
	pub fn s8s_push(&mut self, offset: usize, count: usize) -> Result<()> {
		self.array_push("s8s_push", ElementKind::S8, offset, count)
	}

	/// Push a zero-copy view over `count` unsigned 8-bit elements.
	pub fn u8s_push(&mut self, offset: usize, count: usize) -> Result<()> {
		self.array_push("u8s_push", ElementKind::U8, offset, count)
	}

	/// Push a zero-copy view over `count` signed 16-bit elements.
	pub fn s16s_push(&mut self, offset: usize, count: usize) -> Result<()> {
		self.array_push("s16s_push", ElementKind::S16, offset, count)
	}

	/// Push a zero-copy view over `count` unsigned 16-bit elements.
	pub fn u16s_push(&mut self, offset: usize, count: usize) -> Result<()> {
		self.array_push("u16s_push", ElementKind::U16, offset, count)
	}

	/// Push a zero-copy view over `count` signed 32-bit elements.
	pub fn s32s_push(&mut self, offset: usize, count: usize) -> Result<()> {
		self.array_push("s32s_push", ElementKind::S32, offset, count)
	}

	/// Push a zero-copy view over `count` unsigned 32-bit elements.
	pub fn u32s_push(&mut self, offset: usize, count: usize) -> Result<()> {
		self.array_push("u32s_push", ElementKind::U32, offset, count)
	}

	/// Push a zero-copy view over `count` signed 64-bit elements.
	pub fn s64s_push(&mut self, offset: usize, count: usize) -> Result<()> {
		self.array_push("s64s_push", ElementKind::S64, offset, count)
	}

	/// Push a zero-copy view over `count` unsigned 64-bit elements.
	pub fn u64s_push(&mut self, offset: usize, count: usize) -> Result<()> {
		self.array_push("u64s_push", ElementKind::U64, offset, count)
	}

	/// Push a zero-copy view over `count` 32-bit float elements.
	pub fn f32s_push(&mut self, offset: usize, count: usize) -> Result<()> {
		self.array_push("f32s_push", ElementKind::F32, offset, count)
	}

	/// Push a zero-copy view over `count` 64-bit float elements.
	pub fn f64s_push(&mut self, offset: usize, count: usize) -> Result<()> {
		self.array_push("f64s_push", ElementKind::F64, offset, count)
	}

	/// Record a hash-to-byte-range association in the side-table.
	///
	/// Leaves the stack untouched; the range is bounds-checked but need not
	/// be UTF-8.
	pub fn hash_register(&mut self, hash: u64, offset: usize, size: usize) -> Result<()> {
		let raw = buffer::byte_range(self.buf, "hash_register", offset, size)?;
		self.hashes.register(hash, offset, size, raw);
		Ok(())
	}

	fn db_emit(&mut self, op: &'static str, severity: Severity, offset: usize, size: usize) -> Result<()> {
		let text = buffer::text_range(self.buf, op, offset, size)?;
		self.diag.emit(severity, text);
		Ok(())
	}

	/// Forward a decoder message at info severity.
	pub fn db_print(&mut self, offset: usize, size: usize) -> Result<()> {
		self.db_emit("db_print", Severity::Info, offset, size)
	}

	/// Forward a decoder message at warn severity.
	pub fn db_warn(&mut self, offset: usize, size: usize) -> Result<()> {
		self.db_emit("db_warn", Severity::Warn, offset, size)
	}

	/// Forward a decoder message at error severity.
	pub fn db_error(&mut self, offset: usize, size: usize) -> Result<()> {
		self.db_emit("db_error", Severity::Error, offset, size)
	}
}
