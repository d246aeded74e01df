use std::borrow::Cow;

/// Reconstructed runtime value.
///
/// Scalar variants preserve the exact width and signedness declared by the
/// wire format; 64-bit values are never narrowed. The lifetime bounds any
/// zero-copy [`TypedArray`] view to the external buffer it aliases.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
	Null,
	Bool(bool),
	S8(i8),
	U8(u8),
	S16(i16),
	U16(u16),
	S32(i32),
	U32(u32),
	S64(i64),
	U64(u64),
	F32(f32),
	F64(f64),
	String(Box<str>),
	Enum(EnumValue),
	Array(TypedArray<'a>),
	List(Vec<Value<'a>>),
	Dict(DictValue<'a>),
}

impl<'a> Value<'a> {
	/// Short kind label for diagnostics and type-mismatch errors.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::S8(_) => "s8",
			Value::U8(_) => "u8",
			Value::S16(_) => "s16",
			Value::U16(_) => "u16",
			Value::S32(_) => "s32",
			Value::U32(_) => "u32",
			Value::S64(_) => "s64",
			Value::U64(_) => "u64",
			Value::F32(_) => "f32",
			Value::F64(_) => "f64",
			Value::String(_) => "string",
			Value::Enum(_) => "enum",
			Value::Array(_) => "array",
			Value::List(_) => "list",
			Value::Dict(_) => "dict",
		}
	}

	/// Deep copy-out: detach every array view from the external buffer.
	///
	/// The result no longer aliases decoder memory and may outlive the
	/// decode session. Scalars, strings, and enums are already owned and
	/// move through unchanged.
	pub fn into_owned(self) -> Value<'static> {
		match self {
			Value::Null => Value::Null,
			Value::Bool(v) => Value::Bool(v),
			Value::S8(v) => Value::S8(v),
			Value::U8(v) => Value::U8(v),
			Value::S16(v) => Value::S16(v),
			Value::U16(v) => Value::U16(v),
			Value::S32(v) => Value::S32(v),
			Value::U32(v) => Value::U32(v),
			Value::S64(v) => Value::S64(v),
			Value::U64(v) => Value::U64(v),
			Value::F32(v) => Value::F32(v),
			Value::F64(v) => Value::F64(v),
			Value::String(v) => Value::String(v),
			Value::Enum(v) => Value::Enum(v),
			Value::Array(v) => Value::Array(v.into_owned()),
			Value::List(items) => Value::List(items.into_iter().map(Value::into_owned).collect()),
			Value::Dict(dict) => Value::Dict(dict.into_owned()),
		}
	}
}

/// Enum wire value: integer tag paired with its decoded name.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
	/// Integer tag as stored on the wire.
	pub value: u32,
	/// Decoded enumerator name.
	pub name: Box<str>,
}

/// Element kind of a homogeneous typed array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
	S8,
	U8,
	S16,
	U16,
	S32,
	U32,
	S64,
	U64,
	F32,
	F64,
}

impl ElementKind {
	/// Element width in bytes.
	pub fn width(self) -> usize {
		match self {
			ElementKind::S8 | ElementKind::U8 => 1,
			ElementKind::S16 | ElementKind::U16 => 2,
			ElementKind::S32 | ElementKind::U32 | ElementKind::F32 => 4,
			ElementKind::S64 | ElementKind::U64 | ElementKind::F64 => 8,
		}
	}
}

/// Homogeneous array over a contiguous little-endian byte region.
///
/// Freshly pushed arrays borrow the external buffer (zero-copy); call
/// [`TypedArray::into_owned`] or [`Value::into_owned`] before the buffer is
/// freed or moved if the array must outlive the decode session.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray<'a> {
	kind: ElementKind,
	bytes: Cow<'a, [u8]>,
}

impl<'a> TypedArray<'a> {
	/// Wrap a borrowed byte region. Length must be a multiple of the
	/// element width; callers validate the range against the buffer first.
	pub(crate) fn view(kind: ElementKind, bytes: &'a [u8]) -> Self {
		debug_assert_eq!(bytes.len() % kind.width(), 0);
		Self {
			kind,
			bytes: Cow::Borrowed(bytes),
		}
	}

	/// Element kind of this array.
	pub fn kind(&self) -> ElementKind {
		self.kind
	}

	/// Element count.
	pub fn len(&self) -> usize {
		self.bytes.len() / self.kind.width()
	}

	/// Whether the array has zero elements.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Raw little-endian backing bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Whether the array still aliases the external buffer.
	pub fn is_view(&self) -> bool {
		matches!(self.bytes, Cow::Borrowed(_))
	}

	/// Copy the backing bytes out of the external buffer.
	pub fn into_owned(self) -> TypedArray<'static> {
		TypedArray {
			kind: self.kind,
			bytes: Cow::Owned(self.bytes.into_owned()),
		}
	}

	/// Decode element `idx` as a scalar value, or `None` past the end.
	pub fn element(&self, idx: usize) -> Option<Value<'static>> {
		let width = self.kind.width();
		let start = idx.checked_mul(width)?;
		let end = start.checked_add(width)?;
		let raw = self.bytes.get(start..end)?;
		Some(decode_element(self.kind, raw))
	}

	/// Decode every element in order.
	pub fn elements(&self) -> Vec<Value<'static>> {
		self.bytes
			.chunks_exact(self.kind.width())
			.map(|raw| decode_element(self.kind, raw))
			.collect()
	}
}

fn decode_element(kind: ElementKind, raw: &[u8]) -> Value<'static> {
	match kind {
		ElementKind::S8 => Value::S8(raw[0] as i8),
		ElementKind::U8 => Value::U8(raw[0]),
		ElementKind::S16 => Value::S16(i16::from_le_bytes([raw[0], raw[1]])),
		ElementKind::U16 => Value::U16(u16::from_le_bytes([raw[0], raw[1]])),
		ElementKind::S32 => Value::S32(i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]])),
		ElementKind::U32 => Value::U32(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]])),
		ElementKind::S64 => {
			let mut buf = [0_u8; 8];
			buf.copy_from_slice(raw);
			Value::S64(i64::from_le_bytes(buf))
		}
		ElementKind::U64 => {
			let mut buf = [0_u8; 8];
			buf.copy_from_slice(raw);
			Value::U64(u64::from_le_bytes(buf))
		}
		ElementKind::F32 => Value::F32(f32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]])),
		ElementKind::F64 => {
			let mut buf = [0_u8; 8];
			buf.copy_from_slice(raw);
			Value::F64(f64::from_le_bytes(buf))
		}
	}
}

/// One key/value entry of a [`DictValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry<'a> {
	/// Entry key.
	pub key: Box<str>,
	/// Entry value.
	pub value: Value<'a>,
}

/// String-keyed mapping with last-write-wins semantics.
///
/// Iteration order is the insertion order of the *final* write per key: a
/// key overwritten by a later `set` moves to the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictValue<'a> {
	/// Entries in final-write order.
	pub entries: Vec<DictEntry<'a>>,
}

impl<'a> DictValue<'a> {
	/// Create an empty dict.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Set `key` to `value`, silently replacing any earlier write.
	pub fn set(&mut self, key: Box<str>, value: Value<'a>) {
		self.entries.retain(|entry| entry.key != key);
		self.entries.push(DictEntry { key, value });
	}

	/// Look up a key.
	pub fn get(&self, key: &str) -> Option<&Value<'a>> {
		self.entries.iter().find(|entry| entry.key.as_ref() == key).map(|entry| &entry.value)
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the dict has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn into_owned(self) -> DictValue<'static> {
		DictValue {
			entries: self
				.entries
				.into_iter()
				.map(|entry| DictEntry {
					key: entry.key,
					value: entry.value.into_owned(),
				})
				.collect(),
		}
	}
}
