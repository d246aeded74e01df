use std::collections::HashMap;
use std::collections::hash_map;

/// Bit width of a registered hash value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashWidth {
	/// 32-bit hash.
	W32,
	/// 48-bit hash (three 16-bit words on the wire).
	W48,
	/// 64-bit hash.
	W64,
}

impl HashWidth {
	/// Width in bits.
	pub fn bits(self) -> u32 {
		match self {
			HashWidth::W32 => 32,
			HashWidth::W48 => 48,
			HashWidth::W64 => 64,
		}
	}

	/// Smallest width that can represent `hash`.
	pub(crate) fn for_hash(hash: u64) -> Self {
		if hash <= u64::from(u32::MAX) {
			HashWidth::W32
		} else if hash < 1_u64 << 48 {
			HashWidth::W48
		} else {
			HashWidth::W64
		}
	}
}

/// One hash-to-source association reported by the decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct HashEntry {
	/// Registered hash value.
	pub hash: u64,
	/// Bit width derived from the hash's magnitude.
	pub width: HashWidth,
	/// Start of the originating byte range in the external buffer.
	pub offset: usize,
	/// Length of the originating byte range.
	pub size: usize,
	/// Originating bytes decoded as text, when they were valid UTF-8.
	pub name: Option<Box<str>>,
}

/// Side-table of hash registrations for later symbol-name resolution.
///
/// Purely advisory: the stack machine records entries here and never reads
/// them back. Registering the same hash twice keeps the latest entry.
#[derive(Debug, Default)]
pub struct HashRegistry {
	entries: HashMap<u64, HashEntry>,
}

impl HashRegistry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn register(&mut self, hash: u64, offset: usize, size: usize, raw: &[u8]) {
		let name = std::str::from_utf8(raw).ok().map(Box::from);
		self.entries.insert(
			hash,
			HashEntry {
				hash,
				width: HashWidth::for_hash(hash),
				offset,
				size,
				name,
			},
		);
	}

	/// Look up a registration by hash value.
	pub fn get(&self, hash: u64) -> Option<&HashEntry> {
		self.entries.get(&hash)
	}

	/// Number of distinct registered hashes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no hashes were registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate over all registrations in unspecified order.
	pub fn iter(&self) -> hash_map::Values<'_, u64, HashEntry> {
		self.entries.values()
	}
}
