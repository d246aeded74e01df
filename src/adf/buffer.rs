use crate::adf::{AdfError, Result};

/// Slice `size` bytes at `offset` out of the external buffer, bounds-checked.
pub(crate) fn byte_range<'a>(buf: &'a [u8], op: &'static str, offset: usize, size: usize) -> Result<&'a [u8]> {
	let end = offset.checked_add(size).ok_or(AdfError::BufferRange {
		op,
		offset,
		need: size,
		len: buf.len(),
	})?;
	buf.get(offset..end).ok_or(AdfError::BufferRange {
		op,
		offset,
		need: size,
		len: buf.len(),
	})
}

/// Slice `count` elements of `width` bytes each, with overflow-checked sizing.
pub(crate) fn array_range<'a>(buf: &'a [u8], op: &'static str, offset: usize, count: usize, width: usize) -> Result<&'a [u8]> {
	let size = count.checked_mul(width).ok_or(AdfError::BufferRange {
		op,
		offset,
		need: usize::MAX,
		len: buf.len(),
	})?;
	byte_range(buf, op, offset, size)
}

/// Decode a bounds-checked byte range as UTF-8 text.
pub(crate) fn text_range<'a>(buf: &'a [u8], op: &'static str, offset: usize, size: usize) -> Result<&'a str> {
	let raw = byte_range(buf, op, offset, size)?;
	std::str::from_utf8(raw).map_err(|_| AdfError::Encoding { op, offset, size })
}
