use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, AdfError>;

/// Errors produced while assembling a value tree from decoder callbacks.
///
/// Every variant is session-fatal: the session's partial stack is discarded
/// and the caller must restart the whole decode if it wants a result.
#[derive(Debug, Error)]
pub enum AdfError {
	/// An operation required more stack operands than were present.
	#[error("stack underflow in {op}: need {need}, depth {depth}")]
	StackUnderflow {
		/// Operation that attempted the pop.
		op: &'static str,
		/// Operands the operation requires.
		need: usize,
		/// Stack depth at the time of the call.
		depth: usize,
	},
	/// A byte range fell outside the external buffer.
	#[error("buffer range out of bounds in {op}: offset {offset}, need {need}, buffer {len}")]
	BufferRange {
		/// Operation that requested the range.
		op: &'static str,
		/// Requested start offset.
		offset: usize,
		/// Requested byte length (element count times width for arrays).
		need: usize,
		/// External buffer length.
		len: usize,
	},
	/// A text-bearing byte range was not valid UTF-8.
	#[error("invalid utf-8 in {op} at offset {offset}, size {size}")]
	Encoding {
		/// Operation that required text decoding.
		op: &'static str,
		/// Start offset of the offending range.
		offset: usize,
		/// Byte length of the offending range.
		size: usize,
	},
	/// A dict key operand was not a text value.
	#[error("dict key is not text: got {got}")]
	UnexpectedKeyType {
		/// Kind name of the offending key value.
		got: &'static str,
	},
	/// A compose operation found the wrong operand kind under its arguments.
	#[error("operand type mismatch in {op}: expected {expected}, got {got}")]
	OperandType {
		/// Operation that inspected the operand.
		op: &'static str,
		/// Expected value kind.
		expected: &'static str,
		/// Actual value kind.
		got: &'static str,
	},
	/// Session ended with a non-singleton stack.
	#[error("session finished with stack depth {depth} (expected 1)")]
	UnfinishedSession {
		/// Stack depth at finish time.
		depth: usize,
	},
}
