mod buffer;
mod diag;
mod error;
mod hashes;
mod json;
mod op;
mod stack;
mod value;

/// Diagnostics channel types and sinks.
pub use diag::{ConsoleSink, DiagSink, MemorySink, Severity};
/// Error and result aliases.
pub use error::{AdfError, Result};
/// Hash registry side-table types.
pub use hashes::{HashEntry, HashRegistry, HashWidth};
/// JSON rendering for reconstructed values.
pub use json::value_to_json;
/// Recordable operation stream.
pub use op::Op;
/// Decode session stack machine.
pub use stack::Session;
/// Reconstructed value types.
pub use value::{DictEntry, DictValue, ElementKind, EnumValue, TypedArray, Value};
