use std::cell::RefCell;
use std::rc::Rc;

/// Severity of a decoder diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	/// Informational output (`db_print`).
	Info,
	/// Recoverable oddity noticed by the decoder (`db_warn`).
	Warn,
	/// Decoder-side failure report (`db_error`).
	Error,
}

impl Severity {
	/// Lowercase label for rendering.
	pub fn as_str(self) -> &'static str {
		match self {
			Severity::Info => "info",
			Severity::Warn => "warn",
			Severity::Error => "error",
		}
	}
}

/// Destination for decoder diagnostics.
///
/// Sinks never influence the stack or the decode outcome; a session forwards
/// each `db_*` message here and moves on.
pub trait DiagSink {
	/// Receive one diagnostic message.
	fn emit(&mut self, severity: Severity, message: &str);
}

/// Default sink: info to stdout, warn and error to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl DiagSink for ConsoleSink {
	fn emit(&mut self, severity: Severity, message: &str) {
		match severity {
			Severity::Info => println!("{message}"),
			Severity::Warn | Severity::Error => eprintln!("{}: {message}", severity.as_str()),
		}
	}
}

/// Buffering sink for tests and hosts that want diagnostics back.
///
/// Clones share the same record list, so a host can keep one handle and box
/// another into the session.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
	records: Rc<RefCell<Vec<(Severity, String)>>>,
}

impl MemorySink {
	/// Create an empty sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of all messages received so far, in emit order.
	pub fn records(&self) -> Vec<(Severity, String)> {
		self.records.borrow().clone()
	}
}

impl DiagSink for MemorySink {
	fn emit(&mut self, severity: Severity, message: &str) {
		self.records.borrow_mut().push((severity, message.to_owned()));
	}
}
