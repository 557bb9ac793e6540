//! Output sink abstraction
//!
//! Replaces the process-global output binding with an injected dependency:
//! the checker writes to whatever implements [`Sink`], and tests hand it a
//! buffer to capture the exact bytes.

use std::io::Write;

/// Destination for harness output. Emission is infallible by contract; sinks
/// that can fail swallow the error (a lost diagnostic line must not turn into
/// a verdict of its own).
pub trait Sink {
    fn emit(&mut self, text: &str);
}

/// Process standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn emit(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
    }
}

/// Byte-capture sink for tests.
impl Sink for Vec<u8> {
    fn emit(&mut self, text: &str) {
        self.extend_from_slice(text.as_bytes());
    }
}

impl Sink for String {
    fn emit(&mut self, text: &str) {
        self.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_captures_bytes() {
        let mut buf = Vec::new();
        buf.emit("a");
        buf.emit("bc\n");
        assert_eq!(buf, b"abc\n");
    }

    #[test]
    fn string_sink_appends() {
        let mut s = String::new();
        s.emit("OK\n");
        assert_eq!(s, "OK\n");
    }
}
