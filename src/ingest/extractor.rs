//! Pull-based reader for buffers holding back-to-back JSON values with no
//! separators between them.
//!
//! Decoding starts at the first `{` in the buffer. Each call to `next()`
//! decodes one complete value at the cursor, advances past it and skips any
//! whitespace. The first decode failure ends the stream; whatever follows
//! (comments, truncated fragments) is dropped without an error.

use serde_json::Value;
use tracing::warn;

pub struct ValueStream<'a> {
    buf: &'a str,
    offset: usize,
    exhausted: bool,
}

impl<'a> ValueStream<'a> {
    pub fn new(buf: &'a str) -> Self {
        match buf.find('{') {
            Some(start) => Self { buf, offset: start, exhausted: false },
            None => Self { buf, offset: buf.len(), exhausted: true },
        }
    }

    /// Byte offset of the cursor into the original buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Content not yet consumed. After exhaustion this is the discarded tail.
    pub fn remainder(&self) -> &'a str {
        &self.buf[self.offset..]
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.buf[self.offset..];
        let trimmed = rest.trim_start_matches(char::is_whitespace);
        self.offset += rest.len() - trimmed.len();
    }
}

impl<'a> Iterator for ValueStream<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        if self.exhausted || self.offset >= self.buf.len() {
            self.exhausted = true;
            return None;
        }

        let rest = &self.buf[self.offset..];
        let mut decoder = serde_json::Deserializer::from_str(rest).into_iter::<Value>();
        match decoder.next() {
            Some(Ok(value)) => {
                self.offset += decoder.byte_offset();
                self.skip_whitespace();
                Some(value)
            }
            Some(Err(err)) => {
                warn!(
                    offset = self.offset,
                    discarded_bytes = rest.len(),
                    error = %err,
                    "Stopping value extraction; discarding trailing content"
                );
                self.exhausted = true;
                None
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

/// Collect every value the stream yields.
pub fn extract_values(buf: &str) -> Vec<Value> {
    ValueStream::new(buf).collect()
}
