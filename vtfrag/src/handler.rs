//! Extraction of a single function once its introducer is known.
mod fixed;
mod sequence;
mod string;

pub use fixed::{C0Handler, C1Handler, IndependentHandler};
pub use sequence::SequenceHandler;
pub use string::ControlStringHandler;

use thiserror::Error;

use crate::{
    ControlFunction, FunctionKind,
    error::DecodeError,
    fragment::{FunctionFragment, TextFragment},
};

/// Why a handler could not produce a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Well-formed function that is not in the catalog. `len` is the byte
    /// length of the whole sequence.
    #[error("unknown function spanning {len} bytes")]
    UnknownFunction { len: usize },

    /// The text ends before the function does.
    #[error("function is not terminated")]
    NoEndOfFunction,

    /// Recognised function with arguments that cannot be decoded.
    #[error("function spanning {len} bytes: {source}")]
    Decode { len: usize, source: DecodeError },
}

/// Turns the text starting at a function introducer into a fragment.
///
/// `text` starts at the introducer and runs to the end of the buffered
/// input, `offset` is the absolute position of the introducer.
pub trait FunctionHandler: Send + Sync {
    /// Kind of functions this handler accepts.
    fn kind(&self) -> FunctionKind;

    fn handle(
        &self,
        text: &str,
        function: ControlFunction,
        offset: usize,
    ) -> Result<FunctionFragment, Failure>;
}

/// Turns a run of plain characters into a fragment.
pub trait TextHandler: Send + Sync {
    fn handle(&self, text: &str, offset: usize) -> Result<TextFragment, Failure>;
}

/// Emits text unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTextHandler;

impl TextHandler for DefaultTextHandler {
    fn handle(&self, text: &str, offset: usize) -> Result<TextFragment, Failure> {
        Ok(TextFragment::new(text, offset))
    }
}

/// Prefix of `text` holding its first `count` characters.
fn leading_chars(text: &str, count: usize) -> Option<&str> {
    let mut end = 0;
    let mut chars = text.chars();
    for _ in 0..count {
        end += chars.next()?.len_utf8();
    }
    Some(&text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_chars_respects_boundaries() {
        assert_eq!(leading_chars("\u{85}abc", 2), Some("\u{85}a"));
        assert_eq!(leading_chars("\x1b", 2), None);
        assert_eq!(leading_chars("", 0), Some(""));
    }

    #[test]
    fn default_text_handler() {
        let fragment = DefaultTextHandler.handle("héllo", 3).unwrap();
        assert_eq!(fragment, TextFragment::new("héllo", 3));
        assert_eq!(fragment.end, 9);
    }
}
