use std::{collections::HashMap, sync::Arc};

use log::{debug, trace, warn};
use vtfrag_catalog::{C0Function, ControlFunction, FunctionKind};

use crate::{
    error::{DecodeError, Error, Result},
    finder::{Finder, FinderResult},
    fragment::{Fragment, FunctionFragment},
    handler::{Failure, FunctionHandler, TextHandler},
    options::{ParserOptions, UnrecognizedPolicy},
};

/// Immutable parts shared by every parser of a factory.
pub(crate) struct Components {
    pub(crate) options: ParserOptions,
    pub(crate) finder: Finder,
    pub(crate) handlers: HashMap<FunctionKind, Box<dyn FunctionHandler>>,
    pub(crate) text_handler: Box<dyn TextHandler>,
}

/// Function found in the buffer but not emitted yet.
enum Pending {
    /// Its end is not buffered yet.
    Delayed(FinderResult),
    /// Completed while text before it was emitted.
    Completed(FunctionFragment),
}

/// Outcome of scanning the unconsumed text once.
enum Scan {
    NotFound,
    Found { at: usize, fragment: FunctionFragment },
    Delayed(FinderResult),
    /// Span to drop, or to emit as text depending on the policy.
    Unrecognized { at: usize, len: usize },
    Failed { at: usize, len: usize, source: DecodeError },
}

/// Pull loop turning buffered text into fragments.
///
/// `text[cursor..]` is the unconsumed input, `base` is the absolute offset
/// of `text[0]`.
pub(crate) struct Engine {
    components: Arc<Components>,
    text: String,
    base: usize,
    cursor: usize,
    pending: Option<Pending>,
    /// Span at the cursor to get rid of before anything else.
    unrecognized: Option<usize>,
}

impl Engine {
    pub(crate) fn new(components: Arc<Components>, text: String) -> Self {
        Self {
            components,
            text,
            base: 0,
            cursor: 0,
            pending: None,
            unrecognized: None,
        }
    }

    /// Absolute offset of the first unconsumed byte.
    pub(crate) fn offset(&self) -> usize {
        self.base + self.cursor
    }

    pub(crate) fn has_unconsumed(&self) -> bool {
        self.cursor < self.text.len()
    }

    pub(crate) fn is_delayed(&self) -> bool {
        matches!(self.pending, Some(Pending::Delayed(_)))
    }

    /// Append decoded input, dropping what was consumed already.
    pub(crate) fn push_str(&mut self, chunk: &str) {
        self.text.drain(..self.cursor);
        self.base += self.cursor;
        self.cursor = 0;
        self.text.push_str(chunk);
    }

    /// Produce the next fragment.
    ///
    /// With `delay` set, a function whose end is not buffered yet stays
    /// pending and `None` is returned once the text before it has been
    /// emitted. Without it the introducer is unrecognized and the text
    /// after it is scanned again.
    pub(crate) fn next(&mut self, delay: bool) -> Result<Option<Fragment>> {
        if let Some(fragment) = self.take_unrecognized()? {
            return Ok(Some(fragment));
        }
        match self.pending.take() {
            Some(Pending::Completed(fragment)) => {
                self.cursor += fragment.end - fragment.start;
                return Ok(Some(Fragment::Function(fragment)));
            },
            Some(Pending::Delayed(result)) => {
                trace!("retrying {} at {}", result.function, self.offset());
            },
            None => {},
        }

        while self.has_unconsumed() {
            match self.scan(delay) {
                Scan::NotFound => {
                    let len = self.text.len() - self.cursor;
                    return self.emit_text(len).map(Some);
                },
                Scan::Found { at: 0, fragment } => {
                    self.cursor += fragment.end - fragment.start;
                    return Ok(Some(Fragment::Function(fragment)));
                },
                Scan::Found { at, fragment } => {
                    self.pending = Some(Pending::Completed(fragment));
                    return self.emit_text(at).map(Some);
                },
                Scan::Delayed(result) => {
                    trace!("delaying {} at {}", result.function, self.offset());
                    let at = result.offset;
                    self.pending = Some(Pending::Delayed(result));
                    if at == 0 {
                        return Ok(None);
                    }
                    return self.emit_text(at).map(Some);
                },
                Scan::Unrecognized { at, len } => {
                    debug!(
                        "unrecognized {len} bytes at {}",
                        self.offset() + at
                    );
                    if at > 0 {
                        self.unrecognized = Some(len);
                        return self.emit_text(at).map(Some);
                    }
                    self.unrecognized = Some(len);
                    if let Some(fragment) = self.take_unrecognized()? {
                        return Ok(Some(fragment));
                    }
                },
                Scan::Failed { at, .. } if at > 0 => {
                    // the function fails again once it is at the cursor
                    return self.emit_text(at).map(Some);
                },
                Scan::Failed { len, source, .. } => {
                    let offset = self.offset();
                    self.unrecognized = Some(len);
                    return Err(Error::Decode { offset, source });
                },
            }
        }

        Ok(None)
    }

    fn scan(&self, delay: bool) -> Scan {
        let rest = &self.text[self.cursor..];
        let Some(found) = self.components.finder.find(0, rest) else {
            return Scan::NotFound;
        };
        let at = found.offset;
        let candidate = &rest[at..];

        // ESC at the end of the buffer may still become a longer function
        if delay
            && found.function == ControlFunction::C0(C0Function::Escape)
            && candidate.len() == found.len
        {
            return Scan::Delayed(found);
        }

        let Some(handler) = self.components.handlers.get(&found.kind) else {
            warn!("no handler for {:?} functions", found.kind);
            return Scan::Unrecognized { at, len: found.len };
        };

        match handler.handle(candidate, found.function, self.offset() + at) {
            Ok(fragment) => Scan::Found { at, fragment },
            Err(Failure::UnknownFunction { len }) => Scan::Unrecognized {
                at,
                len: len.clamp(found.len, candidate.len()),
            },
            Err(Failure::NoEndOfFunction) if delay => Scan::Delayed(found),
            // only the introducer goes, the rest is scanned again
            Err(Failure::NoEndOfFunction) => Scan::Unrecognized {
                at,
                len: found.len,
            },
            Err(Failure::Decode { len, source }) => Scan::Failed {
                at,
                len: len.clamp(found.len, candidate.len()),
                source,
            },
        }
    }

    /// Consume the unrecognized span at the cursor. It goes through the
    /// text handler when the policy keeps it as text.
    fn take_unrecognized(&mut self) -> Result<Option<Fragment>> {
        let Some(len) = self.unrecognized.take() else {
            return Ok(None);
        };
        match self.components.options.unrecognized {
            UnrecognizedPolicy::Discard => {
                self.cursor += len;
                Ok(None)
            },
            UnrecognizedPolicy::EmitText => self.emit_text(len).map(Some),
        }
    }

    fn emit_text(&mut self, len: usize) -> Result<Fragment> {
        let offset = self.offset();
        let text = &self.text[self.cursor..self.cursor + len];
        let handled = self.components.text_handler.handle(text, offset);
        self.cursor += len;
        handled
            .map(Fragment::Text)
            .map_err(|failure| Error::Text { offset, failure })
    }
}
