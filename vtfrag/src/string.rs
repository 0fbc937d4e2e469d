use std::sync::Arc;

use crate::{
    engine::{Components, Engine},
    error::Result,
    fragment::Fragment,
};

/// Parser over a complete string.
///
/// Nothing will follow the string, so a function that is not terminated
/// is unrecognized. Parsing stops at the first error.
pub struct StringParser {
    engine: Engine,
    failed: bool,
}

impl StringParser {
    pub(crate) fn new(components: Arc<Components>, text: String) -> Self {
        Self {
            engine: Engine::new(components, text),
            failed: false,
        }
    }

    pub fn next_fragment(&mut self) -> Result<Option<Fragment>> {
        if self.failed {
            return Ok(None);
        }
        self.engine.next(false).inspect_err(|_| self.failed = true)
    }

    /// Byte offset of the first unconsumed character.
    pub fn current_offset(&self) -> usize {
        self.engine.offset()
    }

    pub fn has_more_fragments(&self) -> bool {
        !self.failed && self.engine.has_unconsumed()
    }
}

impl Iterator for StringParser {
    type Item = Result<Fragment>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_fragment().transpose()
    }
}
