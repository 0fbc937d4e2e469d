use std::{
    io::{self, Read},
    sync::Arc,
};

use log::{error, warn};

use crate::{
    decode::Decoder,
    engine::{Components, Engine},
    error::Result,
    fragment::Fragment,
};

/// Parser over a byte stream read in chunks.
///
/// A function whose end has not been read yet is delayed until the next
/// chunk arrives. The reader is dropped as soon as it is exhausted, fails,
/// or the parser is closed.
pub struct StreamParser<R: Read> {
    engine: Engine,
    reader: Option<R>,
    decoder: Decoder,
    chunk: Vec<u8>,
    exhausted: bool,
}

impl<R: Read> StreamParser<R> {
    pub(crate) fn new(components: Arc<Components>, reader: R) -> Self {
        let options = &components.options;
        let decoder = Decoder::new(options.encoding);
        let chunk = vec![0; options.read_buffer_size];

        Self {
            engine: Engine::new(components, String::new()),
            reader: Some(reader),
            decoder,
            chunk,
            exhausted: false,
        }
    }

    /// Next fragment, reading from the stream as needed.
    ///
    /// A decode error is returned once; the following call resumes after
    /// the offending function.
    pub fn next_fragment(&mut self) -> Result<Option<Fragment>> {
        loop {
            match self.engine.next(!self.exhausted) {
                Ok(Some(fragment)) => return Ok(Some(fragment)),
                Ok(None) if self.exhausted => return Ok(None),
                Ok(None) => self.fill(),
                Err(err) => {
                    warn!("skipping function: {err}");
                    return Err(err);
                },
            }
        }
    }

    /// Byte offset of the first unconsumed character.
    pub fn current_offset(&self) -> usize {
        self.engine.offset()
    }

    pub fn has_more_fragments(&self) -> bool {
        !self.exhausted || self.engine.has_unconsumed()
    }

    /// Release the reader. What is already buffered can still be parsed.
    pub fn close(&mut self) {
        self.reader = None;
        self.finish();
    }

    fn fill(&mut self) {
        let Some(reader) = self.reader.as_mut() else {
            self.finish();
            return;
        };

        let read = loop {
            match reader.read(&mut self.chunk) {
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                    continue;
                },
                result => break result,
            }
        };

        match read {
            Ok(0) => self.finish(),
            Ok(len) => {
                let text = self.decoder.decode(&self.chunk[..len]);
                self.engine.push_str(&text);
            },
            Err(err) => {
                error!("failed to read input: {err}");
                self.finish();
            },
        }
    }

    fn finish(&mut self) {
        self.reader = None;
        if self.exhausted {
            return;
        }
        self.exhausted = true;
        if let Some(c) = self.decoder.finish() {
            warn!("input ends inside a character");
            self.engine.push_str(c.encode_utf8(&mut [0; 4]));
        }
        if self.engine.is_delayed() {
            warn!(
                "input ends inside a function at {}",
                self.engine.offset()
            );
        }
    }
}

impl<R: Read> Iterator for StreamParser<R> {
    type Item = Result<Fragment>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_fragment().transpose()
    }
}
