use utf8parse::Receiver;

use crate::options::Encoding;

/// Incremental decoder for streamed bytes.
///
/// A multi-byte character split across reads is held back until its last
/// byte arrives.
pub(crate) enum Decoder {
    Utf8(Utf8Decoder),
    Latin1,
}

impl Decoder {
    pub(crate) fn new(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Utf8 => Decoder::Utf8(Utf8Decoder::default()),
            Encoding::Latin1 => Decoder::Latin1,
        }
    }

    pub(crate) fn decode(&mut self, bytes: &[u8]) -> String {
        match self {
            Decoder::Utf8(decoder) => decoder.decode(bytes),
            Decoder::Latin1 => bytes.iter().copied().map(char::from).collect(),
        }
    }

    /// Flush at end of input. An incomplete character becomes U+FFFD.
    pub(crate) fn finish(&mut self) -> Option<char> {
        match self {
            Decoder::Utf8(decoder) => decoder.finish(),
            Decoder::Latin1 => None,
        }
    }
}

#[derive(Default)]
pub(crate) struct Utf8Decoder {
    parser: utf8parse::Parser,
    /// Bytes of the character being assembled.
    pending: usize,
}

impl Utf8Decoder {
    fn decode(&mut self, bytes: &[u8]) -> String {
        let mut sink = Sink {
            out: String::with_capacity(bytes.len()),
            emitted: false,
        };
        for &byte in bytes {
            sink.emitted = false;
            self.parser.advance(&mut sink, byte);
            if sink.emitted {
                self.pending = 0;
            } else {
                self.pending += 1;
            }
        }
        sink.out
    }

    fn finish(&mut self) -> Option<char> {
        if self.pending == 0 {
            return None;
        }
        self.pending = 0;
        self.parser = utf8parse::Parser::new();
        Some(char::REPLACEMENT_CHARACTER)
    }
}

struct Sink {
    out: String,
    emitted: bool,
}

impl Receiver for Sink {
    fn codepoint(&mut self, c: char) {
        self.out.push(c);
        self.emitted = true;
    }

    fn invalid_sequence(&mut self) {
        self.codepoint(char::REPLACEMENT_CHARACTER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_character_is_held_back() {
        let mut decoder = Decoder::new(Encoding::Utf8);
        let bytes = "a\u{9d}é".as_bytes();

        assert_eq!(decoder.decode(&bytes[..2]), "a");
        assert_eq!(decoder.decode(&bytes[2..4]), "\u{9d}");
        assert_eq!(decoder.decode(&bytes[4..]), "é");
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn incomplete_tail_is_replaced() {
        let mut decoder = Decoder::new(Encoding::Utf8);

        assert_eq!(decoder.decode(&[b'x', 0xE2, 0x82]), "x");
        assert_eq!(decoder.finish(), Some(char::REPLACEMENT_CHARACTER));
        assert_eq!(decoder.decode(b"ok"), "ok");
    }

    #[test]
    fn invalid_bytes() {
        let mut decoder = Decoder::new(Encoding::Utf8);
        assert_eq!(decoder.decode(&[0xFF]), "\u{fffd}");
    }

    #[test]
    fn latin1_maps_bytes() {
        let mut decoder = Decoder::new(Encoding::Latin1);
        assert_eq!(decoder.decode(&[b'a', 0x9B, 0xE9]), "a\u{9b}é");
        assert_eq!(decoder.finish(), None);
    }
}
