use serde::{Deserialize, Serialize};

use crate::{
    Environment,
    error::{Error, Result},
};

/// Configuration shared by every parser a factory creates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Coding environment of the parsed text.
    pub environment: Environment,
    /// Character encoding of streamed input.
    pub encoding: Encoding,
    /// Size of the buffer used for each read from a stream.
    pub read_buffer_size: usize,
    /// What to do with sequences that cannot be recognised.
    pub unrecognized: UnrecognizedPolicy,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            environment: Environment::SevenBit,
            encoding: Encoding::Utf8,
            read_buffer_size: 1024,
            unrecognized: UnrecognizedPolicy::Discard,
        }
    }
}

impl ParserOptions {
    /// Read options from JSON, missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.read_buffer_size == 0 {
            return Err(Error::InvalidOptions(
                "read_buffer_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Character encoding of a byte stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    #[default]
    Utf8,
    /// ISO 8859-1, one byte per character.
    Latin1,
}

/// Treatment of unknown and unterminated functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedPolicy {
    /// Drop the bytes of the sequence.
    #[default]
    Discard,
    /// Emit the bytes of the sequence as a text fragment.
    EmitText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let options =
            ParserOptions::from_json(r#"{ "environment": "eight_bit" }"#)
                .unwrap();

        assert_eq!(options.environment, Environment::EightBit);
        assert_eq!(options.encoding, Encoding::Utf8);
        assert_eq!(options.read_buffer_size, 1024);
        assert_eq!(options.unrecognized, UnrecognizedPolicy::Discard);
    }

    #[test]
    fn all_fields() {
        let json = r#"{
            "environment": "seven_bit",
            "encoding": "latin1",
            "read_buffer_size": 6,
            "unrecognized": "emit_text"
        }"#;
        let options = ParserOptions::from_json(json).unwrap();

        assert_eq!(options.encoding, Encoding::Latin1);
        assert_eq!(options.read_buffer_size, 6);
        assert_eq!(options.unrecognized, UnrecognizedPolicy::EmitText);
    }

    #[test]
    fn rejects_empty_read_buffer() {
        let err = ParserOptions::from_json(r#"{ "read_buffer_size": 0 }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));

        let err = ParserOptions::from_json(r#"{ "environment": 7 }"#)
            .unwrap_err();
        assert!(matches!(err, Error::Options(_)));
    }
}
