use std::{collections::HashMap, fmt};

use log::debug;
use vtfrag_catalog::{C1Function, ESC, SequenceFunction};

use crate::error::{Error, PatternError, Result};

/// Parameter placeholder of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    /// `{s}`, a single numeric parameter.
    Single,
    /// `{m}`, a selective list of parameters.
    Multiple,
    /// `{c}`, a single character.
    Character,
    /// `{t}`, free text.
    Text,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "s" => Some(Placeholder::Single),
            "m" => Some(Placeholder::Multiple),
            "c" => Some(Placeholder::Character),
            "t" => Some(Placeholder::Text),
            _ => None,
        }
    }
}

/// Token of a compiled pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Code {
    Digits(String),
    Parameter(Placeholder),
    /// `;` between parameters.
    Separator,
    Literal(char),
}

/// Identifies a control sequence by its last intermediate byte and its
/// final byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SequenceKey {
    pub intermediate: Option<char>,
    pub final_byte: char,
}

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`")?;
        if let Some(intermediate) = self.intermediate {
            write!(f, "{}", intermediate.escape_debug())?;
        }
        write!(f, "{}`", self.final_byte.escape_debug())
    }
}

/// Compiled pattern of a control sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDescriptor {
    function: SequenceFunction,
    codes: Vec<Code>,
    key: SequenceKey,
}

impl FunctionDescriptor {
    pub fn compile(function: SequenceFunction) -> Result<Self, PatternError> {
        let codes = tokenize(function.pattern())?;
        let key = key_of(function.pattern(), &codes)?;
        Ok(Self {
            function,
            codes,
            key,
        })
    }

    pub fn function(&self) -> SequenceFunction {
        self.function
    }

    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Placeholders of the pattern in order.
    pub fn parameters(&self) -> Vec<Placeholder> {
        self.codes
            .iter()
            .filter_map(|code| match code {
                Code::Parameter(placeholder) => Some(*placeholder),
                _ => None,
            })
            .collect()
    }

    pub fn key(&self) -> SequenceKey {
        self.key
    }
}

fn tokenize(pattern: &str) -> Result<Vec<Code>, PatternError> {
    let mut codes = Vec::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match c {
            '0'..='9' => {
                let mut digits = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    digits.push(next);
                    chars.next();
                }
                codes.push(Code::Digits(digits));
            },
            '{' => {
                let Some(close) = pattern[index..].find('}') else {
                    return Err(PatternError::UnclosedPlaceholder {
                        pattern: pattern.to_string(),
                        position: index,
                    });
                };
                let name = &pattern[index + 1..index + close];
                let placeholder = Placeholder::from_name(name).ok_or_else(
                    || PatternError::UnknownPlaceholder {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    },
                )?;
                codes.push(Code::Parameter(placeholder));
                for (position, _) in chars.by_ref() {
                    if position == index + close {
                        break;
                    }
                }
            },
            ';' => codes.push(Code::Separator),
            other => codes.push(Code::Literal(other)),
        }
    }

    Ok(codes)
}

fn key_of(pattern: &str, codes: &[Code]) -> Result<SequenceKey, PatternError> {
    match codes {
        [.., Code::Literal(intermediate), Code::Literal(final_byte)]
            if is_intermediate(*intermediate) && is_final(*final_byte) =>
        {
            Ok(SequenceKey {
                intermediate: Some(*intermediate),
                final_byte: *final_byte,
            })
        },
        [.., Code::Literal(final_byte)] if is_final(*final_byte) => {
            Ok(SequenceKey {
                intermediate: None,
                final_byte: *final_byte,
            })
        },
        _ => Err(PatternError::MissingFinalByte {
            pattern: pattern.to_string(),
        }),
    }
}

pub(crate) fn is_intermediate(c: char) -> bool {
    ('\u{20}'..='\u{2f}').contains(&c)
}

pub(crate) fn is_final(c: char) -> bool {
    ('\u{40}'..='\u{7e}').contains(&c)
}

/// Outcome of matching text that starts with a control sequence
/// introducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceMatch<'a> {
    Matched {
        descriptor: &'a FunctionDescriptor,
        /// Parameter bytes between the introducer and the first
        /// intermediate or final byte.
        parameters: &'a str,
        len: usize,
    },
    /// Well-formed sequence without a catalog entry.
    Unknown { len: usize },
    /// The text ends before the final byte.
    Incomplete,
}

/// Lookup table from sequence keys to compiled patterns.
#[derive(Clone, Debug)]
pub struct SequenceMatcher {
    descriptors: HashMap<SequenceKey, FunctionDescriptor>,
}

impl SequenceMatcher {
    /// Compile every function. Two functions with the same key are a
    /// configuration error.
    pub fn new(functions: &[SequenceFunction]) -> Result<Self> {
        let mut descriptors: HashMap<SequenceKey, FunctionDescriptor> =
            HashMap::with_capacity(functions.len());

        for &function in functions {
            let descriptor = FunctionDescriptor::compile(function)?;
            let key = descriptor.key();
            if let Some(existing) = descriptors.get(&key) {
                return Err(Error::DuplicateKey {
                    key,
                    existing: existing.function().into(),
                    function: function.into(),
                });
            }
            descriptors.insert(key, descriptor);
        }

        debug!("compiled {} control sequence descriptors", descriptors.len());
        Ok(Self { descriptors })
    }

    pub fn descriptor(&self, key: &SequenceKey) -> Option<&FunctionDescriptor> {
        self.descriptors.get(key)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Match the control sequence at the start of `text`.
    ///
    /// Both `ESC [` and the 8-bit CSI introduce a sequence. Text without
    /// an introducer is reported as unknown, one character long.
    pub fn match_at<'a>(&'a self, text: &'a str) -> SequenceMatch<'a> {
        let Some(introducer) = introducer_len(text) else {
            let len = text.chars().next().map_or(0, char::len_utf8);
            return SequenceMatch::Unknown { len };
        };
        let body = &text[introducer..];
        let mut first_intermediate = None;
        let mut last_intermediate = None;

        for (index, c) in body.char_indices() {
            if is_intermediate(c) {
                first_intermediate.get_or_insert(index);
                last_intermediate = Some(c);
            } else if is_final(c) {
                let len = introducer + index + c.len_utf8();
                let key = SequenceKey {
                    intermediate: last_intermediate,
                    final_byte: c,
                };
                return match self.descriptors.get(&key) {
                    Some(descriptor) => SequenceMatch::Matched {
                        descriptor,
                        parameters: &body[..first_intermediate.unwrap_or(index)],
                        len,
                    },
                    None => SequenceMatch::Unknown { len },
                };
            }
        }

        SequenceMatch::Incomplete
    }
}

fn introducer_len(text: &str) -> Option<usize> {
    let csi = C1Function::ControlSequenceIntroducer;
    let mut chars = text.chars();
    match chars.next()? {
        ESC if chars.next() == Some(csi.final_char()) => Some(2),
        c if u32::from(c) == u32::from(csi.code()) => Some(c.len_utf8()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SequenceMatcher {
        SequenceMatcher::new(&SequenceFunction::ALL).unwrap()
    }

    #[test]
    fn compile_single_parameter() {
        let descriptor = FunctionDescriptor::compile(
            SequenceFunction::CursorBackwardTabulation,
        )
        .unwrap();

        assert_eq!(
            descriptor.codes(),
            &[Code::Parameter(Placeholder::Single), Code::Literal('Z')]
        );
        assert_eq!(descriptor.parameters(), vec![Placeholder::Single]);
        assert_eq!(
            descriptor.key(),
            SequenceKey {
                intermediate: None,
                final_byte: 'Z'
            }
        );
    }

    #[test]
    fn compile_with_intermediate() {
        let descriptor =
            FunctionDescriptor::compile(SequenceFunction::DimensionTextArea)
                .unwrap();

        assert_eq!(
            descriptor.codes(),
            &[
                Code::Parameter(Placeholder::Single),
                Code::Separator,
                Code::Parameter(Placeholder::Single),
                Code::Literal(' '),
                Code::Literal('T'),
            ]
        );
        assert_eq!(descriptor.key().intermediate, Some(' '));
    }

    #[test]
    fn tokenize_digits_and_errors() {
        assert_eq!(
            tokenize("12{m}x").unwrap(),
            vec![
                Code::Digits("12".into()),
                Code::Parameter(Placeholder::Multiple),
                Code::Literal('x'),
            ]
        );
        assert_eq!(
            tokenize("{s").unwrap_err(),
            PatternError::UnclosedPlaceholder {
                pattern: "{s".into(),
                position: 0
            }
        );
        assert!(matches!(
            tokenize("{q}m"),
            Err(PatternError::UnknownPlaceholder { .. })
        ));
        assert!(matches!(
            key_of("{s}", &tokenize("{s}").unwrap()),
            Err(PatternError::MissingFinalByte { .. })
        ));
    }

    #[test]
    fn catalog_compiles_without_duplicates() {
        assert_eq!(matcher().len(), SequenceFunction::ALL.len());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = SequenceMatcher::new(&[
            SequenceFunction::SelectGraphicRendition,
            SequenceFunction::SelectGraphicRendition,
        ])
        .unwrap_err();

        assert!(matches!(err, Error::DuplicateKey { .. }));
    }

    #[test]
    fn match_sequences() {
        let matcher = matcher();

        match matcher.match_at("\x1b[12Z") {
            SequenceMatch::Matched {
                descriptor,
                parameters,
                len,
            } => {
                assert_eq!(
                    descriptor.function(),
                    SequenceFunction::CursorBackwardTabulation
                );
                assert_eq!(parameters, "12");
                assert_eq!(len, 5);
            },
            other => panic!("unexpected match: {other:?}"),
        }

        match matcher.match_at("\x1b[28;14 T tail") {
            SequenceMatch::Matched {
                descriptor,
                parameters,
                len,
            } => {
                assert_eq!(
                    descriptor.function(),
                    SequenceFunction::DimensionTextArea
                );
                assert_eq!(parameters, "28;14");
                assert_eq!(len, 9);
            },
            other => panic!("unexpected match: {other:?}"),
        }
    }

    #[test]
    fn match_eight_bit_introducer() {
        let matcher = matcher();
        let SequenceMatch::Matched { descriptor, len, .. } =
            matcher.match_at("\u{9b}33m")
        else {
            panic!("SGR expected");
        };

        assert_eq!(descriptor.function(), SequenceFunction::SelectGraphicRendition);
        assert_eq!(len, 5);
    }

    #[test]
    fn unknown_and_incomplete() {
        let matcher = matcher();

        assert_eq!(
            matcher.match_at("\x1b[1 z"),
            SequenceMatch::Unknown { len: 5 }
        );
        assert_eq!(matcher.match_at("\x1b[12;"), SequenceMatch::Incomplete);
        assert_eq!(matcher.match_at("\x1b["), SequenceMatch::Incomplete);
        assert_eq!(matcher.match_at("abc"), SequenceMatch::Unknown { len: 1 });
    }
}
