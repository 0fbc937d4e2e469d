use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::{C0Function, C1Function, IndependentFunction, SequenceFunction};

/// Coding environment of the text being parsed.
///
/// In the 7-bit environment C1 functions are written as `ESC Fe`, in the
/// 8-bit environment as a single code in the `0x80..=0x9F` range.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    SevenBit,
    EightBit,
}

/// Structural kind of a control function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    /// Single code in the `0x00..=0x1F` range.
    C0,
    /// C1 function that is neither a sequence nor a string opener.
    C1,
    /// `ESC Fs` function independent of any C0 or C1 set.
    Independent,
    /// Introduced by CSI, closed by a final byte.
    ControlSequence,
    /// Opened by APC, DCS, OSC, PM or SOS, closed by ST.
    ControlString,
}

/// Any control function of the catalog.
///
/// Serializes as its mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlFunction {
    C0(C0Function),
    C1(C1Function),
    Independent(IndependentFunction),
    Sequence(SequenceFunction),
}

impl ControlFunction {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            ControlFunction::C0(function) => function.mnemonic(),
            ControlFunction::C1(function) => function.mnemonic(),
            ControlFunction::Independent(function) => function.mnemonic(),
            ControlFunction::Sequence(function) => function.mnemonic(),
        }
    }

    /// Kind of the function. C1 string openers and CSI report the kind of
    /// the construct they open.
    pub fn kind(&self) -> FunctionKind {
        match self {
            ControlFunction::C0(_) => FunctionKind::C0,
            ControlFunction::C1(function) => {
                if *function == C1Function::ControlSequenceIntroducer {
                    FunctionKind::ControlSequence
                } else if function.is_string_opener() {
                    FunctionKind::ControlString
                } else {
                    FunctionKind::C1
                }
            },
            ControlFunction::Independent(_) => FunctionKind::Independent,
            ControlFunction::Sequence(_) => FunctionKind::ControlSequence,
        }
    }

    /// Pattern the function is written with in the given environment.
    pub fn pattern(&self, environment: Environment) -> String {
        match self {
            ControlFunction::C0(function) => char::from(function.code()).into(),
            ControlFunction::C1(function) => function.encoded(environment),
            ControlFunction::Independent(function) => function.encoded(),
            ControlFunction::Sequence(function) => {
                let mut pattern =
                    C1Function::ControlSequenceIntroducer.encoded(environment);
                pattern.push_str(function.pattern());
                pattern
            },
        }
    }

    /// Positional default values. Only control sequences declare any.
    pub fn default_values(&self) -> &'static [Option<i64>] {
        match self {
            ControlFunction::Sequence(function) => function.default_values(),
            _ => &[],
        }
    }
}

impl fmt::Display for ControlFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl Serialize for ControlFunction {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.mnemonic())
    }
}

impl From<C0Function> for ControlFunction {
    fn from(function: C0Function) -> Self {
        ControlFunction::C0(function)
    }
}

impl From<C1Function> for ControlFunction {
    fn from(function: C1Function) -> Self {
        ControlFunction::C1(function)
    }
}

impl From<IndependentFunction> for ControlFunction {
    fn from(function: IndependentFunction) -> Self {
        ControlFunction::Independent(function)
    }
}

impl From<SequenceFunction> for ControlFunction {
    fn from(function: SequenceFunction) -> Self {
        ControlFunction::Sequence(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c1_kind_follows_construct() {
        let csi = ControlFunction::from(C1Function::ControlSequenceIntroducer);
        let osc = ControlFunction::from(C1Function::OperatingSystemCommand);
        let nel = ControlFunction::from(C1Function::NextLine);

        assert_eq!(csi.kind(), FunctionKind::ControlSequence);
        assert_eq!(osc.kind(), FunctionKind::ControlString);
        assert_eq!(nel.kind(), FunctionKind::C1);
    }

    #[test]
    fn pattern_depends_on_environment() {
        let sgr = ControlFunction::from(SequenceFunction::SelectGraphicRendition);

        assert_eq!(sgr.pattern(Environment::SevenBit), "\u{1b}[{m}m");
        assert_eq!(sgr.pattern(Environment::EightBit), "\u{9b}{m}m");
        assert_eq!(sgr.default_values(), &[Some(0)]);
        assert_eq!(sgr.to_string(), "SGR");
    }

    #[test]
    fn only_sequences_declare_defaults() {
        let bel = ControlFunction::from(C0Function::Bell);
        assert!(bel.default_values().is_empty());
        assert_eq!(bel.pattern(Environment::SevenBit), "\u{7}");
    }
}
