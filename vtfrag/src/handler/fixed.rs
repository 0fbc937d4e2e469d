use vtfrag_catalog::{ControlFunction, Environment, FunctionKind};

use super::{Failure, FunctionHandler, leading_chars};
use crate::fragment::FunctionFragment;

fn fixed_length(
    text: &str,
    chars: usize,
    function: ControlFunction,
    offset: usize,
) -> Result<FunctionFragment, Failure> {
    let raw = leading_chars(text, chars).ok_or(Failure::NoEndOfFunction)?;
    Ok(FunctionFragment::new(raw, offset, function, Vec::new()))
}

/// One character.
#[derive(Clone, Copy, Debug, Default)]
pub struct C0Handler;

impl FunctionHandler for C0Handler {
    fn kind(&self) -> FunctionKind {
        FunctionKind::C0
    }

    fn handle(
        &self,
        text: &str,
        function: ControlFunction,
        offset: usize,
    ) -> Result<FunctionFragment, Failure> {
        fixed_length(text, 1, function, offset)
    }
}

/// `ESC Fe` in the 7-bit environment, one character in the 8-bit one.
#[derive(Clone, Copy, Debug)]
pub struct C1Handler {
    environment: Environment,
}

impl C1Handler {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl FunctionHandler for C1Handler {
    fn kind(&self) -> FunctionKind {
        FunctionKind::C1
    }

    fn handle(
        &self,
        text: &str,
        function: ControlFunction,
        offset: usize,
    ) -> Result<FunctionFragment, Failure> {
        let chars = match self.environment {
            Environment::SevenBit => 2,
            Environment::EightBit => 1,
        };
        fixed_length(text, chars, function, offset)
    }
}

/// `ESC Fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndependentHandler;

impl FunctionHandler for IndependentHandler {
    fn kind(&self) -> FunctionKind {
        FunctionKind::Independent
    }

    fn handle(
        &self,
        text: &str,
        function: ControlFunction,
        offset: usize,
    ) -> Result<FunctionFragment, Failure> {
        fixed_length(text, 2, function, offset)
    }
}

#[cfg(test)]
mod tests {
    use vtfrag_catalog::{C0Function, C1Function, IndependentFunction};

    use super::*;

    #[test]
    fn c0_takes_one_character() {
        let fragment = C0Handler
            .handle("\x0babc", C0Function::LineTabulation.into(), 7)
            .unwrap();

        assert_eq!(fragment.text, "\x0b");
        assert_eq!((fragment.start, fragment.end), (7, 8));
        assert!(fragment.arguments.is_empty());
    }

    #[test]
    fn c1_length_depends_on_environment() {
        let nel = ControlFunction::from(C1Function::NextLine);

        let seven = C1Handler::new(Environment::SevenBit)
            .handle("\x1bEx", nel, 0)
            .unwrap();
        let eight = C1Handler::new(Environment::EightBit)
            .handle("\u{85}x", nel, 0)
            .unwrap();

        assert_eq!(seven.text, "\x1bE");
        assert_eq!(eight.text, "\u{85}");
        assert_eq!(seven.function, eight.function);
        assert_eq!(seven.arguments, eight.arguments);
    }

    #[test]
    fn truncated_input() {
        let cmd = ControlFunction::from(IndependentFunction::CodingMethodDelimiter);

        assert_eq!(
            IndependentHandler.handle("\x1b", cmd, 0),
            Err(Failure::NoEndOfFunction)
        );
        assert_eq!(
            C0Handler.handle("", C0Function::Bell.into(), 0),
            Err(Failure::NoEndOfFunction)
        );
    }
}
