use memchr::memmem;
use vtfrag_catalog::{C1Function, ControlFunction, Environment, FunctionKind};

use super::{Failure, FunctionHandler, leading_chars};
use crate::fragment::{ArgumentValue, FunctionArgument, FunctionFragment};

/// Control strings: an opening delimiter, a payload and ST.
///
/// The payload is split on `;` into text arguments, never defaulted.
#[derive(Clone, Debug)]
pub struct ControlStringHandler {
    environment: Environment,
    terminator: String,
}

impl ControlStringHandler {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            terminator: C1Function::StringTerminator.encoded(environment),
        }
    }
}

impl FunctionHandler for ControlStringHandler {
    fn kind(&self) -> FunctionKind {
        FunctionKind::ControlString
    }

    fn handle(
        &self,
        text: &str,
        function: ControlFunction,
        offset: usize,
    ) -> Result<FunctionFragment, Failure> {
        let opener_chars = match self.environment {
            Environment::SevenBit => 2,
            Environment::EightBit => 1,
        };
        let opener = leading_chars(text, opener_chars)
            .ok_or(Failure::NoEndOfFunction)?
            .len();
        let payload_len =
            memmem::find(text[opener..].as_bytes(), self.terminator.as_bytes())
                .ok_or(Failure::NoEndOfFunction)?;

        let payload = &text[opener..opener + payload_len];
        let len = opener + payload_len + self.terminator.len();
        let arguments = payload
            .split(';')
            .map(|segment| {
                FunctionArgument::new(ArgumentValue::Text(segment.into()), false)
            })
            .collect();

        Ok(FunctionFragment::new(&text[..len], offset, function, arguments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_args(fragment: &FunctionFragment) -> Vec<&str> {
        fragment
            .arguments
            .iter()
            .map(|argument| {
                assert!(!argument.is_default);
                argument.value.as_str().unwrap()
            })
            .collect()
    }

    #[test]
    fn seven_bit_osc() {
        let osc = ControlFunction::from(C1Function::OperatingSystemCommand);
        let fragment = ControlStringHandler::new(Environment::SevenBit)
            .handle("\x1b]4;6;some text\x1b\\ abc", osc, 14)
            .unwrap();

        assert_eq!(fragment.text, "\x1b]4;6;some text\x1b\\");
        assert_eq!(fragment.start, 14);
        assert_eq!(fragment.end, 14 + fragment.text.len());
        assert_eq!(text_args(&fragment), ["4", "6", "some text"]);
    }

    #[test]
    fn eight_bit_osc() {
        let osc = ControlFunction::from(C1Function::OperatingSystemCommand);
        let fragment = ControlStringHandler::new(Environment::EightBit)
            .handle("\u{9d}0;title\u{9c}rest", osc, 0)
            .unwrap();

        assert_eq!(fragment.text, "\u{9d}0;title\u{9c}");
        assert_eq!(text_args(&fragment), ["0", "title"]);
    }

    #[test]
    fn empty_segments_are_kept() {
        let dcs = ControlFunction::from(C1Function::DeviceControlString);
        let fragment = ControlStringHandler::new(Environment::SevenBit)
            .handle("\x1bP;a;\x1b\\", dcs, 0)
            .unwrap();

        assert_eq!(text_args(&fragment), ["", "a", ""]);
    }

    #[test]
    fn missing_terminator() {
        let pm = ControlFunction::from(C1Function::PrivacyMessage);
        let handler = ControlStringHandler::new(Environment::SevenBit);

        assert_eq!(
            handler.handle("\x1b^secret\x1b", pm, 0),
            Err(Failure::NoEndOfFunction)
        );
        assert_eq!(handler.handle("\x1b", pm, 0), Err(Failure::NoEndOfFunction));
    }
}
