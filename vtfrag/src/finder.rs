use log::debug;
use vtfrag_catalog::{
    C0Function, C1Function, ControlFunction, ESC, Environment, FunctionKind,
    IndependentFunction,
};

/// Introducer of a function found in text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinderResult {
    /// Byte offset of the introducer in the scanned text.
    pub offset: usize,
    /// Byte length of the introducer.
    pub len: usize,
    pub kind: FunctionKind,
    /// The function itself for C0, C1 and independent functions, CSI or
    /// the string opener for sequences and strings.
    pub function: ControlFunction,
}

/// Locates the next function introducer in text.
///
/// Lookup tables are built once for an environment and never change, so
/// one finder can serve any number of parsers.
#[derive(Clone, Debug)]
pub struct Finder {
    environment: Environment,
    c0: [Option<C0Function>; 0x20],
    /// C1 by 8-bit code, indexed from `0x80`.
    c1_codes: [Option<C1Function>; 0x20],
    /// C1 by 7-bit final character, indexed from `0x40`.
    c1_finals: [Option<C1Function>; 0x20],
    /// Independent functions by final character, indexed from `0x60`.
    independent: [Option<IndependentFunction>; 0x20],
}

impl Finder {
    pub fn new(environment: Environment) -> Self {
        let mut c0 = [None; 0x20];
        for function in C0Function::ALL {
            if function.environment().is_none_or(|env| env == environment) {
                c0[usize::from(function.code())] = Some(function);
            }
        }

        let mut c1_codes = [None; 0x20];
        let mut c1_finals = [None; 0x20];
        for function in C1Function::ALL {
            c1_codes[usize::from(function.code() - 0x80)] = Some(function);
            c1_finals[function.final_char() as usize - 0x40] = Some(function);
        }

        let mut independent = [None; 0x20];
        for function in IndependentFunction::ALL {
            independent[function.final_char() as usize - 0x60] = Some(function);
        }

        debug!(
            "finder for {environment:?}: {} C0, {} C1, {} independent functions",
            c0.iter().flatten().count(),
            c1_codes.iter().flatten().count(),
            independent.iter().flatten().count(),
        );

        Self {
            environment,
            c0,
            c1_codes,
            c1_finals,
            independent,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Find the first introducer at or after byte offset `start`.
    ///
    /// Returns `None` when `start` is out of range or not on a character
    /// boundary.
    pub fn find(&self, start: usize, text: &str) -> Option<FinderResult> {
        let rest = text.get(start..)?;
        let mut chars = rest.char_indices().peekable();

        while let Some((index, c)) = chars.next() {
            let offset = start + index;
            let code = u32::from(c);

            if c == ESC {
                let next = chars.peek().map(|&(_, next)| next);
                return Some(self.resolve_escape(offset, next));
            }
            if code < 0x20 {
                if let Some(function) = self.c0[code as usize] {
                    return Some(found(offset, c.len_utf8(), function.into()));
                }
            } else if self.environment == Environment::EightBit
                && (0x80..0xA0).contains(&code)
            {
                if let Some(function) = self.c1_codes[(code - 0x80) as usize] {
                    return Some(found(offset, c.len_utf8(), function.into()));
                }
            }
        }

        None
    }

    /// ESC opens an independent function, a 7-bit C1 function or stands
    /// alone as the C0 ESC, tried in that order.
    fn resolve_escape(&self, offset: usize, next: Option<char>) -> FinderResult {
        let escaped = match next {
            Some(c) => match (self.independent_function(c), self.c1_function(c)) {
                (Some(function), _) => Some(ControlFunction::from(function)),
                (None, Some(function))
                    if self.environment == Environment::SevenBit =>
                {
                    Some(ControlFunction::from(function))
                },
                _ => None,
            },
            None => None,
        };

        match escaped {
            Some(function) => found(offset, 2, function),
            None => found(offset, 1, C0Function::Escape.into()),
        }
    }

    fn independent_function(&self, c: char) -> Option<IndependentFunction> {
        let index = u32::from(c).checked_sub(0x60)?;
        self.independent.get(index as usize).copied().flatten()
    }

    fn c1_function(&self, c: char) -> Option<C1Function> {
        let index = u32::from(c).checked_sub(0x40)?;
        self.c1_finals.get(index as usize).copied().flatten()
    }
}

fn found(offset: usize, len: usize, function: ControlFunction) -> FinderResult {
    FinderResult {
        offset,
        len,
        kind: function.kind(),
        function,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(environment: Environment, text: &str) -> Option<FinderResult> {
        Finder::new(environment).find(0, text)
    }

    #[test]
    fn lone_escape_is_c0() {
        let result = find(Environment::SevenBit, "\x1b").unwrap();

        assert_eq!(result.offset, 0);
        assert_eq!(result.len, 1);
        assert_eq!(result.kind, FunctionKind::C0);
        assert_eq!(result.function, ControlFunction::from(C0Function::Escape));
    }

    #[test]
    fn c0_code() {
        let result = find(Environment::SevenBit, "\x0b").unwrap();
        assert_eq!(
            result.function,
            ControlFunction::from(C0Function::LineTabulation)
        );
    }

    #[test]
    fn seven_bit_c1() {
        let result = find(Environment::SevenBit, "\x1bE").unwrap();
        assert_eq!(result.kind, FunctionKind::C1);
        assert_eq!(
            result.function,
            ControlFunction::from(C1Function::NextLine)
        );
        assert_eq!(result.len, 2);

        let result = find(Environment::SevenBit, "\x1b[").unwrap();
        assert_eq!(result.kind, FunctionKind::ControlSequence);
        assert_eq!(
            result.function,
            ControlFunction::from(C1Function::ControlSequenceIntroducer)
        );

        let result = find(Environment::SevenBit, "\x1b^").unwrap();
        assert_eq!(result.kind, FunctionKind::ControlString);
        assert_eq!(
            result.function,
            ControlFunction::from(C1Function::PrivacyMessage)
        );
    }

    #[test]
    fn independent_function() {
        let result = find(Environment::SevenBit, "abc\x1bd").unwrap();

        assert_eq!(result.offset, 3);
        assert_eq!(result.kind, FunctionKind::Independent);
        assert_eq!(
            result.function,
            ControlFunction::from(IndependentFunction::CodingMethodDelimiter)
        );
    }

    #[test]
    fn find_from_offset() {
        let finder = Finder::new(Environment::SevenBit);
        let result = finder.find(2, "ab123\x1b[20m").unwrap();

        assert_eq!(result.offset, 5);
        assert_eq!(finder.find(6, "ab123\x1b[20m"), None);
        assert_eq!(finder.find(40, "ab123\x1b[20m"), None);
    }

    #[test]
    fn eight_bit_c1() {
        let result = find(Environment::EightBit, "\u{85}").unwrap();
        assert_eq!(
            result.function,
            ControlFunction::from(C1Function::NextLine)
        );
        assert_eq!(result.len, 2);

        let result = find(Environment::EightBit, "\u{9b}").unwrap();
        assert_eq!(result.kind, FunctionKind::ControlSequence);

        let result = find(Environment::EightBit, "\u{9e}").unwrap();
        assert_eq!(result.kind, FunctionKind::ControlString);
    }

    #[test]
    fn environment_selects_c1_form() {
        assert_eq!(find(Environment::SevenBit, "x\u{85}y"), None);

        let result = find(Environment::EightBit, "\x1bE").unwrap();
        assert_eq!(result.function, ControlFunction::from(C0Function::Escape));
    }

    #[test]
    fn shift_functions_follow_environment() {
        let result = find(Environment::SevenBit, "\x0e").unwrap();
        assert_eq!(
            result.function,
            ControlFunction::from(C0Function::ShiftOut)
        );

        let result = find(Environment::EightBit, "\x0e").unwrap();
        assert_eq!(
            result.function,
            ControlFunction::from(C0Function::LockingShiftOne)
        );
    }

    #[test]
    fn plain_text() {
        assert_eq!(find(Environment::SevenBit, "plain text"), None);
        assert_eq!(find(Environment::SevenBit, ""), None);
    }
}
