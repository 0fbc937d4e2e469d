use crate::ESC;

/// Independent control functions, ECMA-48 section 5.5.
///
/// Written as `ESC` followed by a final character in `0x60..=0x7E`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndependentFunction {
    /// (CMD) Coding method delimiter.
    CodingMethodDelimiter,
    /// (DMI) Disable manual input.
    DisableManualInput,
    /// (EMI) Enable manual input.
    EnableManualInput,
    /// (INT) Interrupt.
    Interrupt,
    /// (LS1R) Locking-shift one right.
    LockingShiftOneRight,
    /// (LS2) Locking-shift two.
    LockingShiftTwo,
    /// (LS2R) Locking-shift two right.
    LockingShiftTwoRight,
    /// (LS3) Locking-shift three.
    LockingShiftThree,
    /// (LS3R) Locking-shift three right.
    LockingShiftThreeRight,
    /// (RIS) Reset to initial state.
    ResetToInitialState,
}

impl IndependentFunction {
    pub const ALL: [IndependentFunction; 10] = [
        IndependentFunction::CodingMethodDelimiter,
        IndependentFunction::DisableManualInput,
        IndependentFunction::EnableManualInput,
        IndependentFunction::Interrupt,
        IndependentFunction::LockingShiftOneRight,
        IndependentFunction::LockingShiftTwo,
        IndependentFunction::LockingShiftTwoRight,
        IndependentFunction::LockingShiftThree,
        IndependentFunction::LockingShiftThreeRight,
        IndependentFunction::ResetToInitialState,
    ];

    pub fn mnemonic(self) -> &'static str {
        use IndependentFunction::*;
        match self {
            CodingMethodDelimiter => "CMD",
            DisableManualInput => "DMI",
            EnableManualInput => "EMI",
            Interrupt => "INT",
            LockingShiftOneRight => "LS1R",
            LockingShiftTwo => "LS2",
            LockingShiftTwoRight => "LS2R",
            LockingShiftThree => "LS3",
            LockingShiftThreeRight => "LS3R",
            ResetToInitialState => "RIS",
        }
    }

    pub fn final_char(self) -> char {
        use IndependentFunction::*;
        match self {
            CodingMethodDelimiter => 'd',
            DisableManualInput => '`',
            EnableManualInput => 'b',
            Interrupt => 'a',
            LockingShiftOneRight => '~',
            LockingShiftTwo => 'n',
            LockingShiftTwoRight => '}',
            LockingShiftThree => 'o',
            LockingShiftThreeRight => '|',
            ResetToInitialState => 'c',
        }
    }

    pub fn encoded(self) -> String {
        [ESC, self.final_char()].iter().collect()
    }

    pub fn from_final_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.final_char() == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_chars_are_in_fs_range() {
        for function in IndependentFunction::ALL {
            assert!(('\u{60}'..='\u{7e}').contains(&function.final_char()));
        }
        assert_eq!(
            IndependentFunction::from_final_char('|'),
            Some(IndependentFunction::LockingShiftThreeRight)
        );
        assert_eq!(IndependentFunction::from_final_char('e'), None);
    }
}
