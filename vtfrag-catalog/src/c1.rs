use crate::{ESC, Environment};

/// Functions of the C1 set, ECMA-48 section 8.3.
///
/// Each one is written as `ESC` followed by its final character in the
/// 7-bit environment, or as its single 8-bit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum C1Function {
    /// (APC) Application program command.
    ApplicationProgramCommand,
    /// (BPH) Break permitted here.
    BreakPermittedHere,
    /// (CCH) Cancel character.
    CancelCharacter,
    /// (CSI) Control sequence introducer.
    ControlSequenceIntroducer,
    /// (DCS) Device control string.
    DeviceControlString,
    /// (EPA) End of guarded area.
    EndOfGuardedArea,
    /// (ESA) End of selected area.
    EndOfSelectedArea,
    /// (HTJ) Character tabulation with justification.
    CharacterTabulationWithJustification,
    /// (HTS) Character tabulation set.
    CharacterTabulationSet,
    /// (MW) Message waiting.
    MessageWaiting,
    /// (NBH) No break here.
    NoBreakHere,
    /// (NEL) Next line.
    NextLine,
    /// (OSC) Operating system command.
    OperatingSystemCommand,
    /// (PLD) Partial line forward.
    PartialLineForward,
    /// (PLU) Partial line backward.
    PartialLineBackward,
    /// (PM) Privacy message.
    PrivacyMessage,
    /// (PU1) Private use one.
    PrivateUseOne,
    /// (PU2) Private use two.
    PrivateUseTwo,
    /// (RI) Reverse line feed.
    ReverseLineFeed,
    /// (SCI) Single character introducer.
    SingleCharacterIntroducer,
    /// (SOS) Start of string.
    StartOfString,
    /// (SPA) Start of guarded area.
    StartOfGuardedArea,
    /// (SSA) Start of selected area.
    StartOfSelectedArea,
    /// (SS2) Single-shift two.
    SingleShiftTwo,
    /// (SS3) Single-shift three.
    SingleShiftThree,
    /// (ST) String terminator.
    StringTerminator,
    /// (STS) Set transmit state.
    SetTransmitState,
    /// (VTS) Line tabulation set.
    LineTabulationSet,
}

impl C1Function {
    pub const ALL: [C1Function; 28] = [
        C1Function::ApplicationProgramCommand,
        C1Function::BreakPermittedHere,
        C1Function::CancelCharacter,
        C1Function::ControlSequenceIntroducer,
        C1Function::DeviceControlString,
        C1Function::EndOfGuardedArea,
        C1Function::EndOfSelectedArea,
        C1Function::CharacterTabulationWithJustification,
        C1Function::CharacterTabulationSet,
        C1Function::MessageWaiting,
        C1Function::NoBreakHere,
        C1Function::NextLine,
        C1Function::OperatingSystemCommand,
        C1Function::PartialLineForward,
        C1Function::PartialLineBackward,
        C1Function::PrivacyMessage,
        C1Function::PrivateUseOne,
        C1Function::PrivateUseTwo,
        C1Function::ReverseLineFeed,
        C1Function::SingleCharacterIntroducer,
        C1Function::StartOfString,
        C1Function::StartOfGuardedArea,
        C1Function::StartOfSelectedArea,
        C1Function::SingleShiftTwo,
        C1Function::SingleShiftThree,
        C1Function::StringTerminator,
        C1Function::SetTransmitState,
        C1Function::LineTabulationSet,
    ];

    /// Mnemonic, 7-bit final character and 8-bit code.
    fn definition(self) -> (&'static str, char, u8) {
        use C1Function::*;
        match self {
            ApplicationProgramCommand => ("APC", '_', 0x9F),
            BreakPermittedHere => ("BPH", 'B', 0x82),
            CancelCharacter => ("CCH", 'T', 0x94),
            ControlSequenceIntroducer => ("CSI", '[', 0x9B),
            DeviceControlString => ("DCS", 'P', 0x90),
            EndOfGuardedArea => ("EPA", 'W', 0x97),
            EndOfSelectedArea => ("ESA", 'G', 0x87),
            CharacterTabulationWithJustification => ("HTJ", 'I', 0x89),
            CharacterTabulationSet => ("HTS", 'H', 0x88),
            MessageWaiting => ("MW", 'U', 0x95),
            NoBreakHere => ("NBH", 'C', 0x83),
            NextLine => ("NEL", 'E', 0x85),
            OperatingSystemCommand => ("OSC", ']', 0x9D),
            PartialLineForward => ("PLD", 'K', 0x8B),
            PartialLineBackward => ("PLU", 'L', 0x8C),
            PrivacyMessage => ("PM", '^', 0x9E),
            PrivateUseOne => ("PU1", 'Q', 0x91),
            PrivateUseTwo => ("PU2", 'R', 0x92),
            ReverseLineFeed => ("RI", 'M', 0x8D),
            SingleCharacterIntroducer => ("SCI", 'Z', 0x9A),
            StartOfString => ("SOS", 'X', 0x98),
            StartOfGuardedArea => ("SPA", 'V', 0x96),
            StartOfSelectedArea => ("SSA", 'F', 0x86),
            SingleShiftTwo => ("SS2", 'N', 0x8E),
            SingleShiftThree => ("SS3", 'O', 0x8F),
            StringTerminator => ("ST", '\\', 0x9C),
            SetTransmitState => ("STS", 'S', 0x93),
            LineTabulationSet => ("VTS", 'J', 0x8A),
        }
    }

    pub fn mnemonic(self) -> &'static str {
        self.definition().0
    }

    /// Character following `ESC` in the 7-bit environment.
    pub fn final_char(self) -> char {
        self.definition().1
    }

    /// Code in the 8-bit environment.
    pub fn code(self) -> u8 {
        self.definition().2
    }

    /// Whether the function opens a control string closed by ST.
    pub fn is_string_opener(self) -> bool {
        matches!(
            self,
            C1Function::ApplicationProgramCommand
                | C1Function::DeviceControlString
                | C1Function::OperatingSystemCommand
                | C1Function::PrivacyMessage
                | C1Function::StartOfString
        )
    }

    /// Text of the function in the given environment.
    pub fn encoded(self, environment: Environment) -> String {
        match environment {
            Environment::SevenBit => [ESC, self.final_char()].iter().collect(),
            Environment::EightBit => char::from(self.code()).into(),
        }
    }

    pub fn from_final_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.final_char() == c)
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.code() == code)
    }
}
