use crate::Environment;

/// Functions of the C0 set, ECMA-48 section 8.3.
///
/// `0x0E` and `0x0F` mean SO/SI in the 7-bit environment and LS1/LS0 in
/// the 8-bit environment; [`C0Function::for_code`] resolves the clash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum C0Function {
    /// (NUL) Null.
    Null,
    /// (SOH) Start of heading.
    StartOfHeading,
    /// (STX) Start of text.
    StartOfText,
    /// (ETX) End of text.
    EndOfText,
    /// (EOT) End of transmission.
    EndOfTransmission,
    /// (ENQ) Enquiry.
    Enquiry,
    /// (ACK) Acknowledge.
    Acknowledge,
    /// (BEL) Bell.
    Bell,
    /// (BS) Backspace.
    Backspace,
    /// (HT) Character tabulation.
    CharacterTabulation,
    /// (LF) Line feed.
    LineFeed,
    /// (VT) Line tabulation.
    LineTabulation,
    /// (FF) Form feed.
    FormFeed,
    /// (CR) Carriage return.
    CarriageReturn,
    /// (SO) Shift-out, 7-bit only.
    ShiftOut,
    /// (SI) Shift-in, 7-bit only.
    ShiftIn,
    /// (LS1) Locking-shift one, 8-bit only.
    LockingShiftOne,
    /// (LS0) Locking-shift zero, 8-bit only.
    LockingShiftZero,
    /// (DLE) Data link escape.
    DataLinkEscape,
    /// (DC1) Device control one.
    DeviceControlOne,
    /// (DC2) Device control two.
    DeviceControlTwo,
    /// (DC3) Device control three.
    DeviceControlThree,
    /// (DC4) Device control four.
    DeviceControlFour,
    /// (NAK) Negative acknowledge.
    NegativeAcknowledge,
    /// (SYN) Synchronous idle.
    SynchronousIdle,
    /// (ETB) End of transmission block.
    EndOfTransmissionBlock,
    /// (CAN) Cancel.
    Cancel,
    /// (EM) End of medium.
    EndOfMedium,
    /// (SUB) Substitute.
    Substitute,
    /// (ESC) Escape.
    Escape,
    /// (IS4) Information separator four.
    InformationSeparatorFour,
    /// (IS3) Information separator three.
    InformationSeparatorThree,
    /// (IS2) Information separator two.
    InformationSeparatorTwo,
    /// (IS1) Information separator one.
    InformationSeparatorOne,
}

impl C0Function {
    pub const ALL: [C0Function; 34] = [
        C0Function::Null,
        C0Function::StartOfHeading,
        C0Function::StartOfText,
        C0Function::EndOfText,
        C0Function::EndOfTransmission,
        C0Function::Enquiry,
        C0Function::Acknowledge,
        C0Function::Bell,
        C0Function::Backspace,
        C0Function::CharacterTabulation,
        C0Function::LineFeed,
        C0Function::LineTabulation,
        C0Function::FormFeed,
        C0Function::CarriageReturn,
        C0Function::ShiftOut,
        C0Function::ShiftIn,
        C0Function::LockingShiftOne,
        C0Function::LockingShiftZero,
        C0Function::DataLinkEscape,
        C0Function::DeviceControlOne,
        C0Function::DeviceControlTwo,
        C0Function::DeviceControlThree,
        C0Function::DeviceControlFour,
        C0Function::NegativeAcknowledge,
        C0Function::SynchronousIdle,
        C0Function::EndOfTransmissionBlock,
        C0Function::Cancel,
        C0Function::EndOfMedium,
        C0Function::Substitute,
        C0Function::Escape,
        C0Function::InformationSeparatorFour,
        C0Function::InformationSeparatorThree,
        C0Function::InformationSeparatorTwo,
        C0Function::InformationSeparatorOne,
    ];

    pub fn code(self) -> u8 {
        use C0Function::*;
        match self {
            Null => 0x00,
            StartOfHeading => 0x01,
            StartOfText => 0x02,
            EndOfText => 0x03,
            EndOfTransmission => 0x04,
            Enquiry => 0x05,
            Acknowledge => 0x06,
            Bell => 0x07,
            Backspace => 0x08,
            CharacterTabulation => 0x09,
            LineFeed => 0x0A,
            LineTabulation => 0x0B,
            FormFeed => 0x0C,
            CarriageReturn => 0x0D,
            ShiftOut | LockingShiftOne => 0x0E,
            ShiftIn | LockingShiftZero => 0x0F,
            DataLinkEscape => 0x10,
            DeviceControlOne => 0x11,
            DeviceControlTwo => 0x12,
            DeviceControlThree => 0x13,
            DeviceControlFour => 0x14,
            NegativeAcknowledge => 0x15,
            SynchronousIdle => 0x16,
            EndOfTransmissionBlock => 0x17,
            Cancel => 0x18,
            EndOfMedium => 0x19,
            Substitute => 0x1A,
            Escape => 0x1B,
            InformationSeparatorFour => 0x1C,
            InformationSeparatorThree => 0x1D,
            InformationSeparatorTwo => 0x1E,
            InformationSeparatorOne => 0x1F,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        use C0Function::*;
        match self {
            Null => "NUL",
            StartOfHeading => "SOH",
            StartOfText => "STX",
            EndOfText => "ETX",
            EndOfTransmission => "EOT",
            Enquiry => "ENQ",
            Acknowledge => "ACK",
            Bell => "BEL",
            Backspace => "BS",
            CharacterTabulation => "HT",
            LineFeed => "LF",
            LineTabulation => "VT",
            FormFeed => "FF",
            CarriageReturn => "CR",
            ShiftOut => "SO",
            ShiftIn => "SI",
            LockingShiftOne => "LS1",
            LockingShiftZero => "LS0",
            DataLinkEscape => "DLE",
            DeviceControlOne => "DC1",
            DeviceControlTwo => "DC2",
            DeviceControlThree => "DC3",
            DeviceControlFour => "DC4",
            NegativeAcknowledge => "NAK",
            SynchronousIdle => "SYN",
            EndOfTransmissionBlock => "ETB",
            Cancel => "CAN",
            EndOfMedium => "EM",
            Substitute => "SUB",
            Escape => "ESC",
            InformationSeparatorFour => "IS4",
            InformationSeparatorThree => "IS3",
            InformationSeparatorTwo => "IS2",
            InformationSeparatorOne => "IS1",
        }
    }

    /// Environment the function is restricted to, if any.
    pub fn environment(self) -> Option<Environment> {
        match self {
            C0Function::ShiftOut | C0Function::ShiftIn => {
                Some(Environment::SevenBit)
            },
            C0Function::LockingShiftOne | C0Function::LockingShiftZero => {
                Some(Environment::EightBit)
            },
            _ => None,
        }
    }

    /// Function represented by `code` in the given environment.
    pub fn for_code(code: u8, environment: Environment) -> Option<Self> {
        Self::ALL.into_iter().find(|function| {
            function.code() == code
                && function.environment().is_none_or(|env| env == environment)
        })
    }
}
