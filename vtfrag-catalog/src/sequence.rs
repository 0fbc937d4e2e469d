/// Control sequences, ECMA-48 section 8.3.
///
/// A control sequence is `CSI`, parameter bytes, optional intermediate
/// bytes and a final byte. The pattern of each function describes what
/// follows `CSI`: `{s}` stands for a single parameter, `{m}` for a
/// selective list of parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SequenceFunction {
    /// (CBT) Cursor backward tabulation.
    CursorBackwardTabulation,
    /// (CHA) Cursor character absolute.
    CursorCharacterAbsolute,
    /// (CHT) Cursor forward tabulation.
    CursorForwardTabulation,
    /// (CNL) Cursor next line.
    CursorNextLine,
    /// (CPL) Cursor preceding line.
    CursorPrecedingLine,
    /// (CPR) Active position report.
    ActivePositionReport,
    /// (CTC) Cursor tabulation control.
    CursorTabulationControl,
    /// (CUB) Cursor left.
    CursorLeft,
    /// (CUD) Cursor down.
    CursorDown,
    /// (CUF) Cursor right.
    CursorRight,
    /// (CUP) Cursor position.
    CursorPosition,
    /// (CUU) Cursor up.
    CursorUp,
    /// (CVT) Cursor line tabulation.
    CursorLineTabulation,
    /// (DA) Device attributes.
    DeviceAttributes,
    /// (DAQ) Define area qualification.
    DefineAreaQualification,
    /// (DCH) Delete character.
    DeleteCharacter,
    /// (DL) Delete line.
    DeleteLine,
    /// (DSR) Device status report.
    DeviceStatusReport,
    /// (DTA) Dimension text area.
    DimensionTextArea,
    /// (EA) Erase in area.
    EraseInArea,
    /// (ECH) Erase character.
    EraseCharacter,
    /// (ED) Erase in page.
    EraseInPage,
    /// (EF) Erase in field.
    EraseInField,
    /// (EL) Erase in line.
    EraseInLine,
    /// (FNK) Function key.
    FunctionKey,
    /// (FNT) Font selection.
    FontSelection,
    /// (GCC) Graphic character combination.
    GraphicCharacterCombination,
    /// (GSM) Graphic size modification.
    GraphicSizeModification,
    /// (GSS) Graphic size selection.
    GraphicSizeSelection,
    /// (HPA) Character position absolute.
    CharacterPositionAbsolute,
    /// (HPB) Character position backward.
    CharacterPositionBackward,
    /// (HPR) Character position forward.
    CharacterPositionForward,
    /// (HVP) Character and line position.
    CharacterAndLinePosition,
    /// (ICH) Insert character.
    InsertCharacter,
    /// (IDCS) Identify device control string.
    IdentifyDeviceControlString,
    /// (IGS) Identify graphic subrepertoire.
    IdentifyGraphicSubrepertoire,
    /// (IL) Insert line.
    InsertLine,
    /// (JFY) Justify.
    Justify,
    /// (MC) Media copy.
    MediaCopy,
    /// (NP) Next page.
    NextPage,
    /// (PEC) Presentation expand or contract.
    PresentationExpandOrContract,
    /// (PFS) Page format selection.
    PageFormatSelection,
    /// (PP) Preceding page.
    PrecedingPage,
    /// (PPA) Page position absolute.
    PagePositionAbsolute,
    /// (PPB) Page position backward.
    PagePositionBackward,
    /// (PPR) Page position forward.
    PagePositionForward,
    /// (PTX) Parallel texts.
    ParallelTexts,
    /// (QUAD) Quad.
    Quad,
    /// (REP) Repeat.
    Repeat,
    /// (RM) Reset mode.
    ResetMode,
    /// (SACS) Set additional character separation.
    SetAdditionalCharacterSeparation,
    /// (SAPV) Select alternative presentation variants.
    SelectAlternativePresentationVariants,
    /// (SCO) Select character orientation.
    SelectCharacterOrientation,
    /// (SCP) Select character path.
    SelectCharacterPath,
    /// (SCS) Set character spacing.
    SetCharacterSpacing,
    /// (SD) Scroll down.
    ScrollDown,
    /// (SDS) Start directed string.
    StartDirectedString,
    /// (SEE) Select editing extent.
    SelectEditingExtent,
    /// (SEF) Sheet eject and feed.
    SheetEjectAndFeed,
    /// (SGR) Select graphic rendition.
    SelectGraphicRendition,
    /// (SHS) Select character spacing.
    SelectCharacterSpacing,
    /// (SIMD) Select implicit movement direction.
    SelectImplicitMovementDirection,
    /// (SL) Scroll left.
    ScrollLeft,
    /// (SLH) Set line home.
    SetLineHome,
    /// (SLL) Set line limit.
    SetLineLimit,
    /// (SLS) Set line spacing.
    SetLineSpacing,
    /// (SM) Set mode.
    SetMode,
    /// (SPD) Select presentation directions.
    SelectPresentationDirections,
    /// (SPH) Set page home.
    SetPageHome,
    /// (SPI) Spacing increment.
    SpacingIncrement,
    /// (SPL) Set page limit.
    SetPageLimit,
    /// (SPQR) Select print quality and rapidity.
    SelectPrintQualityAndRapidity,
    /// (SR) Scroll right.
    ScrollRight,
    /// (SRCS) Set reduced character separation.
    SetReducedCharacterSeparation,
    /// (SRS) Start reversed string.
    StartReversedString,
    /// (SSU) Select size unit.
    SelectSizeUnit,
    /// (SSW) Set space width.
    SetSpaceWidth,
    /// (STAB) Selective tabulation.
    SelectiveTabulation,
    /// (SU) Scroll up.
    ScrollUp,
    /// (SVS) Select line spacing.
    SelectLineSpacing,
    /// (TAC) Tabulation aligned centred.
    TabulationAlignedCentred,
    /// (TALE) Tabulation aligned leading edge.
    TabulationAlignedLeadingEdge,
    /// (TATE) Tabulation aligned trailing edge.
    TabulationAlignedTrailingEdge,
    /// (TBC) Tabulation clear.
    TabulationClear,
    /// (TCC) Tabulation centred on character.
    TabulationCentredOnCharacter,
    /// (TSR) Tabulation stop remove.
    TabulationStopRemove,
    /// (TSS) Thin space specification.
    ThinSpaceSpecification,
    /// (VPA) Line position absolute.
    LinePositionAbsolute,
    /// (VPB) Line position backward.
    LinePositionBackward,
    /// (VPR) Line position forward.
    LinePositionForward,
}

const NONE: &[Option<i64>] = &[];

/// Mnemonic, pattern and positional default values.
type Definition = (&'static str, &'static str, &'static [Option<i64>]);

impl SequenceFunction {
    pub const ALL: [SequenceFunction; 90] = [
        SequenceFunction::CursorBackwardTabulation,
        SequenceFunction::CursorCharacterAbsolute,
        SequenceFunction::CursorForwardTabulation,
        SequenceFunction::CursorNextLine,
        SequenceFunction::CursorPrecedingLine,
        SequenceFunction::ActivePositionReport,
        SequenceFunction::CursorTabulationControl,
        SequenceFunction::CursorLeft,
        SequenceFunction::CursorDown,
        SequenceFunction::CursorRight,
        SequenceFunction::CursorPosition,
        SequenceFunction::CursorUp,
        SequenceFunction::CursorLineTabulation,
        SequenceFunction::DeviceAttributes,
        SequenceFunction::DefineAreaQualification,
        SequenceFunction::DeleteCharacter,
        SequenceFunction::DeleteLine,
        SequenceFunction::DeviceStatusReport,
        SequenceFunction::DimensionTextArea,
        SequenceFunction::EraseInArea,
        SequenceFunction::EraseCharacter,
        SequenceFunction::EraseInPage,
        SequenceFunction::EraseInField,
        SequenceFunction::EraseInLine,
        SequenceFunction::FunctionKey,
        SequenceFunction::FontSelection,
        SequenceFunction::GraphicCharacterCombination,
        SequenceFunction::GraphicSizeModification,
        SequenceFunction::GraphicSizeSelection,
        SequenceFunction::CharacterPositionAbsolute,
        SequenceFunction::CharacterPositionBackward,
        SequenceFunction::CharacterPositionForward,
        SequenceFunction::CharacterAndLinePosition,
        SequenceFunction::InsertCharacter,
        SequenceFunction::IdentifyDeviceControlString,
        SequenceFunction::IdentifyGraphicSubrepertoire,
        SequenceFunction::InsertLine,
        SequenceFunction::Justify,
        SequenceFunction::MediaCopy,
        SequenceFunction::NextPage,
        SequenceFunction::PresentationExpandOrContract,
        SequenceFunction::PageFormatSelection,
        SequenceFunction::PrecedingPage,
        SequenceFunction::PagePositionAbsolute,
        SequenceFunction::PagePositionBackward,
        SequenceFunction::PagePositionForward,
        SequenceFunction::ParallelTexts,
        SequenceFunction::Quad,
        SequenceFunction::Repeat,
        SequenceFunction::ResetMode,
        SequenceFunction::SetAdditionalCharacterSeparation,
        SequenceFunction::SelectAlternativePresentationVariants,
        SequenceFunction::SelectCharacterOrientation,
        SequenceFunction::SelectCharacterPath,
        SequenceFunction::SetCharacterSpacing,
        SequenceFunction::ScrollDown,
        SequenceFunction::StartDirectedString,
        SequenceFunction::SelectEditingExtent,
        SequenceFunction::SheetEjectAndFeed,
        SequenceFunction::SelectGraphicRendition,
        SequenceFunction::SelectCharacterSpacing,
        SequenceFunction::SelectImplicitMovementDirection,
        SequenceFunction::ScrollLeft,
        SequenceFunction::SetLineHome,
        SequenceFunction::SetLineLimit,
        SequenceFunction::SetLineSpacing,
        SequenceFunction::SetMode,
        SequenceFunction::SelectPresentationDirections,
        SequenceFunction::SetPageHome,
        SequenceFunction::SpacingIncrement,
        SequenceFunction::SetPageLimit,
        SequenceFunction::SelectPrintQualityAndRapidity,
        SequenceFunction::ScrollRight,
        SequenceFunction::SetReducedCharacterSeparation,
        SequenceFunction::StartReversedString,
        SequenceFunction::SelectSizeUnit,
        SequenceFunction::SetSpaceWidth,
        SequenceFunction::SelectiveTabulation,
        SequenceFunction::ScrollUp,
        SequenceFunction::SelectLineSpacing,
        SequenceFunction::TabulationAlignedCentred,
        SequenceFunction::TabulationAlignedLeadingEdge,
        SequenceFunction::TabulationAlignedTrailingEdge,
        SequenceFunction::TabulationClear,
        SequenceFunction::TabulationCentredOnCharacter,
        SequenceFunction::TabulationStopRemove,
        SequenceFunction::ThinSpaceSpecification,
        SequenceFunction::LinePositionAbsolute,
        SequenceFunction::LinePositionBackward,
        SequenceFunction::LinePositionForward,
    ];

    fn definition(self) -> Definition {
        use SequenceFunction::*;
        match self {
            CursorBackwardTabulation => ("CBT", "{s}Z", &[Some(1)]),
            CursorCharacterAbsolute => ("CHA", "{s}G", &[Some(1)]),
            CursorForwardTabulation => ("CHT", "{s}I", &[Some(1)]),
            CursorNextLine => ("CNL", "{s}E", &[Some(1)]),
            CursorPrecedingLine => ("CPL", "{s}F", &[Some(1)]),
            ActivePositionReport => ("CPR", "{s};{s}R", &[Some(1), Some(1)]),
            CursorTabulationControl => ("CTC", "{m}W", &[Some(0)]),
            CursorLeft => ("CUB", "{s}D", &[Some(1)]),
            CursorDown => ("CUD", "{s}B", &[Some(1)]),
            CursorRight => ("CUF", "{s}C", &[Some(1)]),
            CursorPosition => ("CUP", "{s};{s}H", &[Some(1), Some(1)]),
            CursorUp => ("CUU", "{s}A", &[Some(1)]),
            CursorLineTabulation => ("CVT", "{s}Y", &[Some(1)]),
            DeviceAttributes => ("DA", "{s}c", &[Some(0)]),
            DefineAreaQualification => ("DAQ", "{m}o", &[Some(0)]),
            DeleteCharacter => ("DCH", "{s}P", &[Some(1)]),
            DeleteLine => ("DL", "{s}M", &[Some(1)]),
            DeviceStatusReport => ("DSR", "{s}n", &[Some(0)]),
            DimensionTextArea => ("DTA", "{s};{s} T", NONE),
            EraseInArea => ("EA", "{s}O", &[Some(0)]),
            EraseCharacter => ("ECH", "{s}X", &[Some(1)]),
            EraseInPage => ("ED", "{s}J", &[Some(0)]),
            EraseInField => ("EF", "{s}N", &[Some(0)]),
            EraseInLine => ("EL", "{s}K", &[Some(0)]),
            FunctionKey => ("FNK", "{s} W", NONE),
            FontSelection => ("FNT", "{s};{s} D", &[Some(0), Some(0)]),
            GraphicCharacterCombination => ("GCC", "{s} _", &[Some(0)]),
            GraphicSizeModification => ("GSM", "{s};{s} B", &[Some(100), Some(100)]),
            GraphicSizeSelection => ("GSS", "{s} C", NONE),
            CharacterPositionAbsolute => ("HPA", "{s}`", &[Some(1)]),
            CharacterPositionBackward => ("HPB", "{s}j", &[Some(1)]),
            CharacterPositionForward => ("HPR", "{s}a", &[Some(1)]),
            CharacterAndLinePosition => ("HVP", "{s};{s}f", &[Some(1), Some(1)]),
            InsertCharacter => ("ICH", "{s}@", &[Some(1)]),
            IdentifyDeviceControlString => ("IDCS", "{s} O", NONE),
            IdentifyGraphicSubrepertoire => ("IGS", "{s} M", NONE),
            InsertLine => ("IL", "{s}L", &[Some(1)]),
            Justify => ("JFY", "{m} F", &[Some(0)]),
            MediaCopy => ("MC", "{s}i", &[Some(0)]),
            NextPage => ("NP", "{s}U", &[Some(1)]),
            PresentationExpandOrContract => ("PEC", "{s} Z", &[Some(0)]),
            PageFormatSelection => ("PFS", "{s} J", &[Some(0)]),
            PrecedingPage => ("PP", "{s}V", &[Some(1)]),
            PagePositionAbsolute => ("PPA", "{s} P", &[Some(1)]),
            PagePositionBackward => ("PPB", "{s} R", &[Some(1)]),
            PagePositionForward => ("PPR", "{s} Q", &[Some(1)]),
            ParallelTexts => ("PTX", "{s}\\", &[Some(0)]),
            Quad => ("QUAD", "{m} H", &[Some(0)]),
            Repeat => ("REP", "{s}b", &[Some(1)]),
            ResetMode => ("RM", "{m}l", NONE),
            SetAdditionalCharacterSeparation => ("SACS", "{s} \\", &[Some(0)]),
            SelectAlternativePresentationVariants => ("SAPV", "{m} ]", &[Some(0)]),
            SelectCharacterOrientation => ("SCO", "{s} e", &[Some(0)]),
            SelectCharacterPath => ("SCP", "{s};{s} k", NONE),
            SetCharacterSpacing => ("SCS", "{s} g", NONE),
            ScrollDown => ("SD", "{s}T", &[Some(1)]),
            StartDirectedString => ("SDS", "{s}]", &[Some(0)]),
            SelectEditingExtent => ("SEE", "{s}Q", &[Some(0)]),
            SheetEjectAndFeed => ("SEF", "{s};{s} Y", &[Some(0), Some(0)]),
            SelectGraphicRendition => ("SGR", "{m}m", &[Some(0)]),
            SelectCharacterSpacing => ("SHS", "{s} K", &[Some(0)]),
            SelectImplicitMovementDirection => ("SIMD", "{s}^", &[Some(0)]),
            ScrollLeft => ("SL", "{s} @", &[Some(1)]),
            SetLineHome => ("SLH", "{s} U", NONE),
            SetLineLimit => ("SLL", "{s} V", NONE),
            SetLineSpacing => ("SLS", "{s} h", NONE),
            SetMode => ("SM", "{m}h", NONE),
            SelectPresentationDirections => ("SPD", "{s};{s} S", &[Some(0), Some(0)]),
            SetPageHome => ("SPH", "{s} i", NONE),
            SpacingIncrement => ("SPI", "{s};{s} G", NONE),
            SetPageLimit => ("SPL", "{s} j", NONE),
            SelectPrintQualityAndRapidity => ("SPQR", "{s} X", &[Some(0)]),
            ScrollRight => ("SR", "{s} A", &[Some(1)]),
            SetReducedCharacterSeparation => ("SRCS", "{s} f", &[Some(0)]),
            StartReversedString => ("SRS", "{s}[", &[Some(0)]),
            SelectSizeUnit => ("SSU", "{s} I", &[Some(0)]),
            SetSpaceWidth => ("SSW", "{s} [", NONE),
            SelectiveTabulation => ("STAB", "{s} ^", NONE),
            ScrollUp => ("SU", "{s}S", &[Some(1)]),
            SelectLineSpacing => ("SVS", "{s} L", &[Some(0)]),
            TabulationAlignedCentred => ("TAC", "{s} b", NONE),
            TabulationAlignedLeadingEdge => ("TALE", "{s} a", NONE),
            TabulationAlignedTrailingEdge => ("TATE", "{s} `", NONE),
            TabulationClear => ("TBC", "{s}g", &[Some(0)]),
            TabulationCentredOnCharacter => ("TCC", "{s};{s} c", &[None, Some(32)]),
            TabulationStopRemove => ("TSR", "{s} d", NONE),
            ThinSpaceSpecification => ("TSS", "{s} E", NONE),
            LinePositionAbsolute => ("VPA", "{s}d", &[Some(1)]),
            LinePositionBackward => ("VPB", "{s}k", &[Some(1)]),
            LinePositionForward => ("VPR", "{s}e", &[Some(1)]),
        }
    }

    pub fn mnemonic(self) -> &'static str {
        self.definition().0
    }

    /// Pattern following `CSI`, e.g. `{s};{s}H` for CUP.
    pub fn pattern(self) -> &'static str {
        self.definition().1
    }

    /// Default value of every parameter position. `None` marks a position
    /// without a default.
    pub fn default_values(self) -> &'static [Option<i64>] {
        self.definition().2
    }

    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|function| function.mnemonic() == mnemonic)
    }
}
