/// Parameter values of SGR (select graphic rendition).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SgrParameter {
    DefaultRendition,
    Bold,
    /// Faint, decreased intensity or second colour.
    Faint,
    Italicized,
    SinglyUnderlined,
    SlowlyBlinking,
    RapidlyBlinking,
    NegativeImage,
    ConcealedCharacters,
    CrossedOut,
    PrimaryFont,
    /// Alternative fonts one to nine.
    AlternativeFont(u8),
    Fraktur,
    DoublyUnderlined,
    /// Normal colour or normal intensity.
    NormalIntensity,
    /// Not italicized, not fraktur.
    NotItalicized,
    NotUnderlined,
    /// Steady, not blinking.
    Steady,
    PositiveImage,
    RevealedCharacters,
    NotCrossedOut,
    /// Display colours 30 to 37.
    Display(Colour),
    DefaultDisplayColour,
    /// Background colours 40 to 47.
    Background(Colour),
    DefaultBackgroundColour,
    Framed,
    Encircled,
    Overlined,
    NotFramedNotEncircled,
    NotOverlined,
    /// Ideogram underline or right side line.
    IdeogramUnderline,
    /// Ideogram double underline or double line on the right side.
    IdeogramDoubleUnderline,
    /// Ideogram overline or left side line.
    IdeogramOverline,
    /// Ideogram double overline or double line on the left side.
    IdeogramDoubleOverline,
    IdeogramStressMarking,
    /// Cancels the effect of the ideogram renditions.
    IdeogramReset,
}

/// The eight colours SGR can select directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Colour {
    const ALL: [Colour; 8] = [
        Colour::Black,
        Colour::Red,
        Colour::Green,
        Colour::Yellow,
        Colour::Blue,
        Colour::Magenta,
        Colour::Cyan,
        Colour::White,
    ];

    fn index(self) -> i64 {
        self as i64
    }
}

impl SgrParameter {
    /// Maps a decoded SGR argument to its meaning.
    pub fn from_value(value: i64) -> Option<Self> {
        use SgrParameter::*;
        let parameter = match value {
            0 => DefaultRendition,
            1 => Bold,
            2 => Faint,
            3 => Italicized,
            4 => SinglyUnderlined,
            5 => SlowlyBlinking,
            6 => RapidlyBlinking,
            7 => NegativeImage,
            8 => ConcealedCharacters,
            9 => CrossedOut,
            10 => PrimaryFont,
            11..=19 => AlternativeFont((value - 10) as u8),
            20 => Fraktur,
            21 => DoublyUnderlined,
            22 => NormalIntensity,
            23 => NotItalicized,
            24 => NotUnderlined,
            25 => Steady,
            27 => PositiveImage,
            28 => RevealedCharacters,
            29 => NotCrossedOut,
            30..=37 => Display(Colour::ALL[(value - 30) as usize]),
            39 => DefaultDisplayColour,
            40..=47 => Background(Colour::ALL[(value - 40) as usize]),
            49 => DefaultBackgroundColour,
            51 => Framed,
            52 => Encircled,
            53 => Overlined,
            54 => NotFramedNotEncircled,
            55 => NotOverlined,
            60 => IdeogramUnderline,
            61 => IdeogramDoubleUnderline,
            62 => IdeogramOverline,
            63 => IdeogramDoubleOverline,
            64 => IdeogramStressMarking,
            65 => IdeogramReset,
            _ => return None,
        };
        Some(parameter)
    }

    pub fn value(self) -> i64 {
        use SgrParameter::*;
        match self {
            DefaultRendition => 0,
            Bold => 1,
            Faint => 2,
            Italicized => 3,
            SinglyUnderlined => 4,
            SlowlyBlinking => 5,
            RapidlyBlinking => 6,
            NegativeImage => 7,
            ConcealedCharacters => 8,
            CrossedOut => 9,
            PrimaryFont => 10,
            AlternativeFont(n) => 10 + i64::from(n),
            Fraktur => 20,
            DoublyUnderlined => 21,
            NormalIntensity => 22,
            NotItalicized => 23,
            NotUnderlined => 24,
            Steady => 25,
            PositiveImage => 27,
            RevealedCharacters => 28,
            NotCrossedOut => 29,
            Display(colour) => 30 + colour.index(),
            DefaultDisplayColour => 39,
            Background(colour) => 40 + colour.index(),
            DefaultBackgroundColour => 49,
            Framed => 51,
            Encircled => 52,
            Overlined => 53,
            NotFramedNotEncircled => 54,
            NotOverlined => 55,
            IdeogramUnderline => 60,
            IdeogramDoubleUnderline => 61,
            IdeogramOverline => 62,
            IdeogramDoubleOverline => 63,
            IdeogramStressMarking => 64,
            IdeogramReset => 65,
        }
    }
}
