//! Weekday names in English and Gurmukhi.

/// The seven weekdays, Sunday first to match the weekday index of
/// `bikrami_time::weekday_from_jd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All seven weekdays in order (0 = Sunday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// English name.
    pub const fn name_en(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Gurmukhi name.
    pub const fn name_pa(self) -> &'static str {
        match self {
            Self::Sunday => "ਐਤਵਾਰ",
            Self::Monday => "ਸੋਮਵਾਰ",
            Self::Tuesday => "ਮੰਗਲਵਾਰ",
            Self::Wednesday => "ਬੁੱਧਵਾਰ",
            Self::Thursday => "ਵੀਰਵਾਰ",
            Self::Friday => "ਸ਼ੁੱਕਰਵਾਰ",
            Self::Saturday => "ਸ਼ਨੀਵਾਰ",
        }
    }

    /// Weekday for an index, taken modulo 7 (0 = Sunday).
    pub const fn from_index(index: u8) -> Self {
        ALL_WEEKDAYS[(index % 7) as usize]
    }
}
