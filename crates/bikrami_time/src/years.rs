//! Era-year conversions: Kaliyuga → Saka → Bikrami.
//!
//! The three eras differ by fixed offsets; only the Kali year is ever
//! stored, Saka and Bikrami are derived from it.

/// Kali year minus this offset gives the Saka year.
pub const KALI_SAKA_OFFSET: i64 = 3179;

/// Saka year plus this offset gives the Bikrami year.
pub const SAKA_BIKRAMI_OFFSET: i64 = 135;

/// Saka year for a Kaliyuga year.
pub fn kali_to_saka(kali_year: i64) -> i64 {
    kali_year - KALI_SAKA_OFFSET
}

/// Bikrami year for a Saka year.
pub fn saka_to_bikrami(saka_year: i64) -> i64 {
    saka_year + SAKA_BIKRAMI_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_years() {
        // Kali 5124 spans Saka 1945 / Bikrami 2080.
        let saka = kali_to_saka(5124);
        assert_eq!(saka, 1945);
        assert_eq!(saka_to_bikrami(saka), 2080);
    }

    #[test]
    fn bikrami_saka_offset_invariant() {
        for kali in [0, 3179, 5124, 6000] {
            let saka = kali_to_saka(kali);
            assert_eq!(saka_to_bikrami(saka) - saka, 135);
        }
    }
}
