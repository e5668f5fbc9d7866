//! Size and range limits for field literals.

/// Maximum byte length of an unquoted text field (model, mechanic, driver).
pub const MAX_TEXT_LEN: usize = 255;

/// Earliest accepted inspection year.
pub const MIN_YEAR: u16 = 1000;

/// Latest accepted inspection year.
pub const MAX_YEAR: u16 = 2026;

/// Letters allowed in plate series positions (0 and 4-5).
pub const PLATE_LETTERS: &[u8] = b"ABCEHKMOPTXY";
