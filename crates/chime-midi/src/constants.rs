//! Common data-byte values.

/// Middle C pitch for NOTE ON and NOTE OFF.
pub const MIDDLE_C: u8 = 0x3C;

/// Highest 7-bit velocity.
pub const MAX_VELOCITY: u8 = 0x7F;
