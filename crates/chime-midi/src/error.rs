//! Error types for the MIDI message codec.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid status byte 0x{0:02X}: high bit is clear (data byte)")]
    InvalidStatusByte(u8),

    #[error("Unrecognized message type 0x{0:02X}")]
    UnrecognizedMessageType(u8),

    #[error("Empty MIDI message")]
    EmptyMessage,

    #[error("Truncated MIDI message: expected {expected} bytes, got {actual}")]
    TruncatedMessage { expected: usize, actual: usize },

    #[error("Malformed system exclusive: no end-of-exclusive byte found")]
    MalformedSystemExclusive,

    #[error("Channel {0} out of range (0-15)")]
    ChannelOutOfRange(u8),

    #[error("Operation '{operation}' not supported by message type 0x{status:02X}")]
    UnsupportedOperation {
        operation: &'static str,
        status: u8,
    },

    #[error("Message has no data byte")]
    NoDataByte,

    #[error("Message has no second data byte")]
    NoSecondDataByte,

    #[error("Value {0:#06X} out of 14-bit range")]
    ValueOutOfRange(u16),

    #[error("midi-msg conversion: {0}")]
    Interop(String),
}

impl From<midi_msg::ParseError> for Error {
    fn from(e: midi_msg::ParseError) -> Self {
        Error::Interop(format!("{:?}", e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        insta::assert_snapshot!(
            Error::InvalidStatusByte(0x3C).to_string(),
            @"Invalid status byte 0x3C: high bit is clear (data byte)"
        );
        insta::assert_snapshot!(
            Error::TruncatedMessage { expected: 3, actual: 1 }.to_string(),
            @"Truncated MIDI message: expected 3 bytes, got 1"
        );
        insta::assert_snapshot!(
            Error::UnsupportedOperation { operation: "get_channel", status: 0xF8 }.to_string(),
            @"Operation 'get_channel' not supported by message type 0xF8"
        );
        insta::assert_snapshot!(
            Error::ValueOutOfRange(0x4000).to_string(),
            @"Value 0x4000 out of 14-bit range"
        );
    }
}
