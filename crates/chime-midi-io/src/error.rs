//! Error types for the MIDI output subsystem.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Message(#[from] chime_midi::Error),

    #[error("MIDI output not connected")]
    NotConnected,

    #[error("MIDI output already connected")]
    AlreadyConnected,

    #[error("MIDI connect failed: {0}")]
    ConnectFailed(String),

    #[error("MIDI transmit failed: {0}")]
    TransmitFailed(String),

    #[error("Unsupported message length {0}: only 1-3 byte short messages can be sent")]
    UnsupportedMessageLength(usize),

    #[error("MIDI output device {index} not found ({available} available)")]
    NoSuchDevice { index: usize, available: usize },

    #[error("No MIDI output device found matching '{0}'")]
    NoMatchingDevice(String),

    #[error("MIDI device query failed: {0}")]
    DeviceQueryFailed(String),

    #[error("MIDI sink no longer exists")]
    SinkGone,
}

#[cfg(feature = "midi-io")]
impl From<midir::InitError> for Error {
    fn from(e: midir::InitError) -> Self {
        Error::DeviceQueryFailed(e.to_string())
    }
}

#[cfg(feature = "midi-io")]
impl From<midir::PortInfoError> for Error {
    fn from(e: midir::PortInfoError) -> Self {
        Error::DeviceQueryFailed(e.to_string())
    }
}

#[cfg(feature = "midi-io")]
impl From<midir::ConnectError<midir::MidiOutput>> for Error {
    fn from(e: midir::ConnectError<midir::MidiOutput>) -> Self {
        Error::ConnectFailed(e.to_string())
    }
}

#[cfg(feature = "midi-io")]
impl From<midir::SendError> for Error {
    fn from(e: midir::SendError) -> Self {
        Error::TransmitFailed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_errors_pass_through() {
        let err: Error = chime_midi::Error::ChannelOutOfRange(16).into();
        assert!(matches!(
            err,
            Error::Message(chime_midi::Error::ChannelOutOfRange(16))
        ));
        insta::assert_snapshot!(err.to_string(), @"Channel 16 out of range (0-15)");
    }

    #[test]
    fn test_device_error_text() {
        insta::assert_snapshot!(
            Error::NoSuchDevice { index: 4, available: 2 }.to_string(),
            @"MIDI output device 4 not found (2 available)"
        );
        insta::assert_snapshot!(
            Error::UnsupportedMessageLength(5).to_string(),
            @"Unsupported message length 5: only 1-3 byte short messages can be sent"
        );
    }
}
