//! Validated MIDI 1.0 messages.
//!
//! A [`Message`] owns the raw bytes of exactly one message: the status byte
//! followed by zero, one or two data bytes. System exclusive records keep
//! their payload but not their terminator.
//!
//! # Example
//! ```
//! use chime_midi::{note_on, status, Message, MAX_VELOCITY};
//!
//! let on = note_on(60, MAX_VELOCITY, 0)?;
//! assert_eq!(on.serialize(), vec![0x90, 60, 0x7F]);
//!
//! let mut bend = Message::new(status::PITCH_BEND)?;
//! bend.set_channel(2)?.set_int(0x2000)?;
//! assert_eq!(Message::parse(&bend.serialize())?, bend);
//! # Ok::<(), chime_midi::Error>(())
//! ```

use smallvec::SmallVec;

use crate::constants::{MAX_VELOCITY, MIDDLE_C};
use crate::error::{Error, Result};
use crate::kind::{status, MessageKind};

/// Largest value `set_int` accepts.
pub const MAX_INT: u16 = 0x3FFF;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Message {
    kind: MessageKind,
    bytes: SmallVec<[u8; 3]>,
}

impl Message {
    /// Create a message of the type given by `status_byte`, data bytes zeroed.
    ///
    /// The low nibble of a channel-voice status byte is kept as the channel.
    /// System exclusive yields the placeholder record `[0xF0, 0]`, which is
    /// not a real exclusive encoding.
    pub fn new(status_byte: u8) -> Result<Self> {
        let kind = MessageKind::from_status(status_byte)?;

        let mut bytes: SmallVec<[u8; 3]> = smallvec::smallvec![0; kind.size()];
        if bytes.is_empty() {
            bytes = smallvec::smallvec![status::SYSTEM_EXCLUSIVE, 0];
        }
        bytes[0] = status_byte;

        Ok(Self { kind, bytes })
    }

    /// Parse one message from the start of `input`.
    ///
    /// Fixed-size messages take exactly their size; anything after is
    /// ignored, so streams must be framed by the caller. System exclusive
    /// runs up to (not including) the first end-of-exclusive byte.
    pub fn parse(input: &[u8]) -> Result<Self> {
        let first = *input.first().ok_or(Error::EmptyMessage)?;
        let kind = MessageKind::from_status(first)?;
        let expected = kind.size();

        let bytes: SmallVec<[u8; 3]> = if expected > 0 {
            if input.len() < expected {
                return Err(Error::TruncatedMessage {
                    expected,
                    actual: input.len(),
                });
            }
            if input.len() > expected {
                tracing::trace!(
                    "Ignoring {} trailing bytes after {} message",
                    input.len() - expected,
                    kind
                );
            }
            SmallVec::from_slice(&input[..expected])
        } else {
            let end = input
                .iter()
                .position(|&b| b == status::END_OF_SYSTEM_EXCLUSIVE)
                .ok_or(Error::MalformedSystemExclusive)?;
            SmallVec::from_slice(&input[..end])
        };

        Ok(Self { kind, bytes })
    }

    /// The owned bytes, verbatim.
    pub fn serialize(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Status byte with the channel stripped for channel-voice messages.
    pub fn message_type(&self) -> u8 {
        let raw = self.bytes[0];
        if raw & status::KIND_MASK < status::SYSTEM {
            raw & status::KIND_MASK
        } else {
            raw
        }
    }

    /// Status byte including the channel.
    #[inline]
    pub fn message_type_raw(&self) -> u8 {
        self.bytes[0]
    }

    /// OR `channel` into the low nibble of the status byte.
    ///
    /// Bits already set are not cleared, so this is only meaningful on a
    /// message still on channel 0.
    pub fn set_channel(&mut self, channel: u8) -> Result<&mut Self> {
        if channel > 15 {
            return Err(Error::ChannelOutOfRange(channel));
        }
        if !self.kind.is_channel_scoped() {
            return Err(self.unsupported("set_channel"));
        }
        self.bytes[0] |= channel;
        Ok(self)
    }

    pub fn get_channel(&self) -> Result<u8> {
        if !self.kind.is_channel_scoped() {
            return Err(self.unsupported("get_channel"));
        }
        Ok(self.bytes[0] & status::CHANNEL_MASK)
    }

    /// Set the first data byte verbatim (no 7-bit masking).
    pub fn set_first_byte(&mut self, value: u8) -> Result<&mut Self> {
        let byte = self.bytes.get_mut(1).ok_or(Error::NoDataByte)?;
        *byte = value;
        Ok(self)
    }

    pub fn get_first_byte(&self) -> Result<u8> {
        self.bytes.get(1).copied().ok_or(Error::NoDataByte)
    }

    /// Set the second data byte verbatim (no 7-bit masking).
    pub fn set_second_byte(&mut self, value: u8) -> Result<&mut Self> {
        let byte = self.bytes.get_mut(2).ok_or(Error::NoSecondDataByte)?;
        *byte = value;
        Ok(self)
    }

    pub fn get_second_byte(&self) -> Result<u8> {
        self.bytes.get(2).copied().ok_or(Error::NoSecondDataByte)
    }

    /// Store a 14-bit value across both data bytes of a song position or
    /// pitch bend message. The upper 7 bits go in the first data byte.
    pub fn set_int(&mut self, value: u16) -> Result<&mut Self> {
        if value > MAX_INT {
            return Err(Error::ValueOutOfRange(value));
        }
        if !self.kind.carries_int() {
            return Err(self.unsupported("set_int"));
        }
        self.bytes[1] = (value >> 7) as u8;
        self.bytes[2] = (value & 0x7F) as u8;
        Ok(self)
    }

    pub fn get_int(&self) -> Result<u16> {
        if !self.kind.carries_int() {
            return Err(self.unsupported("get_int"));
        }
        Ok(self.bytes[2] as u16 | (self.bytes[1] as u16) << 7)
    }

    /// Structural check hook. Every constructor already yields a well-formed
    /// message, so this currently passes the message through.
    #[inline]
    pub fn validate(&self) -> Result<&Self> {
        Ok(self)
    }

    /// Number of bytes held, including the status byte.
    #[inline]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    fn unsupported(&self, operation: &'static str) -> Error {
        Error::UnsupportedOperation {
            operation,
            status: self.bytes[0],
        }
    }
}

/// NOTE OFF on middle C at full velocity, channel 0.
impl Default for Message {
    fn default() -> Self {
        Self {
            kind: MessageKind::NoteOff,
            bytes: smallvec::smallvec![status::NOTE_OFF, MIDDLE_C, MAX_VELOCITY],
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for Message {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Message::parse(bytes)
    }
}

impl From<Message> for Vec<u8> {
    fn from(message: Message) -> Self {
        message.bytes.into_vec()
    }
}

/// Build a NOTE ON.
///
/// The usual defaults are [`MAX_VELOCITY`] and channel 0.
///
/// `channel` is folded into the status byte without a range check: values
/// above 15 corrupt the status byte instead of failing.
///
/// ```
/// use chime_midi::{note_on, MAX_VELOCITY};
///
/// let on = note_on(60, MAX_VELOCITY, 0)?;
/// assert_eq!(on.as_bytes(), &[0x90, 60, 0x7F]);
/// # Ok::<(), chime_midi::Error>(())
/// ```
pub fn note_on(pitch: u8, velocity: u8, channel: u8) -> Result<Message> {
    note(status::NOTE_ON, pitch, velocity, channel)
}

/// Build a NOTE OFF. Same defaults and channel caveat as [`note_on`].
pub fn note_off(pitch: u8, velocity: u8, channel: u8) -> Result<Message> {
    note(status::NOTE_OFF, pitch, velocity, channel)
}

fn note(kind: u8, pitch: u8, velocity: u8, channel: u8) -> Result<Message> {
    let mut message = Message::new(kind | channel)?;
    message.set_first_byte(pitch)?.set_second_byte(velocity)?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::message_size;

    #[test]
    fn test_new_zero_fills_data_bytes() {
        let msg = Message::new(status::CONTROLLER_CHANGE).unwrap();
        assert_eq!(msg.as_bytes(), &[0xB0, 0, 0]);
        assert_eq!(msg.kind(), MessageKind::ControllerChange);

        let msg = Message::new(status::PROGRAM_CHANGE | 9).unwrap();
        assert_eq!(msg.as_bytes(), &[0xC9, 0]);

        let msg = Message::new(status::TIMING_TICK).unwrap();
        assert_eq!(msg.as_bytes(), &[0xF8]);
    }

    #[test]
    fn test_new_size_matches_catalog() {
        for kind in MessageKind::ALL {
            let msg = Message::new(kind.status_mask()).unwrap();
            match message_size(kind.status_mask()).unwrap() {
                0 => assert_eq!(msg.size(), 2),
                n => assert_eq!(msg.size(), n),
            }
        }
    }

    #[test]
    fn test_new_system_exclusive_placeholder() {
        let msg = Message::new(status::SYSTEM_EXCLUSIVE).unwrap();
        assert_eq!(msg.as_bytes(), &[0xF0, 0]);
        assert_eq!(msg.kind(), MessageKind::SystemExclusive);
    }

    #[test]
    fn test_new_rejects_bad_status() {
        assert_eq!(Message::new(0x3C), Err(Error::InvalidStatusByte(0x3C)));
        assert_eq!(Message::new(0xF4), Err(Error::UnrecognizedMessageType(0xF4)));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Message::parse(&[]), Err(Error::EmptyMessage));
    }

    #[test]
    fn test_parse_truncated() {
        assert_eq!(
            Message::parse(&[0x90]),
            Err(Error::TruncatedMessage {
                expected: 3,
                actual: 1
            })
        );
        assert_eq!(
            Message::parse(&[0xF2, 0x01]),
            Err(Error::TruncatedMessage {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let msg = Message::parse(&[0xC3, 0x05, 0x90, 0x40, 0x40]).unwrap();
        assert_eq!(msg.as_bytes(), &[0xC3, 0x05]);
        assert_eq!(msg.get_channel(), Ok(3));
    }

    #[test]
    fn test_parse_data_byte_first() {
        assert_eq!(Message::parse(&[0x40, 0x7F]), Err(Error::InvalidStatusByte(0x40)));
    }

    #[test]
    fn test_parse_system_exclusive() {
        let msg = Message::parse(&[0xF0, 0x01, 0x02, 0xF7]).unwrap();
        assert_eq!(msg.as_bytes(), &[0xF0, 0x01, 0x02]);
        assert_eq!(msg.kind(), MessageKind::SystemExclusive);

        // Anything after the terminator belongs to the next message.
        let msg = Message::parse(&[0xF0, 0x7E, 0xF7, 0xF8]).unwrap();
        assert_eq!(msg.as_bytes(), &[0xF0, 0x7E]);
    }

    #[test]
    fn test_parse_system_exclusive_unterminated() {
        assert_eq!(
            Message::parse(&[0xF0, 0x01, 0x02]),
            Err(Error::MalformedSystemExclusive)
        );
        assert_eq!(Message::parse(&[0xF0]), Err(Error::MalformedSystemExclusive));
    }

    #[test]
    fn test_round_trip_every_fixed_size_kind() {
        for kind in MessageKind::ALL {
            if kind.size() == 0 {
                continue;
            }
            let mut msg = Message::new(kind.status_mask()).unwrap();
            if kind.is_channel_scoped() {
                msg.set_channel(11).unwrap();
            }
            let _ = msg.set_first_byte(0x12);
            let _ = msg.set_second_byte(0x34);

            let parsed = Message::parse(&msg.serialize()).unwrap();
            assert_eq!(parsed, msg, "{}", kind);
            assert_eq!(parsed.serialize(), msg.serialize());
        }
    }

    #[test]
    fn test_message_type() {
        let msg = Message::new(0x9A).unwrap();
        assert_eq!(msg.message_type(), 0x90);
        assert_eq!(msg.message_type_raw(), 0x9A);

        let msg = Message::new(status::SONG_SELECT).unwrap();
        assert_eq!(msg.message_type(), 0xF3);
        assert_eq!(msg.message_type_raw(), 0xF3);
    }

    #[test]
    fn test_channel() {
        let mut msg = Message::new(status::NOTE_ON).unwrap();
        assert_eq!(msg.set_channel(16).unwrap_err(), Error::ChannelOutOfRange(16));

        msg.set_channel(5).unwrap();
        assert_eq!(msg.get_channel(), Ok(5));
        assert_eq!(msg.message_type(), status::NOTE_ON);
    }

    #[test]
    fn test_channel_or_accumulates() {
        let mut msg = Message::new(status::NOTE_ON).unwrap();
        msg.set_channel(1).unwrap().set_channel(2).unwrap();
        assert_eq!(msg.get_channel(), Ok(3));
    }

    #[test]
    fn test_channel_unsupported_on_system_messages() {
        let mut msg = Message::new(status::TIMING_TICK).unwrap();
        assert_eq!(
            msg.get_channel(),
            Err(Error::UnsupportedOperation {
                operation: "get_channel",
                status: 0xF8
            })
        );
        assert!(matches!(
            msg.set_channel(1),
            Err(Error::UnsupportedOperation { .. })
        ));
        // Range is checked before support.
        assert_eq!(msg.set_channel(99).unwrap_err(), Error::ChannelOutOfRange(99));
    }

    #[test]
    fn test_data_bytes() {
        let mut msg = Message::new(status::ACTIVE_SENSING).unwrap();
        assert_eq!(msg.get_first_byte(), Err(Error::NoDataByte));
        assert_eq!(msg.set_first_byte(1).unwrap_err(), Error::NoDataByte);

        let mut msg = Message::new(status::CHANNEL_PRESSURE).unwrap();
        msg.set_first_byte(0x40).unwrap();
        assert_eq!(msg.get_first_byte(), Ok(0x40));
        assert_eq!(msg.get_second_byte(), Err(Error::NoSecondDataByte));
        assert_eq!(msg.set_second_byte(1).unwrap_err(), Error::NoSecondDataByte);
    }

    #[test]
    fn test_data_bytes_not_masked() {
        let mut msg = Message::new(status::KEY_PRESSURE).unwrap();
        msg.set_first_byte(0xFF).unwrap().set_second_byte(0x80).unwrap();
        assert_eq!(msg.as_bytes(), &[0xA0, 0xFF, 0x80]);
    }

    #[test]
    fn test_int_pitch_bend() {
        let mut msg = Message::new(status::PITCH_BEND).unwrap();
        msg.set_int(0x2000).unwrap();
        assert_eq!(msg.get_int(), Ok(0x2000));
        assert_eq!(msg.as_bytes(), &[0xE0, 0x40, 0x00]);

        assert_eq!(msg.set_int(0x4000).unwrap_err(), Error::ValueOutOfRange(0x4000));
        assert_eq!(msg.get_int(), Ok(0x2000));
    }

    #[test]
    fn test_int_byte_order() {
        let mut msg = Message::new(status::SONG_POSITION).unwrap();
        msg.set_int(0x3FFF).unwrap();
        assert_eq!(msg.as_bytes(), &[0xF2, 0x7F, 0x7F]);

        msg.set_int(0x0081).unwrap();
        assert_eq!(msg.as_bytes(), &[0xF2, 0x01, 0x01]);

        msg.set_int(0x0005).unwrap();
        assert_eq!(msg.as_bytes(), &[0xF2, 0x00, 0x05]);
        assert_eq!(msg.get_int(), Ok(5));
    }

    #[test]
    fn test_int_full_range() {
        let mut msg = Message::new(status::PITCH_BEND | 4).unwrap();
        for value in (0..=MAX_INT).step_by(127) {
            msg.set_int(value).unwrap();
            assert_eq!(msg.get_int(), Ok(value));
        }
    }

    #[test]
    fn test_int_unsupported() {
        let mut msg = Message::new(status::CONTROLLER_CHANGE).unwrap();
        assert!(matches!(
            msg.set_int(1),
            Err(Error::UnsupportedOperation {
                operation: "set_int",
                ..
            })
        ));
        assert!(matches!(msg.get_int(), Err(Error::UnsupportedOperation { .. })));
    }

    #[test]
    fn test_note_constructors() {
        let on = note_on(60, MAX_VELOCITY, 0).unwrap();
        assert_eq!(on.serialize(), vec![0x90, 60, 0x7F]);
        assert_eq!(on.get_channel(), Ok(0));

        let off = note_off(60, MAX_VELOCITY, 0).unwrap();
        assert_eq!(off.serialize(), vec![0x80, 60, 0x7F]);

        let on = note_on(64, 100, 9).unwrap();
        assert_eq!(on.as_bytes(), &[0x99, 64, 100]);
    }

    #[test]
    fn test_note_constructor_channel_overflow() {
        // 0x80 | 16 lands on the NOTE ON nibble.
        let off = note_off(60, 64, 16).unwrap();
        assert_eq!(off.kind(), MessageKind::NoteOn);

        // 0x90 | 0x60 is system exclusive, whose placeholder has no second data byte.
        assert_eq!(note_on(60, 64, 0x60), Err(Error::NoSecondDataByte));
    }

    #[test]
    fn test_default_and_display() {
        let msg = Message::default();
        assert_eq!(msg.kind(), MessageKind::NoteOff);
        assert_eq!(msg.to_string(), "80 3C 7F");
        assert_eq!(Message::parse(msg.as_bytes()), Ok(msg.clone()));
    }

    #[test]
    fn test_conversions() {
        let msg = Message::try_from(&[0xFC][..]).unwrap();
        assert_eq!(msg.kind(), MessageKind::StopSong);
        assert_eq!(msg.validate().unwrap(), &msg);

        let bytes: Vec<u8> = msg.into();
        assert_eq!(bytes, vec![0xFC]);
    }
}
