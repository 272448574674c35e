//! MIDI 1.0 status-byte catalog.
//!
//! Channel-voice kinds are identified by the high nibble of the status byte
//! (the low nibble carries the channel). System kinds are identified by the
//! full byte.

use crate::error::{Error, Result};

/// Raw status byte values.
pub mod status {
    pub const NOTE_OFF: u8 = 0x80;
    pub const NOTE_ON: u8 = 0x90;
    pub const KEY_PRESSURE: u8 = 0xA0;
    pub const CONTROLLER_CHANGE: u8 = 0xB0;
    pub const PROGRAM_CHANGE: u8 = 0xC0;
    pub const CHANNEL_PRESSURE: u8 = 0xD0;
    pub const PITCH_BEND: u8 = 0xE0;

    pub const SYSTEM_EXCLUSIVE: u8 = 0xF0;
    pub const SONG_POSITION: u8 = 0xF2;
    pub const SONG_SELECT: u8 = 0xF3;
    pub const BUS_SELECT: u8 = 0xF5;
    pub const TUNE_REQUEST: u8 = 0xF6;
    /// Terminates a system exclusive record. Never a message on its own.
    pub const END_OF_SYSTEM_EXCLUSIVE: u8 = 0xF7;
    pub const TIMING_TICK: u8 = 0xF8;
    pub const START_SONG: u8 = 0xFA;
    pub const CONTINUE_SONG: u8 = 0xFB;
    pub const STOP_SONG: u8 = 0xFC;
    pub const ACTIVE_SENSING: u8 = 0xFE;
    pub const SYSTEM_RESET: u8 = 0xFF;

    /// Mask selecting the kind nibble of a channel-voice status byte.
    pub const KIND_MASK: u8 = 0xF0;
    /// Mask selecting the channel nibble of a channel-voice status byte.
    pub const CHANNEL_MASK: u8 = 0x0F;
    /// Nibble shared by every system message.
    pub const SYSTEM: u8 = 0xF0;
}

/// Number of data bytes following the status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadLength {
    None,
    One,
    Two,
    /// Runs until [`status::END_OF_SYSTEM_EXCLUSIVE`].
    Unterminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    NoteOff,
    NoteOn,
    KeyPressure,
    ControllerChange,
    ProgramChange,
    ChannelPressure,
    PitchBend,
    SystemExclusive,
    SongPosition,
    SongSelect,
    BusSelect,
    TuneRequest,
    TimingTick,
    StartSong,
    ContinueSong,
    StopSong,
    ActiveSensing,
    SystemReset,
}

impl MessageKind {
    pub const ALL: [MessageKind; 18] = [
        MessageKind::NoteOff,
        MessageKind::NoteOn,
        MessageKind::KeyPressure,
        MessageKind::ControllerChange,
        MessageKind::ProgramChange,
        MessageKind::ChannelPressure,
        MessageKind::PitchBend,
        MessageKind::SystemExclusive,
        MessageKind::SongPosition,
        MessageKind::SongSelect,
        MessageKind::BusSelect,
        MessageKind::TuneRequest,
        MessageKind::TimingTick,
        MessageKind::StartSong,
        MessageKind::ContinueSong,
        MessageKind::StopSong,
        MessageKind::ActiveSensing,
        MessageKind::SystemReset,
    ];

    /// Classify a status byte.
    ///
    /// Fails with [`Error::InvalidStatusByte`] for data bytes (high bit clear)
    /// and [`Error::UnrecognizedMessageType`] for undefined system bytes
    /// (0xF1, 0xF4, 0xF7, 0xF9, 0xFD).
    pub fn from_status(byte: u8) -> Result<MessageKind> {
        if byte & 0x80 == 0 {
            return Err(Error::InvalidStatusByte(byte));
        }

        let kind = match byte & status::KIND_MASK {
            status::NOTE_OFF => MessageKind::NoteOff,
            status::NOTE_ON => MessageKind::NoteOn,
            status::KEY_PRESSURE => MessageKind::KeyPressure,
            status::CONTROLLER_CHANGE => MessageKind::ControllerChange,
            status::PROGRAM_CHANGE => MessageKind::ProgramChange,
            status::CHANNEL_PRESSURE => MessageKind::ChannelPressure,
            status::PITCH_BEND => MessageKind::PitchBend,
            _ => match byte {
                status::SYSTEM_EXCLUSIVE => MessageKind::SystemExclusive,
                status::SONG_POSITION => MessageKind::SongPosition,
                status::SONG_SELECT => MessageKind::SongSelect,
                status::BUS_SELECT => MessageKind::BusSelect,
                status::TUNE_REQUEST => MessageKind::TuneRequest,
                status::TIMING_TICK => MessageKind::TimingTick,
                status::START_SONG => MessageKind::StartSong,
                status::CONTINUE_SONG => MessageKind::ContinueSong,
                status::STOP_SONG => MessageKind::StopSong,
                status::ACTIVE_SENSING => MessageKind::ActiveSensing,
                status::SYSTEM_RESET => MessageKind::SystemReset,
                _ => return Err(Error::UnrecognizedMessageType(byte)),
            },
        };
        Ok(kind)
    }

    /// Identifying byte: the high nibble for channel kinds, the full byte otherwise.
    pub const fn status_mask(self) -> u8 {
        match self {
            MessageKind::NoteOff => status::NOTE_OFF,
            MessageKind::NoteOn => status::NOTE_ON,
            MessageKind::KeyPressure => status::KEY_PRESSURE,
            MessageKind::ControllerChange => status::CONTROLLER_CHANGE,
            MessageKind::ProgramChange => status::PROGRAM_CHANGE,
            MessageKind::ChannelPressure => status::CHANNEL_PRESSURE,
            MessageKind::PitchBend => status::PITCH_BEND,
            MessageKind::SystemExclusive => status::SYSTEM_EXCLUSIVE,
            MessageKind::SongPosition => status::SONG_POSITION,
            MessageKind::SongSelect => status::SONG_SELECT,
            MessageKind::BusSelect => status::BUS_SELECT,
            MessageKind::TuneRequest => status::TUNE_REQUEST,
            MessageKind::TimingTick => status::TIMING_TICK,
            MessageKind::StartSong => status::START_SONG,
            MessageKind::ContinueSong => status::CONTINUE_SONG,
            MessageKind::StopSong => status::STOP_SONG,
            MessageKind::ActiveSensing => status::ACTIVE_SENSING,
            MessageKind::SystemReset => status::SYSTEM_RESET,
        }
    }

    #[inline]
    pub const fn is_channel_scoped(self) -> bool {
        self.status_mask() < status::SYSTEM
    }

    pub const fn payload_length(self) -> PayloadLength {
        match self {
            MessageKind::NoteOff
            | MessageKind::NoteOn
            | MessageKind::KeyPressure
            | MessageKind::ControllerChange
            | MessageKind::PitchBend
            | MessageKind::SongPosition => PayloadLength::Two,
            MessageKind::ProgramChange
            | MessageKind::ChannelPressure
            | MessageKind::SongSelect
            | MessageKind::BusSelect => PayloadLength::One,
            MessageKind::SystemExclusive => PayloadLength::Unterminated,
            MessageKind::TuneRequest
            | MessageKind::TimingTick
            | MessageKind::StartSong
            | MessageKind::ContinueSong
            | MessageKind::StopSong
            | MessageKind::ActiveSensing
            | MessageKind::SystemReset => PayloadLength::None,
        }
    }

    /// Total size including the status byte; 0 for unterminated kinds.
    pub const fn size(self) -> usize {
        match self.payload_length() {
            PayloadLength::None => 1,
            PayloadLength::One => 2,
            PayloadLength::Two => 3,
            PayloadLength::Unterminated => 0,
        }
    }

    /// Whether the two data bytes form one 14-bit integer.
    #[inline]
    pub const fn carries_int(self) -> bool {
        matches!(self, MessageKind::SongPosition | MessageKind::PitchBend)
    }

    pub const fn name(self) -> &'static str {
        match self {
            MessageKind::NoteOff => "note off",
            MessageKind::NoteOn => "note on",
            MessageKind::KeyPressure => "key pressure",
            MessageKind::ControllerChange => "controller change",
            MessageKind::ProgramChange => "program change",
            MessageKind::ChannelPressure => "channel pressure",
            MessageKind::PitchBend => "pitch bend",
            MessageKind::SystemExclusive => "system exclusive",
            MessageKind::SongPosition => "song position",
            MessageKind::SongSelect => "song select",
            MessageKind::BusSelect => "bus select",
            MessageKind::TuneRequest => "tune request",
            MessageKind::TimingTick => "timing tick",
            MessageKind::StartSong => "start song",
            MessageKind::ContinueSong => "continue song",
            MessageKind::StopSong => "stop song",
            MessageKind::ActiveSensing => "active sensing",
            MessageKind::SystemReset => "system reset",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for MessageKind {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        MessageKind::from_status(byte)
    }
}

/// Size in bytes of a message starting with `status_byte`, including the
/// status byte itself. Returns 0 for system exclusive, whose length is only
/// known once its terminator is seen.
pub fn message_size(status_byte: u8) -> Result<usize> {
    MessageKind::from_status(status_byte).map(MessageKind::size)
}
