//! MIDI 1.0 message codec for chime.
//!
//! Classifies status bytes, builds and parses validated messages, and
//! serializes them back to the exact wire bytes.
//!
//! # Example
//!
//! ```
//! use chime_midi::{message_size, Message, MessageKind};
//!
//! assert_eq!(message_size(0x93)?, 3);
//!
//! let msg = Message::parse(&[0xF0, 0x7E, 0x01, 0xF7])?;
//! assert_eq!(msg.kind(), MessageKind::SystemExclusive);
//! assert_eq!(msg.as_bytes(), &[0xF0, 0x7E, 0x01]);
//! # Ok::<(), chime_midi::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod kind;
pub use kind::{message_size, status, MessageKind, PayloadLength};

mod message;
pub use message::{note_off, note_on, Message, MAX_INT};

mod constants;
pub use constants::{MAX_VELOCITY, MIDDLE_C};

pub(crate) mod interop;
pub(crate) mod serde_support;

// Re-export the upstream message type used by `Message::to_midi_msg`.
pub use midi_msg::MidiMsg;
