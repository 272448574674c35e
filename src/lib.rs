//! # Chime - MIDI 1.0 messages and output devices
//!
//! ## Architecture
//!
//! Chime is an umbrella crate that coordinates:
//! - **chime-midi** - Message codec (status catalog, validated messages, parse/serialize)
//! - **chime-midi-io** - Output subsystem (device sinks, hardware backend, scoped notes)
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use chime::prelude::*;
//!
//! let output = Arc::new(
//!     HardwareOutput::builder()
//!         .device_name("IAC")
//!         .auto_connect(true)
//!         .build()?,
//! );
//!
//! output.transmit(&note_on(64, 100, 0)?)?;
//! {
//!     let _c = Note::middle_c(&output)?;
//!     // NOTE OFF goes out when `_c` leaves scope
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Codec plus hardware output
//! - `midi-io` - Hardware MIDI output via midir

/// Re-export of chime-midi for direct access
pub use chime_midi as midi;

/// Re-export of chime-midi-io for direct access
pub use chime_midi_io as io;

pub use chime_midi::{message_size, note_off, note_on, status, Message, MessageKind, MidiMsg};
pub use chime_midi_io::{MidiSink, Note, Output, OutputBuilder, RecordingBackend};

#[cfg(feature = "midi-io")]
pub use chime_midi_io::HardwareOutput;

mod error;
pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{note_off, note_on, Message, MessageKind};
    pub use crate::{MidiSink, Note, Output};

    pub use crate::midi::{MAX_VELOCITY, MIDDLE_C};

    #[cfg(feature = "midi-io")]
    pub use crate::HardwareOutput;
}
