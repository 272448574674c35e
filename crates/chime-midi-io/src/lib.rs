//! MIDI output subsystem for chime.
//!
//! Wraps one output device in a thread-safe [`Output`] handle exposed through
//! the [`MidiSink`] capability, and provides the scoped [`Note`] helper.
//!
//! Feature gates: `midi-io` (hardware backend via midir).

pub mod error;
pub use error::{Error, Result};

mod sink;
pub use sink::MidiSink;

mod device;
pub use device::{DeviceSelector, Output, OutputBuilder};

pub mod io;
pub use io::{
    BackendConfig, DeviceDetails, DeviceTechnology, OutputBackend, OutputDeviceInfo,
    RecordingBackend, SendLog, ShortMessage,
};

#[cfg(feature = "midi-io")]
pub use io::MidirBackend;

/// Output bound to the platform MIDI system.
#[cfg(feature = "midi-io")]
pub type HardwareOutput = Output<MidirBackend>;

pub mod note;
pub use note::Note;

pub use chime_midi::{note_off, note_on, Message, MessageKind};
