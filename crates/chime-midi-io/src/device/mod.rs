//! Mutex-guarded handle to one MIDI output device.
//!
//! ## Quick Start
//!
//! ```no_run
//! use chime_midi::{note_on, MAX_VELOCITY};
//! use chime_midi_io::{HardwareOutput, MidiSink};
//!
//! println!("{} outputs", HardwareOutput::device_count());
//!
//! let output = HardwareOutput::builder()
//!     .device_name("IAC")
//!     .auto_connect(true)
//!     .build()?;
//! output.transmit(&note_on(60, MAX_VELOCITY, 0)?)?;
//! # Ok::<(), chime_midi_io::Error>(())
//! ```

mod builder;

pub use builder::{DeviceSelector, OutputBuilder};

use chime_midi::{Message, MessageKind};
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::io::{BackendConfig, DeviceDetails, OutputBackend, OutputDeviceInfo, ShortMessage};
use crate::sink::MidiSink;

/// Owned connection to a single output device.
///
/// Every operation takes the same lock for its whole duration, so
/// connect/disconnect races resolve in lock order and transmissions from
/// different threads never interleave. Not `Clone`: share it with `Arc`.
pub struct Output<B: OutputBackend> {
    backend: Mutex<B>,
}

impl<B: OutputBackend> Output<B> {
    pub fn builder() -> OutputBuilder<B> {
        OutputBuilder::default()
    }

    /// Open the device at `index` with the default backend names.
    pub fn open(index: usize) -> Result<Self> {
        Self::open_with(index, &BackendConfig::default())
    }

    pub fn open_with(index: usize, config: &BackendConfig) -> Result<Self> {
        B::open(index, config).map(Self::from_backend)
    }

    pub fn from_backend(backend: B) -> Self {
        Self {
            backend: Mutex::new(backend),
        }
    }

    pub fn device_count() -> usize {
        B::device_count(&BackendConfig::default())
    }

    pub fn list_devices() -> Vec<OutputDeviceInfo> {
        B::list_devices(&BackendConfig::default())
    }

    pub fn details(&self) -> DeviceDetails {
        self.backend.lock().details().clone()
    }

    pub fn device_index(&self) -> usize {
        self.backend.lock().details().index
    }
}

impl<B: OutputBackend> MidiSink for Output<B> {
    fn connect(&self) -> Result<()> {
        let mut backend = self.backend.lock();
        if backend.is_connected() {
            return Err(Error::AlreadyConnected);
        }
        backend.connect()?;
        debug!(
            "Connected MIDI output {}: {}",
            backend.details().index,
            backend.details().name
        );
        Ok(())
    }

    fn disconnect(&self) {
        let mut backend = self.backend.lock();
        if backend.is_connected() {
            backend.disconnect();
            debug!("Disconnected MIDI output {}", backend.details().index);
        }
    }

    fn is_connected(&self) -> bool {
        self.backend.lock().is_connected()
    }

    fn transmit(&self, message: &Message) -> Result<()> {
        let mut backend = self.backend.lock();
        let short = short_message(message.validate()?)?;
        if !backend.is_connected() {
            return Err(Error::NotConnected);
        }
        trace!("MIDI out: {}", message);
        backend.send_short(short)
    }

    fn is_physical_device(&self) -> bool {
        self.backend.lock().details().is_physical_device()
    }

    fn manufacturer_id(&self) -> u16 {
        self.backend.lock().details().manufacturer_id
    }

    fn product_id(&self) -> u16 {
        self.backend.lock().details().product_id
    }

    fn product_name(&self) -> String {
        self.backend.lock().details().name.clone()
    }
}

impl<B: OutputBackend> Drop for Output<B> {
    fn drop(&mut self) {
        let backend = self.backend.get_mut();
        if backend.is_connected() {
            backend.disconnect();
        }
    }
}

/// Pack a message for a short-message send, zero-filling absent data bytes.
///
/// System exclusive records are long messages even when their payload is
/// short enough to fit, and are refused.
fn short_message(message: &Message) -> Result<ShortMessage> {
    let bytes = message.as_bytes();
    if message.kind() == MessageKind::SystemExclusive {
        return Err(Error::UnsupportedMessageLength(bytes.len()));
    }
    let packed = match *bytes {
        [status] => [status, 0, 0],
        [status, first] => [status, first, 0],
        [status, first, second] => [status, first, second],
        _ => return Err(Error::UnsupportedMessageLength(bytes.len())),
    };
    Ok(ShortMessage::new(packed, bytes.len() as u8))
}
