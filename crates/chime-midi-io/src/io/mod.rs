//! Output backends.
//!
//! A backend owns the platform connection token for one output device. It is
//! never shared directly: [`Output`](crate::Output) wraps it in a mutex and
//! performs the connection-state checks before delegating here.
//!
//! - [`MidirBackend`]: hardware and OS ports via midir (feature `midi-io`).
//! - [`RecordingBackend`]: in-memory sink that records every short message.

#[cfg(feature = "midi-io")]
mod output;
mod recording;

#[cfg(feature = "midi-io")]
pub use output::MidirBackend;
pub use recording::{RecordingBackend, SendLog};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Names a backend registers with the host MIDI system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub client_name: String,
    pub connection_name: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            client_name: "chime-output".to_string(),
            connection_name: "chime-connection".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceTechnology {
    /// A physical MIDI port.
    Port,
    /// Hardware or software synthesizer.
    Synth,
    /// Virtual or software-only endpoint.
    Software,
    Unknown,
}

/// Identity and capabilities of an output device, queried once at open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDetails {
    pub index: usize,
    pub name: String,
    pub manufacturer_id: u16,
    pub product_id: u16,
    pub technology: DeviceTechnology,
}

impl DeviceDetails {
    #[inline]
    pub fn is_physical_device(&self) -> bool {
        self.technology == DeviceTechnology::Port
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDeviceInfo {
    pub index: usize,
    pub name: String,
}

/// A 1-3 byte message in the form handed to a backend.
///
/// Unused data bytes are zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortMessage {
    pub bytes: [u8; 3],
    /// Valid bytes in `bytes` (1-3).
    pub len: u8,
}

impl ShortMessage {
    #[inline]
    pub fn new(bytes: [u8; 3], len: u8) -> Self {
        Self { bytes, len }
    }

    #[inline]
    pub fn status(&self) -> u8 {
        self.bytes[0]
    }

    #[inline]
    pub fn data(&self) -> (u8, u8) {
        (self.bytes[1], self.bytes[2])
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Status in the low byte, then first and second data bytes.
    #[inline]
    pub fn packed(&self) -> u32 {
        self.bytes[0] as u32 | (self.bytes[1] as u32) << 8 | (self.bytes[2] as u32) << 16
    }
}

/// Platform connection to a single output device.
pub trait OutputBackend: Send + Sized {
    /// Number of output endpoints currently available.
    fn device_count(config: &BackendConfig) -> usize;

    fn list_devices(config: &BackendConfig) -> Vec<OutputDeviceInfo>;

    /// Select the device at `index` and query its details. Does not connect.
    fn open(index: usize, config: &BackendConfig) -> Result<Self>;

    fn details(&self) -> &DeviceDetails;

    fn is_connected(&self) -> bool;

    /// Called only while disconnected.
    fn connect(&mut self) -> Result<()>;

    /// Called only while connected.
    fn disconnect(&mut self);

    /// Called only while connected.
    fn send_short(&mut self, message: ShortMessage) -> Result<()>;
}
