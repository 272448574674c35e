//! In-memory output that records every short message it is handed.
//!
//! Useful as a stand-in for hardware in tests and headless environments.
//! Failures can be injected through the shared [`SendLog`].

use std::sync::Arc;

use parking_lot::Mutex;

use super::{BackendConfig, DeviceDetails, DeviceTechnology, OutputBackend, OutputDeviceInfo, ShortMessage};
use crate::error::{Error, Result};

const DEVICE_NAME: &str = "Recording Output";

#[derive(Default)]
struct RecordingState {
    sent: Vec<ShortMessage>,
    connects: usize,
    disconnects: usize,
    fail_connect: bool,
    fail_transmit: bool,
}

/// Shared view of what a [`RecordingBackend`] has sent.
#[derive(Clone, Default)]
pub struct SendLog {
    state: Arc<Mutex<RecordingState>>,
}

impl SendLog {
    pub fn sent(&self) -> Vec<ShortMessage> {
        self.state.lock().sent.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().sent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().sent.is_empty()
    }

    pub fn clear(&self) {
        self.state.lock().sent.clear();
    }

    pub fn connect_count(&self) -> usize {
        self.state.lock().connects
    }

    pub fn disconnect_count(&self) -> usize {
        self.state.lock().disconnects
    }

    /// Make subsequent connects fail with `ConnectFailed`.
    pub fn fail_connect(&self, fail: bool) {
        self.state.lock().fail_connect = fail;
    }

    /// Make subsequent sends fail with `TransmitFailed`.
    pub fn fail_transmit(&self, fail: bool) {
        self.state.lock().fail_transmit = fail;
    }
}

pub struct RecordingBackend {
    details: DeviceDetails,
    connected: bool,
    log: SendLog,
}

impl RecordingBackend {
    /// A fresh backend and the log it records into.
    pub fn with_log() -> (Self, SendLog) {
        let log = SendLog::default();
        let backend = Self {
            details: DeviceDetails {
                index: 0,
                name: DEVICE_NAME.to_string(),
                manufacturer_id: 0,
                product_id: 0,
                technology: DeviceTechnology::Software,
            },
            connected: false,
            log: log.clone(),
        };
        (backend, log)
    }

    /// Report custom identity details, e.g. to exercise capability queries.
    pub fn with_details(mut self, details: DeviceDetails) -> Self {
        self.details = details;
        self
    }

    pub fn log(&self) -> SendLog {
        self.log.clone()
    }
}

impl OutputBackend for RecordingBackend {
    fn device_count(_config: &BackendConfig) -> usize {
        1
    }

    fn list_devices(_config: &BackendConfig) -> Vec<OutputDeviceInfo> {
        vec![OutputDeviceInfo {
            index: 0,
            name: DEVICE_NAME.to_string(),
        }]
    }

    fn open(index: usize, config: &BackendConfig) -> Result<Self> {
        let available = Self::device_count(config);
        if index >= available {
            return Err(Error::NoSuchDevice { index, available });
        }
        Ok(Self::with_log().0)
    }

    fn details(&self) -> &DeviceDetails {
        &self.details
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) -> Result<()> {
        let mut state = self.log.state.lock();
        if state.fail_connect {
            return Err(Error::ConnectFailed("injected connect failure".to_string()));
        }
        state.connects += 1;
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.log.state.lock().disconnects += 1;
        self.connected = false;
    }

    fn send_short(&mut self, message: ShortMessage) -> Result<()> {
        let mut state = self.log.state.lock();
        if state.fail_transmit {
            return Err(Error::TransmitFailed("injected transmit failure".to_string()));
        }
        state.sent.push(message);
        Ok(())
    }
}
