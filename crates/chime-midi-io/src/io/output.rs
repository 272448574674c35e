//! Hardware MIDI output via midir.
//!
//! midir exposes no manufacturer/product identifiers or port technology, so
//! those details are reported as 0 and [`DeviceTechnology::Unknown`].

use midir::{MidiOutput, MidiOutputConnection};
use tracing::{debug, warn};

use super::{BackendConfig, DeviceDetails, DeviceTechnology, OutputBackend, OutputDeviceInfo, ShortMessage};
use crate::error::{Error, Result};

pub struct MidirBackend {
    details: DeviceDetails,
    config: BackendConfig,
    connection: Option<MidiOutputConnection>,
}

impl MidirBackend {
    fn connect_to_device(&self) -> Result<MidiOutputConnection> {
        let midi_output = MidiOutput::new(&self.config.client_name)?;

        let ports = midi_output.ports();
        let port = ports.get(self.details.index).ok_or_else(|| {
            Error::ConnectFailed(format!(
                "MIDI output device {} no longer available",
                self.details.index
            ))
        })?;

        Ok(midi_output.connect(port, &self.config.connection_name)?)
    }
}

impl OutputBackend for MidirBackend {
    fn device_count(config: &BackendConfig) -> usize {
        match MidiOutput::new(&config.client_name) {
            Ok(midi_output) => midi_output.port_count(),
            Err(e) => {
                warn!("Cannot enumerate MIDI outputs: {}", e);
                0
            }
        }
    }

    fn list_devices(config: &BackendConfig) -> Vec<OutputDeviceInfo> {
        let mut devices = Vec::new();
        if let Ok(midi_output) = MidiOutput::new(&config.client_name) {
            let ports = midi_output.ports();
            for (index, port) in ports.iter().enumerate() {
                let name = midi_output
                    .port_name(port)
                    .unwrap_or_else(|_| format!("Unknown Device {}", index));
                devices.push(OutputDeviceInfo { index, name });
            }
        }
        devices
    }

    fn open(index: usize, config: &BackendConfig) -> Result<Self> {
        let midi_output = MidiOutput::new(&config.client_name)?;

        let ports = midi_output.ports();
        let port = ports.get(index).ok_or(Error::NoSuchDevice {
            index,
            available: ports.len(),
        })?;
        let name = midi_output.port_name(port)?;

        debug!("Opened MIDI output device {}: {}", index, name);

        Ok(Self {
            details: DeviceDetails {
                index,
                name,
                manufacturer_id: 0,
                product_id: 0,
                technology: DeviceTechnology::Unknown,
            },
            config: config.clone(),
            connection: None,
        })
    }

    fn details(&self) -> &DeviceDetails {
        &self.details
    }

    fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    fn connect(&mut self) -> Result<()> {
        self.connection = Some(self.connect_to_device()?);
        Ok(())
    }

    fn disconnect(&mut self) {
        if let Some(conn) = self.connection.take() {
            conn.close();
        }
    }

    fn send_short(&mut self, message: ShortMessage) -> Result<()> {
        let conn = self.connection.as_mut().ok_or(Error::NotConnected)?;
        conn.send(message.as_bytes())?;
        Ok(())
    }
}

impl Drop for MidirBackend {
    fn drop(&mut self) {
        self.disconnect();
    }
}
