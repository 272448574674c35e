//! Output builder for selecting and configuring a device.

use std::marker::PhantomData;

use tracing::debug;

use super::Output;
use crate::error::{Error, Result};
use crate::io::{BackendConfig, OutputBackend};
use crate::sink::MidiSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelector {
    Index(usize),
    /// Case-insensitive substring of the device name.
    Name(String),
}

pub struct OutputBuilder<B> {
    selector: DeviceSelector,
    config: BackendConfig,
    auto_connect: bool,
    _backend: PhantomData<fn() -> B>,
}

impl<B> Default for OutputBuilder<B> {
    fn default() -> Self {
        Self {
            selector: DeviceSelector::Index(0),
            config: BackendConfig::default(),
            auto_connect: false,
            _backend: PhantomData,
        }
    }
}

impl<B: OutputBackend> OutputBuilder<B> {
    pub fn device(mut self, index: usize) -> Self {
        self.selector = DeviceSelector::Index(index);
        self
    }

    pub fn device_name(mut self, name: impl Into<String>) -> Self {
        self.selector = DeviceSelector::Name(name.into());
        self
    }

    /// Name this client registers with the host MIDI system.
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.config.client_name = name.into();
        self
    }

    /// Label for the connection/port created on connect.
    pub fn connection_name(mut self, name: impl Into<String>) -> Self {
        self.config.connection_name = name.into();
        self
    }

    pub fn config(mut self, config: BackendConfig) -> Self {
        self.config = config;
        self
    }

    /// Connect as part of `build`.
    pub fn auto_connect(mut self, enabled: bool) -> Self {
        self.auto_connect = enabled;
        self
    }

    pub fn build(self) -> Result<Output<B>> {
        let index = match self.selector {
            DeviceSelector::Index(index) => index,
            DeviceSelector::Name(ref name) => resolve_by_name::<B>(name, &self.config)?,
        };

        let output = Output::open_with(index, &self.config)?;
        if self.auto_connect {
            output.connect()?;
        }
        Ok(output)
    }
}

fn resolve_by_name<B: OutputBackend>(name: &str, config: &BackendConfig) -> Result<usize> {
    let needle = name.to_lowercase();
    let device = B::list_devices(config)
        .into_iter()
        .find(|d| d.name.to_lowercase().contains(&needle))
        .ok_or_else(|| Error::NoMatchingDevice(name.to_string()))?;

    debug!("Resolved MIDI output '{}' to device {}", name, device.index);
    Ok(device.index)
}
