// ── Device registry collaborator ──
//
// Read-only lookup capability injected into the views that need device
// names. Replaces ambient shared-store access: consumers own the
// registry's population, the engine only reads from it.

use std::collections::HashMap;

use fleetly_api::Device;

/// Read-only device lookup by id.
pub trait DeviceLookup: Send + Sync {
    fn device(&self, id: i64) -> Option<Device>;

    /// Display name for a device, with a synthesized fallback when the id
    /// is not in the registry (e.g. a report referencing a since-deleted
    /// device must still render).
    fn display_name(&self, id: i64) -> String {
        self.device(id)
            .map_or_else(|| format!("Device {id}"), |device| device.name)
    }
}

/// In-memory device registry keyed by id.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    devices: HashMap<i64, Device>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_devices(devices: impl IntoIterator<Item = Device>) -> Self {
        Self {
            devices: devices.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    pub fn insert(&mut self, device: Device) {
        self.devices.insert(device.id, device);
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl DeviceLookup for DeviceRegistry {
    fn device(&self, id: i64) -> Option<Device> {
        self.devices.get(&id).cloned()
    }
}
