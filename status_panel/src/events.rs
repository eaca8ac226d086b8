use serde::{Deserialize, Serialize};

use crate::model::{MqttState, OpenValueTs, PowerUsage, SpaceDevices, StatusState, Timestamp};

/// One server-push event, tagged with the stream's event names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum StatusEvent {
    #[serde(rename = "mqtt")]
    Mqtt(MqttState),
    #[serde(rename = "spaceOpen")]
    SpaceOpen(OpenValueTs),
    #[serde(rename = "radstelleOpen")]
    RadstelleOpen(OpenValueTs),
    #[serde(rename = "lab3dOpen")]
    Lab3dOpen(OpenValueTs),
    #[serde(rename = "machining")]
    Machining(OpenValueTs),
    #[serde(rename = "woodworking")]
    Woodworking(OpenValueTs),
    #[serde(rename = "keyholder")]
    Keyholder(String),
    #[serde(rename = "keyholder_machining")]
    KeyholderMachining(String),
    #[serde(rename = "keyholder_woodworking")]
    KeyholderWoodworking(String),
    #[serde(rename = "spaceDevices")]
    SpaceDevices(SpaceDevices),
    #[serde(rename = "powerUsage")]
    PowerUsage(PowerUsage),
    #[serde(rename = "keepalive")]
    Keepalive { timestamp: Timestamp },
}

impl StatusState {
    /// Folds one event into the panel state.
    pub fn apply(&mut self, event: &StatusEvent) {
        match event {
            StatusEvent::Mqtt(mqtt) => self.mqtt = *mqtt,
            StatusEvent::SpaceOpen(value) => self.space = *value,
            StatusEvent::RadstelleOpen(value) => self.radstelle = *value,
            StatusEvent::Lab3dOpen(value) => self.lab3d = *value,
            StatusEvent::Machining(value) => self.machining = *value,
            StatusEvent::Woodworking(value) => self.woodworking = *value,
            StatusEvent::Keyholder(name) => self.keyholder = name.clone(),
            StatusEvent::KeyholderMachining(name) => self.keyholder_machining = name.clone(),
            StatusEvent::KeyholderWoodworking(name) => self.keyholder_woodworking = name.clone(),
            StatusEvent::SpaceDevices(devices) => self.devices = devices.clone(),
            StatusEvent::PowerUsage(power) => self.power = *power,
            StatusEvent::Keepalive { timestamp } => self.last_keepalive = *timestamp,
        }
    }

    pub fn replay<'a>(&mut self, events: impl IntoIterator<Item = &'a StatusEvent>) {
        for event in events {
            self.apply(event);
        }
    }
}
