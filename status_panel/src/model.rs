use serde::{Deserialize, Serialize};

/// Unix timestamp in seconds, 0 meaning "never seen".
pub type Timestamp = i64;

/// Opening state of an area, with the exact wire spellings used by the
/// status broker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenValue {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "keyholder")]
    Keyholder,
    #[serde(rename = "member")]
    Member,
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "open+")]
    OpenPlus,
    /// Derived state, announced shortly before closing.
    #[serde(rename = "closing")]
    Closing,
}

impl OpenValue {
    pub fn is_public_open(self) -> bool {
        matches!(self, OpenValue::Open | OpenValue::OpenPlus)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenValueTs {
    #[serde(rename = "state")]
    pub value: OpenValue,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MqttState {
    pub connected: bool,
    #[serde(rename = "spaceBrokerOnline")]
    pub space_broker_online: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceDevices {
    #[serde(rename = "peopleCount")]
    pub people_count: u32,
    #[serde(rename = "unknownDevicesCount")]
    pub unknown_devices_count: u32,
    #[serde(default)]
    pub people: Vec<Person>,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerValueTs {
    pub value: f64,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerUsage {
    pub front: PowerValueTs,
    pub back: PowerValueTs,
    pub machining: PowerValueTs,
}

/// Everything the status panel shows, one instance per session.
///
/// All mutation goes through [`StatusState::apply`]; the per-topic
/// timestamps live inside the value structs instead of a shared
/// module-global map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusState {
    pub mqtt: MqttState,
    pub space: OpenValueTs,
    pub radstelle: OpenValueTs,
    pub lab3d: OpenValueTs,
    pub machining: OpenValueTs,
    pub woodworking: OpenValueTs,
    pub keyholder: String,
    pub keyholder_machining: String,
    pub keyholder_woodworking: String,
    pub devices: SpaceDevices,
    pub power: PowerUsage,
    pub last_keepalive: Timestamp,
}
