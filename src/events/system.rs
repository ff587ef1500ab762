//! System events: service lifecycle and health.
//!
//! Published by every service to the service-health stream, consumed by the
//! health-monitoring processors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownEventType;

/// Event types published on the service-health stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemEvent {
    /// Published when a service starts up
    ServiceWelcome,
    /// Published in response to a welcome event
    ServiceAcknowledgment,
    /// Published periodically to signal liveness
    ServiceHeartbeat,
    /// Fallback tag for events published without an explicit type
    EventNotSpecified,
}

impl SystemEvent {
    /// Every system event type, in declaration order.
    pub const ALL: &'static [SystemEvent] = &[
        SystemEvent::ServiceWelcome,
        SystemEvent::ServiceAcknowledgment,
        SystemEvent::ServiceHeartbeat,
        SystemEvent::EventNotSpecified,
    ];

    /// The dotted event-type tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            SystemEvent::ServiceWelcome => "service.welcome",
            SystemEvent::ServiceAcknowledgment => "service.acknowledgment",
            SystemEvent::ServiceHeartbeat => "service.heartbeat",
            SystemEvent::EventNotSpecified => "system.event.not_specified",
        }
    }
}

impl fmt::Display for SystemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemEvent {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SystemEvent::ALL
            .iter()
            .copied()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

impl Serialize for SystemEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SystemEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Health state reported in heartbeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Payload for [`SystemEvent::ServiceWelcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceWelcomeData {
    pub service_name: String,
    pub version: String,
    pub environment: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub health_check_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub capabilities: Option<Vec<String>>,
}

/// Payload for [`SystemEvent::ServiceAcknowledgment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAcknowledgmentData {
    pub acknowledged_service: String,
    pub acknowledged_by: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

/// Payload for [`SystemEvent::ServiceHeartbeat`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHeartbeatData {
    pub service_name: String,
    pub status: ServiceStatus,

    /// Seconds since the service started
    pub uptime: u64,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub memory_usage: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cpu_usage: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub active_connections: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_tags() {
        assert_eq!(SystemEvent::ServiceWelcome.as_str(), "service.welcome");
        assert_eq!(
            SystemEvent::EventNotSpecified.as_str(),
            "system.event.not_specified"
        );
    }

    #[test]
    fn test_parse_round_trip() {
        for event in SystemEvent::ALL {
            assert_eq!(event.as_str().parse::<SystemEvent>(), Ok(*event));
        }
        assert!("service.goodbye".parse::<SystemEvent>().is_err());
    }

    #[test]
    fn test_serde_uses_dotted_tag() {
        let json = serde_json::to_string(&SystemEvent::ServiceHeartbeat).unwrap();
        assert_eq!(json, "\"service.heartbeat\"");
        let back: SystemEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SystemEvent::ServiceHeartbeat);
    }

    #[test]
    fn test_heartbeat_payload_serde() {
        let data = ServiceHeartbeatData {
            service_name: "user-service".to_string(),
            status: ServiceStatus::Healthy,
            uptime: 3600,
            memory_usage: Some(0.42),
            cpu_usage: None,
            active_connections: Some(17),
        };

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("serviceName"));
        assert!(json.contains("\"healthy\""));
        assert!(json.contains("memoryUsage"));
        assert!(!json.contains("cpuUsage"));

        let back: ServiceHeartbeatData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
