//! Event envelope types.
//!
//! Every payload published to a Meridian stream rides in an
//! [`EventEnvelope`]: a stable outer shape carrying identity, timing, the
//! event-type tag, and tracing metadata. Field names are camelCase on the
//! wire for compatibility with the platform's existing consumers.
//!
//! # Example
//!
//! ```json
//! {
//!   "eventId": "8f14e45f-...",
//!   "timestamp": "2026-08-05T10:00:00+00:00",
//!   "eventType": "user.customer.registered",
//!   "data": { "customerId": "c-123" },
//!   "metadata": {
//!     "correlationId": "abc-123",
//!     "sourceService": "user-service",
//!     "version": "1.0",
//!     "priority": "normal"
//!   }
//! }
//! ```

use crate::services::Service;
use crate::CONTRACT_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery priority attached to event metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Tracing and schema metadata carried by every envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetadata {
    /// Correlation ID for tracing an event across services
    pub correlation_id: String,

    /// Service that published the event
    pub source_service: Service,

    /// Schema version of the envelope
    pub version: String,

    /// Delivery priority
    #[serde(default)]
    pub priority: EventPriority,

    /// How many times delivery has been retried, if the publisher tracks it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub retry_count: Option<u32>,

    /// Service that originally requested the action, when it differs from
    /// the publisher (e.g. the service that asked for an email to be sent)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub original_request_source: Option<String>,
}

impl EventMetadata {
    /// Create metadata for an event published by `source`.
    ///
    /// A fresh correlation ID is stamped so the event is traceable even when
    /// the publisher has no inbound request to inherit one from.
    pub fn new(source: Service) -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            source_service: source,
            version: CONTRACT_VERSION.to_string(),
            priority: EventPriority::default(),
            retry_count: None,
            original_request_source: None,
        }
    }
}

/// An event as it appears on a stream.
///
/// # Fields
///
/// - `event_id`: unique ID assigned at construction (UUID v4)
/// - `timestamp`: RFC 3339 UTC timestamp, set when the envelope is built
/// - `event_type`: dotted event-type tag used for dispatch
///   (e.g. `"user.customer.registered"`)
/// - `data`: the typed payload
/// - `metadata`: tracing and schema metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope<T> {
    /// Unique event ID
    pub event_id: String,

    /// RFC 3339 timestamp when the envelope was built
    pub timestamp: String,

    /// Dotted event-type tag (e.g. "hrm.bed.allocated")
    pub event_type: String,

    /// Event payload
    pub data: T,

    /// Tracing and schema metadata
    pub metadata: EventMetadata,
}

impl<T> EventEnvelope<T> {
    /// Build an envelope around `data`, stamping a fresh event ID and the
    /// current UTC time.
    pub fn new(event_type: impl Into<String>, data: T, source: Service) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            event_type: event_type.into(),
            data,
            metadata: EventMetadata::new(source),
        }
    }

    /// Replace the generated correlation ID with an inherited one.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.correlation_id = id.into();
        self
    }

    /// Set the delivery priority.
    pub fn with_priority(mut self, priority: EventPriority) -> Self {
        self.metadata.priority = priority;
        self
    }

    /// Record the current retry attempt.
    pub fn with_retry_count(mut self, count: u32) -> Self {
        self.metadata.retry_count = Some(count);
        self
    }

    /// Record which service originally requested the action.
    pub fn with_original_request_source(mut self, source: impl Into<String>) -> Self {
        self.metadata.original_request_source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_deserialize() {
        let json_str = r#"{
            "eventId": "evt-1",
            "timestamp": "2026-08-05T10:00:00+00:00",
            "eventType": "user.customer.registered",
            "data": {"customerId": "c-123"},
            "metadata": {
                "correlationId": "corr-1",
                "sourceService": "user-service",
                "version": "1.0",
                "priority": "high"
            }
        }"#;

        let envelope: EventEnvelope<serde_json::Value> = serde_json::from_str(json_str).unwrap();
        assert_eq!(envelope.event_id, "evt-1");
        assert_eq!(envelope.event_type, "user.customer.registered");
        assert_eq!(envelope.data["customerId"], "c-123");
        assert_eq!(envelope.metadata.source_service, Service::UserService);
        assert_eq!(envelope.metadata.priority, EventPriority::High);
        assert!(envelope.metadata.retry_count.is_none());
    }

    #[test]
    fn test_envelope_serialize_camel_case() {
        let envelope = EventEnvelope::new(
            "service.heartbeat",
            json!({"serviceName": "user-service"}),
            Service::UserService,
        );

        let json_str = serde_json::to_string(&envelope).unwrap();
        assert!(json_str.contains("eventId"));
        assert!(json_str.contains("eventType"));
        assert!(json_str.contains("correlationId"));
        assert!(json_str.contains("sourceService"));
        // optional metadata is omitted when unset
        assert!(!json_str.contains("retryCount"));
        assert!(!json_str.contains("originalRequestSource"));
    }

    #[test]
    fn test_envelope_builder() {
        let envelope =
            EventEnvelope::new("email.notification.sent", json!({}), Service::FileNotificationService)
                .with_correlation_id("corr-42")
                .with_priority(EventPriority::Urgent)
                .with_retry_count(2)
                .with_original_request_source("user-service");

        assert_eq!(envelope.metadata.correlation_id, "corr-42");
        assert_eq!(envelope.metadata.priority, EventPriority::Urgent);
        assert_eq!(envelope.metadata.retry_count, Some(2));
        assert_eq!(
            envelope.metadata.original_request_source.as_deref(),
            Some("user-service")
        );
    }

    #[test]
    fn test_new_envelope_stamps_identity() {
        let a = EventEnvelope::new("service.welcome", json!({}), Service::GatewayService);
        let b = EventEnvelope::new("service.welcome", json!({}), Service::GatewayService);

        assert_ne!(a.event_id, b.event_id);
        assert!(!a.metadata.correlation_id.is_empty());
        assert_eq!(a.metadata.version, CONTRACT_VERSION);
    }

    #[test]
    fn test_priority_wire_casing() {
        assert_eq!(
            serde_json::to_string(&EventPriority::Urgent).unwrap(),
            "\"urgent\""
        );
        let parsed: EventPriority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, EventPriority::Low);
    }

    #[test]
    fn test_envelope_round_trip() {
        let envelope =
            EventEnvelope::new("hrm.bed.allocated", json!({"bedId": 7}), Service::HrmService)
                .with_priority(EventPriority::High);

        let json_str = serde_json::to_string(&envelope).unwrap();
        let back: EventEnvelope<serde_json::Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(back, envelope);
    }
}
