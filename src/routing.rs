//! Routing tables binding streams, consumer groups, and services.
//!
//! Two mappings live here, each defined exactly once per key:
//!
//! - [`ConsumerGroup::streams`]: which streams a consumer group subscribes to
//! - [`Service::consumer_groups`]: which groups a service should typically use
//!
//! Stream ownership (the third mapping) lives next to the stream catalog in
//! [`crate::streams`]. All three reference catalog entries only, so an entry
//! cannot point at a stream or group that does not exist.
//!
//! # Example
//!
//! ```rust
//! use meridian_contracts::{ConsumerGroup, EventStream, Service};
//!
//! // Typed lookup
//! let streams = ConsumerGroup::EmailNotificationProcessors.streams();
//! assert!(streams.contains(&EventStream::PaymentServiceEvents));
//!
//! // Name-keyed lookup for callers holding wire-form names
//! let groups = meridian_contracts::service_consumer_groups("hrm-service");
//! assert_eq!(groups.first(), Some(&ConsumerGroup::HrmBusinessProcessors));
//! ```

use crate::consumers::ConsumerGroup;
use crate::services::Service;
use crate::streams::EventStream;
use tracing::debug;

impl ConsumerGroup {
    /// The streams this group subscribes to, in subscription order.
    ///
    /// An empty slice means the group exists but its subscriptions are
    /// configured at deployment time rather than here
    /// ([`ConsumerGroup::IntegrationProcessors`]).
    pub const fn streams(self) -> &'static [EventStream] {
        match self {
            ConsumerGroup::HrmBusinessProcessors => &[
                EventStream::UserServiceEvents,
                EventStream::BusinessVerificationEvents,
            ],
            ConsumerGroup::EmailNotificationProcessors => &[
                EventStream::UserServiceEvents,
                EventStream::HrmServiceEvents,
                EventStream::PaymentServiceEvents,
                EventStream::TransportServiceEvents,
            ],
            ConsumerGroup::SmsNotificationProcessors => &[
                EventStream::UserServiceEvents,
                EventStream::HrmServiceEvents,
                EventStream::TransportServiceEvents,
            ],
            ConsumerGroup::AnalyticsProcessors => &[
                EventStream::UserServiceEvents,
                EventStream::HrmServiceEvents,
                EventStream::NotificationServiceEvents,
                EventStream::PaymentServiceEvents,
                EventStream::TransportServiceEvents,
                EventStream::BusinessVerificationEvents,
                EventStream::ServiceHealthEvents,
            ],
            ConsumerGroup::AuditTrailProcessors => &[
                EventStream::UserServiceEvents,
                EventStream::HrmServiceEvents,
                EventStream::NotificationServiceEvents,
                EventStream::PaymentServiceEvents,
                EventStream::TransportServiceEvents,
                EventStream::BusinessVerificationEvents,
                EventStream::AuditEvents,
            ],
            ConsumerGroup::PaymentProcessors => &[
                EventStream::PaymentServiceEvents,
                EventStream::UserServiceEvents,
            ],
            ConsumerGroup::TransportProcessors => &[
                EventStream::TransportServiceEvents,
                EventStream::HrmServiceEvents,
            ],
            ConsumerGroup::HealthMonitoringProcessors => &[
                EventStream::ServiceHealthEvents,
                EventStream::AuditEvents,
            ],
            // Configured per integration needs
            ConsumerGroup::IntegrationProcessors => &[],
            ConsumerGroup::FileProcessors => &[EventStream::NotificationServiceEvents],
        }
    }
}

impl Service {
    /// The consumer groups this service should typically use.
    pub const fn consumer_groups(self) -> &'static [ConsumerGroup] {
        match self {
            Service::UserService => &[
                ConsumerGroup::AnalyticsProcessors,
                ConsumerGroup::AuditTrailProcessors,
            ],
            Service::HrmService => &[
                ConsumerGroup::HrmBusinessProcessors,
                ConsumerGroup::AnalyticsProcessors,
                ConsumerGroup::AuditTrailProcessors,
            ],
            Service::FileNotificationService => &[
                ConsumerGroup::EmailNotificationProcessors,
                ConsumerGroup::SmsNotificationProcessors,
                ConsumerGroup::FileProcessors,
                ConsumerGroup::AnalyticsProcessors,
            ],
            Service::PaymentService => &[
                ConsumerGroup::PaymentProcessors,
                ConsumerGroup::AnalyticsProcessors,
                ConsumerGroup::AuditTrailProcessors,
            ],
            Service::TransportService => &[
                ConsumerGroup::TransportProcessors,
                ConsumerGroup::AnalyticsProcessors,
            ],
            Service::AggregatorService => &[ConsumerGroup::AnalyticsProcessors],
            Service::GatewayService => &[ConsumerGroup::AuditTrailProcessors],
        }
    }
}

/// Look up the streams a consumer group subscribes to, by canonical name.
///
/// Unknown names resolve to an empty slice, never an error: this crate is a
/// shared dependency of independently deployed services, and a hard failure
/// on a stale or newer group name would couple deployment order to contract
/// upgrades.
///
/// # Example
///
/// ```rust
/// use meridian_contracts::consumer_group_streams;
///
/// let streams = consumer_group_streams("email-notification-processors");
/// assert_eq!(streams.len(), 4);
/// assert!(consumer_group_streams("nonexistent-processors").is_empty());
/// ```
pub fn consumer_group_streams(name: &str) -> &'static [EventStream] {
    match name.parse::<ConsumerGroup>() {
        Ok(group) => group.streams(),
        Err(_) => {
            debug!(consumer_group = %name, "Unknown consumer group, no streams configured");
            &[]
        }
    }
}

/// Look up the recommended consumer groups for a service, by canonical name.
///
/// Same unknown-name policy as [`consumer_group_streams`]: empty slice,
/// never an error.
///
/// # Example
///
/// ```rust
/// use meridian_contracts::{service_consumer_groups, ConsumerGroup};
///
/// let groups = service_consumer_groups("gateway-service");
/// assert_eq!(groups, &[ConsumerGroup::AuditTrailProcessors]);
/// ```
pub fn service_consumer_groups(name: &str) -> &'static [ConsumerGroup] {
    match name.parse::<Service>() {
        Ok(service) => service.consumer_groups(),
        Err(_) => {
            debug!(service = %name, "Unknown service, no consumer groups recommended");
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_processors_subscriptions() {
        assert_eq!(
            consumer_group_streams("email-notification-processors"),
            &[
                EventStream::UserServiceEvents,
                EventStream::HrmServiceEvents,
                EventStream::PaymentServiceEvents,
                EventStream::TransportServiceEvents,
            ]
        );
    }

    #[test]
    fn test_integration_processors_have_no_static_streams() {
        assert!(consumer_group_streams("integration-processors").is_empty());
        // The group itself is known; only its stream list is empty.
        assert!("integration-processors".parse::<ConsumerGroup>().is_ok());
    }

    #[test]
    fn test_hrm_service_recommendations() {
        assert_eq!(
            service_consumer_groups("hrm-service"),
            &[
                ConsumerGroup::HrmBusinessProcessors,
                ConsumerGroup::AnalyticsProcessors,
                ConsumerGroup::AuditTrailProcessors,
            ]
        );
    }

    #[test]
    fn test_unknown_names_resolve_to_empty() {
        assert!(consumer_group_streams("video-processors").is_empty());
        assert!(consumer_group_streams("").is_empty());
        assert!(service_consumer_groups("billing-service").is_empty());
        assert!(service_consumer_groups("HRM_SERVICE").is_empty()); // keys are kebab-case
    }

    #[test]
    fn test_every_group_resolves_through_name_lookup() {
        for group in ConsumerGroup::ALL {
            assert_eq!(consumer_group_streams(group.as_str()), group.streams());
        }
    }

    #[test]
    fn test_every_service_resolves_through_name_lookup() {
        for service in Service::ALL {
            assert_eq!(
                service_consumer_groups(service.as_str()),
                service.consumer_groups()
            );
        }
    }

    #[test]
    fn test_every_service_has_a_recommendation() {
        for service in Service::ALL {
            assert!(
                !service.consumer_groups().is_empty(),
                "{service} should have at least one recommended group"
            );
        }
    }

    #[test]
    fn test_lookups_are_deterministic() {
        let first = consumer_group_streams("analytics-processors");
        let second = consumer_group_streams("analytics-processors");
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn test_audit_trail_reads_audit_stream_but_not_health() {
        let streams = ConsumerGroup::AuditTrailProcessors.streams();
        assert!(streams.contains(&EventStream::AuditEvents));
        assert!(!streams.contains(&EventStream::ServiceHealthEvents));
    }
}
