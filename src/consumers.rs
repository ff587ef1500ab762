//! Consumer group catalog.
//!
//! Consumer groups organize event consumers by processing purpose. Multiple
//! consumers in one group load-balance a stream between them, and each event
//! is processed once per group.
//!
//! Naming convention: `{purpose}-processors`.
//!
//! # Example
//!
//! ```rust
//! use meridian_contracts::ConsumerGroup;
//!
//! let group = ConsumerGroup::EmailNotificationProcessors;
//! assert_eq!(group.as_str(), "email-notification-processors");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a canonical consumer group name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown consumer group: {0}")]
pub struct UnknownConsumerGroup(pub String);

/// A processing group consuming one or more event streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsumerGroup {
    /// HRM business logic: hospital profiles, resource availability
    HrmBusinessProcessors,

    /// Email delivery: welcome emails, verification emails, payment
    /// confirmations
    EmailNotificationProcessors,

    /// SMS delivery: OTP codes, emergency alerts, appointment reminders
    SmsNotificationProcessors,

    /// Analytics, metrics, and reporting over every business stream
    AnalyticsProcessors,

    /// Audit logs for compliance and security
    AuditTrailProcessors,

    /// Payment business logic: invoices, confirmations, refunds
    PaymentProcessors,

    /// Ambulance and transport logistics: dispatch, routing
    TransportProcessors,

    /// System health monitoring and alerting
    HealthMonitoringProcessors,

    /// Third-party integrations and data synchronization; stream
    /// subscriptions are configured per integration
    IntegrationProcessors,

    /// File uploads, transformations, and storage
    FileProcessors,
}

impl ConsumerGroup {
    /// Every known consumer group, in declaration order.
    pub const ALL: &'static [ConsumerGroup] = &[
        ConsumerGroup::HrmBusinessProcessors,
        ConsumerGroup::EmailNotificationProcessors,
        ConsumerGroup::SmsNotificationProcessors,
        ConsumerGroup::AnalyticsProcessors,
        ConsumerGroup::AuditTrailProcessors,
        ConsumerGroup::PaymentProcessors,
        ConsumerGroup::TransportProcessors,
        ConsumerGroup::HealthMonitoringProcessors,
        ConsumerGroup::IntegrationProcessors,
        ConsumerGroup::FileProcessors,
    ];

    /// The canonical group name used on the broker.
    pub const fn as_str(self) -> &'static str {
        match self {
            ConsumerGroup::HrmBusinessProcessors => "hrm-business-processors",
            ConsumerGroup::EmailNotificationProcessors => "email-notification-processors",
            ConsumerGroup::SmsNotificationProcessors => "sms-notification-processors",
            ConsumerGroup::AnalyticsProcessors => "analytics-processors",
            ConsumerGroup::AuditTrailProcessors => "audit-trail-processors",
            ConsumerGroup::PaymentProcessors => "payment-processors",
            ConsumerGroup::TransportProcessors => "transport-processors",
            ConsumerGroup::HealthMonitoringProcessors => "health-monitoring-processors",
            ConsumerGroup::IntegrationProcessors => "integration-processors",
            ConsumerGroup::FileProcessors => "file-processors",
        }
    }
}

impl fmt::Display for ConsumerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsumerGroup {
    type Err = UnknownConsumerGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConsumerGroup::ALL
            .iter()
            .copied()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| UnknownConsumerGroup(s.to_string()))
    }
}
