//! Event stream catalog and stream ownership.
//!
//! Stream names are the single source of truth for every Meridian service.
//! All publishers and consumers must go through these constants so that a
//! rename propagates everywhere at once instead of leaving stale literals
//! scattered across services.
//!
//! Naming convention: `{service-name}-events`, kebab-case, one stream per
//! publishing service plus two system-level streams.
//!
//! # Example
//!
//! ```rust
//! use meridian_contracts::{EventStream, StreamOwner, is_valid_stream};
//!
//! // Publisher
//! assert_eq!(EventStream::UserServiceEvents.as_str(), "user-service-events");
//!
//! // Which streams does a service own?
//! let owned = StreamOwner::UserService.streams();
//! assert_eq!(owned.len(), 2);
//!
//! // Guard against typos before touching the broker
//! assert!(is_valid_stream("user-service-events"));
//! assert!(!is_valid_stream("random-stream"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Error returned when a string is not a canonical stream name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event stream: {0}")]
pub struct UnknownStream(pub String);

/// Error returned when a string is not a known stream owner key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stream owner: {0}")]
pub struct UnknownStreamOwner(pub String);

/// A durable, ordered event stream in the Meridian platform.
///
/// Streams are organized per publishing service, with two system-level
/// streams shared by all services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStream {
    /// User registration, authentication, business verification, agent
    /// invitations. Published by the user service.
    UserServiceEvents,

    /// Hospital profile management, resource updates, bed assignments,
    /// patient admissions. Published by the HRM service.
    HrmServiceEvents,

    /// Email delivery, SMS delivery, file uploads, notification status
    /// updates. Published by the file+notification service.
    NotificationServiceEvents,

    /// Payment processing, transaction updates, billing, refunds.
    /// Published by the payment service.
    PaymentServiceEvents,

    /// Ambulance dispatch, route optimization, transport status updates.
    /// Published by the transport service.
    TransportServiceEvents,

    /// Business verification workflows, document submissions,
    /// approval/rejection. Cross-service, published primarily by the
    /// user service.
    BusinessVerificationEvents,

    /// Service health checks, startup/shutdown events, heartbeats.
    /// Published by all services.
    ServiceHealthEvents,

    /// Security events, data access logs, administrative actions.
    /// Published by all services.
    AuditEvents,
}

impl EventStream {
    /// Every known stream, in declaration order.
    pub const ALL: &'static [EventStream] = &[
        EventStream::UserServiceEvents,
        EventStream::HrmServiceEvents,
        EventStream::NotificationServiceEvents,
        EventStream::PaymentServiceEvents,
        EventStream::TransportServiceEvents,
        EventStream::BusinessVerificationEvents,
        EventStream::ServiceHealthEvents,
        EventStream::AuditEvents,
    ];

    /// The canonical stream name used on the broker.
    pub const fn as_str(self) -> &'static str {
        match self {
            EventStream::UserServiceEvents => "user-service-events",
            EventStream::HrmServiceEvents => "hrm-service-events",
            EventStream::NotificationServiceEvents => "notification-service-events",
            EventStream::PaymentServiceEvents => "payment-service-events",
            EventStream::TransportServiceEvents => "transport-service-events",
            EventStream::BusinessVerificationEvents => "business-verification-events",
            EventStream::ServiceHealthEvents => "service-health-events",
            EventStream::AuditEvents => "audit-events",
        }
    }
}

impl fmt::Display for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStream {
    type Err = UnknownStream;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventStream::ALL
            .iter()
            .copied()
            .find(|stream| stream.as_str() == s)
            .ok_or_else(|| UnknownStream(s.to_string()))
    }
}

/// Check whether a string is a canonical stream name.
///
/// Producers and consumers use this to fail fast on a misspelled stream
/// name before performing any broker I/O.
///
/// # Example
///
/// ```rust
/// use meridian_contracts::is_valid_stream;
///
/// assert!(is_valid_stream("payment-service-events"));
/// assert!(!is_valid_stream("payment-events"));
/// ```
pub fn is_valid_stream(name: &str) -> bool {
    name.parse::<EventStream>().is_ok()
}

/// A stream-owning publisher group.
///
/// One variant per publishing service, plus [`StreamOwner::System`] for the
/// streams every service writes to. Owner keys are upper-snake so they read
/// like the configuration keys service teams already use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamOwner {
    UserService,
    HrmService,
    FileNotificationService,
    PaymentService,
    TransportService,
    /// Streams written by every service rather than a single owner.
    System,
}

impl StreamOwner {
    /// Every owner group, in declaration order.
    pub const ALL: &'static [StreamOwner] = &[
        StreamOwner::UserService,
        StreamOwner::HrmService,
        StreamOwner::FileNotificationService,
        StreamOwner::PaymentService,
        StreamOwner::TransportService,
        StreamOwner::System,
    ];

    /// The symbolic owner key (`"USER_SERVICE"`, ... `"SYSTEM"`).
    pub const fn key(self) -> &'static str {
        match self {
            StreamOwner::UserService => "USER_SERVICE",
            StreamOwner::HrmService => "HRM_SERVICE",
            StreamOwner::FileNotificationService => "FILE_NOTIFICATION_SERVICE",
            StreamOwner::PaymentService => "PAYMENT_SERVICE",
            StreamOwner::TransportService => "TRANSPORT_SERVICE",
            StreamOwner::System => "SYSTEM",
        }
    }

    /// The streams this owner publishes to.
    ///
    /// The mapping is exhaustive: every owner has an entry, and every entry
    /// references catalog streams only.
    pub const fn streams(self) -> &'static [EventStream] {
        match self {
            StreamOwner::UserService => &[
                EventStream::UserServiceEvents,
                EventStream::BusinessVerificationEvents,
            ],
            StreamOwner::HrmService => &[EventStream::HrmServiceEvents],
            StreamOwner::FileNotificationService => &[EventStream::NotificationServiceEvents],
            StreamOwner::PaymentService => &[EventStream::PaymentServiceEvents],
            StreamOwner::TransportService => &[EventStream::TransportServiceEvents],
            StreamOwner::System => &[
                EventStream::ServiceHealthEvents,
                EventStream::AuditEvents,
            ],
        }
    }
}

impl fmt::Display for StreamOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StreamOwner {
    type Err = UnknownStreamOwner;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StreamOwner::ALL
            .iter()
            .copied()
            .find(|owner| owner.key() == s)
            .ok_or_else(|| UnknownStreamOwner(s.to_string()))
    }
}

/// Look up the streams owned by a publisher group, by symbolic key.
///
/// Unknown keys resolve to an empty slice rather than an error so that a
/// caller built against a newer or older revision of this crate degrades
/// gracefully instead of failing at startup.
///
/// # Example
///
/// ```rust
/// use meridian_contracts::streams_by_service;
///
/// let owned = streams_by_service("USER_SERVICE");
/// assert_eq!(owned.len(), 2);
/// assert!(streams_by_service("UNKNOWN_SERVICE").is_empty());
/// ```
pub fn streams_by_service(key: &str) -> &'static [EventStream] {
    match key.parse::<StreamOwner>() {
        Ok(owner) => owner.streams(),
        Err(_) => {
            debug!(owner = %key, "Unknown stream owner key, no streams configured");
            &[]
        }
    }
}

/// Domain-based stream names reserved for the next platform phase.
///
/// When event volume outgrows the per-service layout, traffic migrates to
/// these business-domain streams. Publishing to both stream kinds during the
/// migration window keeps consumers decoupled from the cutover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainStream {
    /// Registration, authentication, profile management, preferences
    UserDomainEvents,

    /// Hospital management, patient care, medical resources
    HealthcareDomainEvents,

    /// Payments, billing, refunds, financial reporting
    FinancialDomainEvents,

    /// Emails, SMS, push notifications, file sharing
    CommunicationDomainEvents,

    /// Ambulance dispatch, routing, scheduling, fleet management
    LogisticsDomainEvents,
}

impl DomainStream {
    /// Every domain stream, in declaration order.
    pub const ALL: &'static [DomainStream] = &[
        DomainStream::UserDomainEvents,
        DomainStream::HealthcareDomainEvents,
        DomainStream::FinancialDomainEvents,
        DomainStream::CommunicationDomainEvents,
        DomainStream::LogisticsDomainEvents,
    ];

    /// The canonical stream name.
    pub const fn as_str(self) -> &'static str {
        match self {
            DomainStream::UserDomainEvents => "user-domain-events",
            DomainStream::HealthcareDomainEvents => "healthcare-domain-events",
            DomainStream::FinancialDomainEvents => "financial-domain-events",
            DomainStream::CommunicationDomainEvents => "communication-domain-events",
            DomainStream::LogisticsDomainEvents => "logistics-domain-events",
        }
    }
}

impl fmt::Display for DomainStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainStream {
    type Err = UnknownStream;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainStream::ALL
            .iter()
            .copied()
            .find(|stream| stream.as_str() == s)
            .ok_or_else(|| UnknownStream(s.to_string()))
    }
}
