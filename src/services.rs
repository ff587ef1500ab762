//! Service name catalog.
//!
//! Canonical service names for event metadata and service identification.
//! Every publisher and consumer identifies itself with one of these names;
//! free-form strings drift across deployments and break routing.
//!
//! # Example
//!
//! ```rust
//! use meridian_contracts::Service;
//!
//! let source = Service::UserService;
//! assert_eq!(source.as_str(), "user-service");
//! assert_eq!("hrm-service".parse::<Service>(), Ok(Service::HrmService));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a canonical service name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service name: {0}")]
pub struct UnknownService(pub String);

/// A deployable service in the Meridian microservice topology.
///
/// The set is closed: adding a service means adding a variant here, and
/// removing one is a breaking change for any stored event that referenced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    /// User registration, authentication, and business verification
    UserService,

    /// Hospital Resource Management: profiles, beds, staff, resources
    HrmService,

    /// Email, SMS, push delivery and file handling
    FileNotificationService,

    /// Payment processing, billing, refunds
    PaymentService,

    /// Ambulance dispatch and transport logistics
    TransportService,

    /// Cross-service data aggregation and reporting
    AggregatorService,

    /// API gateway fronting the platform
    GatewayService,
}

impl Service {
    /// Every known service, in declaration order.
    pub const ALL: &'static [Service] = &[
        Service::UserService,
        Service::HrmService,
        Service::FileNotificationService,
        Service::PaymentService,
        Service::TransportService,
        Service::AggregatorService,
        Service::GatewayService,
    ];

    /// The canonical kebab-case name used on the wire and in event metadata.
    pub const fn as_str(self) -> &'static str {
        match self {
            Service::UserService => "user-service",
            Service::HrmService => "hrm-service",
            Service::FileNotificationService => "file-notification-service",
            Service::PaymentService => "payment-service",
            Service::TransportService => "transport-service",
            Service::AggregatorService => "aggregator-service",
            Service::GatewayService => "gateway-service",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .iter()
            .copied()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        assert_eq!(Service::UserService.as_str(), "user-service");
        assert_eq!(Service::FileNotificationService.as_str(), "file-notification-service");
        assert_eq!(Service::GatewayService.as_str(), "gateway-service");
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in Service::ALL.iter().enumerate() {
            for b in &Service::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for service in Service::ALL {
            assert_eq!(service.as_str().parse::<Service>(), Ok(*service));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "billing-service".parse::<Service>().unwrap_err();
        assert_eq!(err, UnknownService("billing-service".to_string()));
    }

    #[test]
    fn test_serde_matches_canonical_name() {
        for service in Service::ALL {
            let json = serde_json::to_string(service).unwrap();
            assert_eq!(json, format!("\"{}\"", service.as_str()));
            let back: Service = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *service);
        }
    }
}
