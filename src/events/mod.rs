//! Per-service event-type catalogs and payload schemas.
//!
//! Each submodule declares the dotted event-type names one service publishes
//! and the payload shapes that ride inside [`crate::EventEnvelope`] for them.
//! Consumers match on the event-type tag, then deserialize `data` into the
//! matching payload struct.
//!
//! ## Modules
//!
//! - [`user_service`]: registration, authentication, verification
//! - [`hrm_service`]: hospital onboarding, beds, staff, resources
//! - [`notification_service`]: email, SMS, push, files
//! - [`system`]: service lifecycle and health

pub mod hrm_service;
pub mod notification_service;
pub mod system;
pub mod user_service;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use hrm_service::HrmServiceEvent;
pub use notification_service::{
    DeliveryStatus, EmailNotificationData, NotificationServiceEvent, SmsNotificationData,
};
pub use system::{
    ServiceAcknowledgmentData, ServiceHeartbeatData, ServiceStatus, ServiceWelcomeData,
    SystemEvent,
};
pub use user_service::{
    AgentInvitationData, AgentResponseData, BusinessRegistrationData, CustomerRegistrationData,
    RegistrationSource, UserServiceEvent,
};

/// Error returned when a string is not a known event-type tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event type: {0}")]
pub struct UnknownEventType(pub String);

/// Contact details attached to registration payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alternate_phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub emergency_contact: Option<EmergencyContact>,
}

/// Emergency contact person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// Postal address attached to registration payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub postal_code: Option<String>,
}

/// Kind of business entity registering on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    Hospital,
    Clinic,
    DiagnosticCenter,
    Pharmacy,
    Hmo,
}

/// Where an entity stands in the verification workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    InReview,
    Verified,
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_type_wire_casing() {
        assert_eq!(
            serde_json::to_string(&BusinessType::DiagnosticCenter).unwrap(),
            "\"diagnostic-center\""
        );
    }

    #[test]
    fn test_verification_status_wire_casing() {
        assert_eq!(
            serde_json::to_string(&VerificationStatus::InReview).unwrap(),
            "\"in_review\""
        );
    }

    #[test]
    fn test_contact_info_optional_fields_omitted() {
        let contact = ContactInfo {
            phone: "+2348000000000".to_string(),
            alternate_phone: None,
            emergency_contact: None,
        };

        let json = serde_json::to_string(&contact).unwrap();
        assert!(!json.contains("alternatePhone"));
        assert!(!json.contains("emergencyContact"));
    }
}
