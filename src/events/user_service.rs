//! User service events: registration, authentication, verification.
//!
//! Published on the user-service stream (registration workflows also fan out
//! onto the business-verification stream).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Address, BusinessType, ContactInfo, UnknownEventType, VerificationStatus};

/// Event types published by the user service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserServiceEvent {
    // Registration
    CustomerRegistered,
    BusinessRegistered,
    AdminCreated,
    AgentInvited,
    AgentAccepted,
    AgentRejected,
    AgentActivated,

    // Authentication
    CustomerLoggedIn,
    CustomerLoggedOut,
    BusinessLoggedIn,
    BusinessLoggedOut,
    AdminLoggedIn,
    AdminLoggedOut,
    PasswordResetRequested,
    PasswordChanged,

    // Verification
    EmailVerified,
    PhoneVerified,
    BusinessVerified,
    BusinessRejected,
    BusinessVerification,

    // Business verification workflow (internal)
    BusinessVerificationApproved,
    BusinessVerificationRejected,
    BusinessDocumentsSubmitted,

    // Profile
    ProfileUpdated,
    PreferencesUpdated,

    // Hospital approval
    HospitalReadyForApproval,
    HospitalApprovalDecision,
}

impl UserServiceEvent {
    /// Every user service event type, in declaration order.
    pub const ALL: &'static [UserServiceEvent] = &[
        UserServiceEvent::CustomerRegistered,
        UserServiceEvent::BusinessRegistered,
        UserServiceEvent::AdminCreated,
        UserServiceEvent::AgentInvited,
        UserServiceEvent::AgentAccepted,
        UserServiceEvent::AgentRejected,
        UserServiceEvent::AgentActivated,
        UserServiceEvent::CustomerLoggedIn,
        UserServiceEvent::CustomerLoggedOut,
        UserServiceEvent::BusinessLoggedIn,
        UserServiceEvent::BusinessLoggedOut,
        UserServiceEvent::AdminLoggedIn,
        UserServiceEvent::AdminLoggedOut,
        UserServiceEvent::PasswordResetRequested,
        UserServiceEvent::PasswordChanged,
        UserServiceEvent::EmailVerified,
        UserServiceEvent::PhoneVerified,
        UserServiceEvent::BusinessVerified,
        UserServiceEvent::BusinessRejected,
        UserServiceEvent::BusinessVerification,
        UserServiceEvent::BusinessVerificationApproved,
        UserServiceEvent::BusinessVerificationRejected,
        UserServiceEvent::BusinessDocumentsSubmitted,
        UserServiceEvent::ProfileUpdated,
        UserServiceEvent::PreferencesUpdated,
        UserServiceEvent::HospitalReadyForApproval,
        UserServiceEvent::HospitalApprovalDecision,
    ];

    /// The dotted event-type tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            UserServiceEvent::CustomerRegistered => "user.customer.registered",
            UserServiceEvent::BusinessRegistered => "user.business.registered",
            UserServiceEvent::AdminCreated => "user.admin.created",
            UserServiceEvent::AgentInvited => "user.agent.invited",
            UserServiceEvent::AgentAccepted => "user.agent.accepted",
            UserServiceEvent::AgentRejected => "user.agent.rejected",
            UserServiceEvent::AgentActivated => "user.agent.activated",
            UserServiceEvent::CustomerLoggedIn => "user.customer.logged_in",
            UserServiceEvent::CustomerLoggedOut => "user.customer.logged_out",
            UserServiceEvent::BusinessLoggedIn => "user.business.logged_in",
            UserServiceEvent::BusinessLoggedOut => "user.business.logged_out",
            UserServiceEvent::AdminLoggedIn => "user.admin.logged_in",
            UserServiceEvent::AdminLoggedOut => "user.admin.logged_out",
            UserServiceEvent::PasswordResetRequested => "user.password.reset_requested",
            UserServiceEvent::PasswordChanged => "user.password.changed",
            UserServiceEvent::EmailVerified => "user.email.verified",
            UserServiceEvent::PhoneVerified => "user.phone.verified",
            UserServiceEvent::BusinessVerified => "user.business.verified",
            UserServiceEvent::BusinessRejected => "user.business.rejected",
            UserServiceEvent::BusinessVerification => "user.business.verification",
            UserServiceEvent::BusinessVerificationApproved => "business.verification.approved",
            UserServiceEvent::BusinessVerificationRejected => "business.verification.rejected",
            UserServiceEvent::BusinessDocumentsSubmitted => "business.documents.submitted",
            UserServiceEvent::ProfileUpdated => "user.profile.updated",
            UserServiceEvent::PreferencesUpdated => "user.preferences.updated",
            UserServiceEvent::HospitalReadyForApproval => "user.hospital.ready_for_approval",
            UserServiceEvent::HospitalApprovalDecision => "user.hospital.approval_decision",
        }
    }
}

impl fmt::Display for UserServiceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserServiceEvent {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserServiceEvent::ALL
            .iter()
            .copied()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

impl Serialize for UserServiceEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserServiceEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Channel through which a registration arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationSource {
    Web,
    Mobile,
    Admin,
    Agent,
}

/// Account lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
}

/// Business onboarding progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Agent's answer to an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationResponse {
    Accepted,
    Rejected,
}

/// Payload for [`UserServiceEvent::CustomerRegistered`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRegistrationData {
    pub customer_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date_of_birth: Option<String>,

    pub contact_info: ContactInfo,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<Address>,

    pub registered_at: String,
    pub registration_source: RegistrationSource,
    pub verification_status: VerificationStatus,
    pub account_status: AccountStatus,
}

/// Payload for [`UserServiceEvent::BusinessRegistered`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRegistrationData {
    pub business_id: String,
    pub business_name: String,
    pub business_type: BusinessType,
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub registration_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub license_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tax_id: Option<String>,

    pub contact_info: ContactInfo,
    pub address: Address,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website: Option<String>,

    pub owner_id: String,
    pub owner_email: String,
    pub owner_name: String,

    pub registered_at: String,
    pub verification_status: VerificationStatus,
    pub onboarding_status: OnboardingStatus,

    pub requires_hrm_integration: bool,
    pub requires_payment_integration: bool,
    pub marketing_consent: bool,
}

/// Payload for [`UserServiceEvent::AgentInvited`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentInvitationData {
    pub invitation_id: String,
    pub business_id: String,
    pub business_name: String,

    pub invitee_email: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub invitee_name: Option<String>,

    pub role_title: String,
    pub permissions: Vec<String>,

    /// User ID of the person sending the invitation
    pub invited_by: String,
    pub invited_at: String,
    pub expires_at: String,
    pub invitation_token: String,

    pub send_welcome_email: bool,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub custom_message: Option<String>,
}

/// Payload for [`UserServiceEvent::AgentAccepted`] and
/// [`UserServiceEvent::AgentRejected`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponseData {
    pub invitation_id: String,
    pub business_id: String,

    pub agent_id: String,
    pub agent_email: String,
    pub agent_name: String,

    pub response: InvitationResponse,
    pub responded_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_tags() {
        assert_eq!(
            UserServiceEvent::CustomerRegistered.as_str(),
            "user.customer.registered"
        );
        assert_eq!(
            UserServiceEvent::BusinessVerificationApproved.as_str(),
            "business.verification.approved"
        );
        assert_eq!(
            UserServiceEvent::HospitalApprovalDecision.as_str(),
            "user.hospital.approval_decision"
        );
    }

    #[test]
    fn test_tags_are_unique() {
        for (i, a) in UserServiceEvent::ALL.iter().enumerate() {
            for b in &UserServiceEvent::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for event in UserServiceEvent::ALL {
            assert_eq!(event.as_str().parse::<UserServiceEvent>(), Ok(*event));
        }
        assert!("user.customer.deleted".parse::<UserServiceEvent>().is_err());
    }

    #[test]
    fn test_registration_payload_serde() {
        let data = CustomerRegistrationData {
            customer_id: "c-123".to_string(),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            date_of_birth: None,
            contact_info: ContactInfo {
                phone: "+2348000000000".to_string(),
                alternate_phone: None,
                emergency_contact: None,
            },
            address: None,
            registered_at: "2026-08-05T10:00:00+00:00".to_string(),
            registration_source: RegistrationSource::Mobile,
            verification_status: VerificationStatus::Pending,
            account_status: AccountStatus::Active,
        };

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("customerId"));
        assert!(json.contains("registrationSource"));
        assert!(json.contains("\"mobile\""));
        assert!(!json.contains("dateOfBirth"));

        let back: CustomerRegistrationData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_invitation_response_wire_casing() {
        assert_eq!(
            serde_json::to_string(&InvitationResponse::Accepted).unwrap(),
            "\"accepted\""
        );
    }
}
