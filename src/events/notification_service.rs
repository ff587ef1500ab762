//! Notification service events: email, SMS, push, and file handling.
//!
//! Published by the file+notification service on its own stream. Delivery
//! lifecycle events carry the provider's status so requesting services can
//! track an email or SMS without calling the provider themselves.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::UnknownEventType;

/// Event types published by the file+notification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationServiceEvent {
    // Email lifecycle
    EmailRequested,
    EmailSending,
    EmailSent,
    EmailFailed,
    EmailDelivered,
    EmailBounced,
    EmailOpened,
    EmailClicked,

    // SMS lifecycle
    SmsRequested,
    SmsSending,
    SmsSent,
    SmsFailed,
    SmsDelivered,
    SmsBounced,

    // Push notifications
    PushRequested,
    PushSent,
    PushFailed,
    PushDelivered,

    // Files
    FileUploaded,
    FileProcessed,
    FileDeleted,
    FileAccessGranted,
    FileAccessRevoked,
}

impl NotificationServiceEvent {
    /// Every notification event type, in declaration order.
    pub const ALL: &'static [NotificationServiceEvent] = &[
        NotificationServiceEvent::EmailRequested,
        NotificationServiceEvent::EmailSending,
        NotificationServiceEvent::EmailSent,
        NotificationServiceEvent::EmailFailed,
        NotificationServiceEvent::EmailDelivered,
        NotificationServiceEvent::EmailBounced,
        NotificationServiceEvent::EmailOpened,
        NotificationServiceEvent::EmailClicked,
        NotificationServiceEvent::SmsRequested,
        NotificationServiceEvent::SmsSending,
        NotificationServiceEvent::SmsSent,
        NotificationServiceEvent::SmsFailed,
        NotificationServiceEvent::SmsDelivered,
        NotificationServiceEvent::SmsBounced,
        NotificationServiceEvent::PushRequested,
        NotificationServiceEvent::PushSent,
        NotificationServiceEvent::PushFailed,
        NotificationServiceEvent::PushDelivered,
        NotificationServiceEvent::FileUploaded,
        NotificationServiceEvent::FileProcessed,
        NotificationServiceEvent::FileDeleted,
        NotificationServiceEvent::FileAccessGranted,
        NotificationServiceEvent::FileAccessRevoked,
    ];

    /// The dotted event-type tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            NotificationServiceEvent::EmailRequested => "email.notification.requested",
            NotificationServiceEvent::EmailSending => "email.notification.sending",
            NotificationServiceEvent::EmailSent => "email.notification.sent",
            NotificationServiceEvent::EmailFailed => "email.notification.failed",
            NotificationServiceEvent::EmailDelivered => "email.notification.delivered",
            NotificationServiceEvent::EmailBounced => "email.notification.bounced",
            NotificationServiceEvent::EmailOpened => "email.notification.opened",
            NotificationServiceEvent::EmailClicked => "email.notification.clicked",
            NotificationServiceEvent::SmsRequested => "sms.notification.requested",
            NotificationServiceEvent::SmsSending => "sms.notification.sending",
            NotificationServiceEvent::SmsSent => "sms.notification.sent",
            NotificationServiceEvent::SmsFailed => "sms.notification.failed",
            NotificationServiceEvent::SmsDelivered => "sms.notification.delivered",
            NotificationServiceEvent::SmsBounced => "sms.notification.bounced",
            NotificationServiceEvent::PushRequested => "push.notification.requested",
            NotificationServiceEvent::PushSent => "push.notification.sent",
            NotificationServiceEvent::PushFailed => "push.notification.failed",
            NotificationServiceEvent::PushDelivered => "push.notification.delivered",
            NotificationServiceEvent::FileUploaded => "file.uploaded",
            NotificationServiceEvent::FileProcessed => "file.processed",
            NotificationServiceEvent::FileDeleted => "file.deleted",
            NotificationServiceEvent::FileAccessGranted => "file.access.granted",
            NotificationServiceEvent::FileAccessRevoked => "file.access.revoked",
        }
    }
}

impl fmt::Display for NotificationServiceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationServiceEvent {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotificationServiceEvent::ALL
            .iter()
            .copied()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

impl Serialize for NotificationServiceEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NotificationServiceEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Where a notification stands in its delivery lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Requested,
    Sending,
    Sent,
    Failed,
    Delivered,
    Bounced,
    Opened,
    Clicked,
}

/// Payload for the email lifecycle events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotificationData {
    pub email_request_id: String,
    pub recipient_email: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recipient_name: Option<String>,

    pub template_id: String,
    pub subject: String,

    pub status: DeliveryStatus,

    /// Delivery provider name (e.g. "sendgrid", "ses")
    pub provider: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sent_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub delivered_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub opened_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub clicked_at: Option<String>,

    /// Sanitized template data the email was rendered with
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub template_data: Option<Value>,
}

/// Payload for the SMS lifecycle events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsNotificationData {
    pub sms_request_id: String,
    pub recipient_phone: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recipient_name: Option<String>,

    pub message_content: String,

    pub status: DeliveryStatus,

    /// Delivery provider name (e.g. "twilio")
    pub provider: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sent_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub delivered_at: Option<String>,

    pub message_length: u32,
    pub segment_count: u32,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cost: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_type_tags() {
        assert_eq!(
            NotificationServiceEvent::EmailSent.as_str(),
            "email.notification.sent"
        );
        assert_eq!(NotificationServiceEvent::FileUploaded.as_str(), "file.uploaded");
        assert_eq!(
            NotificationServiceEvent::FileAccessRevoked.as_str(),
            "file.access.revoked"
        );
    }

    #[test]
    fn test_tags_are_unique() {
        for (i, a) in NotificationServiceEvent::ALL.iter().enumerate() {
            for b in &NotificationServiceEvent::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for event in NotificationServiceEvent::ALL {
            assert_eq!(event.as_str().parse::<NotificationServiceEvent>(), Ok(*event));
        }
        assert!("fax.notification.sent".parse::<NotificationServiceEvent>().is_err());
    }

    #[test]
    fn test_email_payload_serde() {
        let data = EmailNotificationData {
            email_request_id: "req-1".to_string(),
            recipient_email: "ada@example.com".to_string(),
            recipient_name: None,
            template_id: "welcome".to_string(),
            subject: "Welcome to Meridian".to_string(),
            status: DeliveryStatus::Delivered,
            provider: "sendgrid".to_string(),
            error_code: None,
            error_message: None,
            sent_at: Some("2026-08-05T10:00:00+00:00".to_string()),
            delivered_at: Some("2026-08-05T10:00:03+00:00".to_string()),
            opened_at: None,
            clicked_at: None,
            template_data: Some(json!({"firstName": "Ada"})),
        };

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("emailRequestId"));
        assert!(json.contains("\"delivered\""));
        assert!(!json.contains("errorCode"));

        let back: EmailNotificationData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_sms_payload_serde() {
        let data = SmsNotificationData {
            sms_request_id: "sms-1".to_string(),
            recipient_phone: "+2348000000000".to_string(),
            recipient_name: None,
            message_content: "Your OTP is 123456".to_string(),
            status: DeliveryStatus::Sent,
            provider: "twilio".to_string(),
            error_code: None,
            error_message: None,
            sent_at: Some("2026-08-05T10:00:00+00:00".to_string()),
            delivered_at: None,
            message_length: 18,
            segment_count: 1,
            cost: None,
        };

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("smsRequestId"));
        assert!(json.contains("segmentCount"));
        assert!(!json.contains("\"cost\""));

        let back: SmsNotificationData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
