//! HRM service events: hospital onboarding, beds, staff, resources.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownEventType;

/// Event types published by the HRM service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HrmServiceEvent {
    // Hospital onboarding
    HospitalRegistered,
    HospitalVerified,
    HospitalApproved,
    HospitalRejected,
    HospitalSuspended,

    // Bed management
    BedAllocated,
    BedReleased,
    BedStatusUpdated,
    WardCapacityUpdated,

    // Staff management
    StaffAssigned,
    StaffRemoved,
    ShiftScheduled,
    ShiftUpdated,

    // Resources
    ResourceAllocated,
    ResourceRequested,
    EquipmentAssigned,
    EquipmentMaintenance,

    // Emergencies
    EmergencyAlert,
    CapacityWarning,
    ResourceShortage,
}

impl HrmServiceEvent {
    /// Every HRM event type, in declaration order.
    pub const ALL: &'static [HrmServiceEvent] = &[
        HrmServiceEvent::HospitalRegistered,
        HrmServiceEvent::HospitalVerified,
        HrmServiceEvent::HospitalApproved,
        HrmServiceEvent::HospitalRejected,
        HrmServiceEvent::HospitalSuspended,
        HrmServiceEvent::BedAllocated,
        HrmServiceEvent::BedReleased,
        HrmServiceEvent::BedStatusUpdated,
        HrmServiceEvent::WardCapacityUpdated,
        HrmServiceEvent::StaffAssigned,
        HrmServiceEvent::StaffRemoved,
        HrmServiceEvent::ShiftScheduled,
        HrmServiceEvent::ShiftUpdated,
        HrmServiceEvent::ResourceAllocated,
        HrmServiceEvent::ResourceRequested,
        HrmServiceEvent::EquipmentAssigned,
        HrmServiceEvent::EquipmentMaintenance,
        HrmServiceEvent::EmergencyAlert,
        HrmServiceEvent::CapacityWarning,
        HrmServiceEvent::ResourceShortage,
    ];

    /// The dotted event-type tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            HrmServiceEvent::HospitalRegistered => "hrm.hospital.registered",
            HrmServiceEvent::HospitalVerified => "hrm.hospital.verified",
            HrmServiceEvent::HospitalApproved => "hrm.hospital.approved",
            HrmServiceEvent::HospitalRejected => "hrm.hospital.rejected",
            HrmServiceEvent::HospitalSuspended => "hrm.hospital.suspended",
            HrmServiceEvent::BedAllocated => "hrm.bed.allocated",
            HrmServiceEvent::BedReleased => "hrm.bed.released",
            HrmServiceEvent::BedStatusUpdated => "hrm.bed.status_updated",
            HrmServiceEvent::WardCapacityUpdated => "hrm.ward.capacity_updated",
            HrmServiceEvent::StaffAssigned => "hrm.staff.assigned",
            HrmServiceEvent::StaffRemoved => "hrm.staff.removed",
            HrmServiceEvent::ShiftScheduled => "hrm.shift.scheduled",
            HrmServiceEvent::ShiftUpdated => "hrm.shift.updated",
            HrmServiceEvent::ResourceAllocated => "hrm.resource.allocated",
            HrmServiceEvent::ResourceRequested => "hrm.resource.requested",
            HrmServiceEvent::EquipmentAssigned => "hrm.equipment.assigned",
            HrmServiceEvent::EquipmentMaintenance => "hrm.equipment.maintenance",
            HrmServiceEvent::EmergencyAlert => "hrm.emergency.alert",
            HrmServiceEvent::CapacityWarning => "hrm.capacity.warning",
            HrmServiceEvent::ResourceShortage => "hrm.resource.shortage",
        }
    }
}

impl fmt::Display for HrmServiceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HrmServiceEvent {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HrmServiceEvent::ALL
            .iter()
            .copied()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

impl Serialize for HrmServiceEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HrmServiceEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
