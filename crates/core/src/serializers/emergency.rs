use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patient::PatientRepresentation;
use super::Represent;
use crate::context::MappingContext;
use crate::records::EmergencyRequest;
use crate::validation::Validate;

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct EmergencyRequestRepresentation {
    pub id: i64,
    pub patient: PatientRepresentation,
    pub start_location_latitude: f64,
    pub start_location_longitude: f64,
    pub start_location_name: Option<String>,
    pub end_location_latitude: Option<f64>,
    pub end_location_longitude: Option<f64>,
    pub end_location_name: Option<String>,
    pub emergency_type: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub hospital: Option<i64>,
}

impl Represent for EmergencyRequest {
    type Representation = EmergencyRequestRepresentation;

    fn to_representation(&self, ctx: &MappingContext<'_>) -> EmergencyRequestRepresentation {
        EmergencyRequestRepresentation {
            id: self.id,
            patient: self.patient.to_representation(ctx),
            start_location_latitude: self.start_location_latitude,
            start_location_longitude: self.start_location_longitude,
            start_location_name: self.start_location_name.clone(),
            end_location_latitude: self.end_location_latitude,
            end_location_longitude: self.end_location_longitude,
            end_location_name: self.end_location_name.clone(),
            emergency_type: self.emergency_type.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
            priority: self.priority.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            hospital: self.hospital,
        }
    }
}

/// Candidate data for raising an emergency request.
///
/// The patient is taken from the caller's session, never from the body, so a `patient`
/// key in the input is ignored along with the timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmergencyRequestInput {
    pub start_location_latitude: f64,
    pub start_location_longitude: f64,
    #[serde(default)]
    pub start_location_name: Option<String>,
    #[serde(default)]
    pub end_location_latitude: Option<f64>,
    #[serde(default)]
    pub end_location_longitude: Option<f64>,
    #[serde(default)]
    pub end_location_name: Option<String>,
    pub emergency_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub hospital: Option<i64>,
}

impl Validate for EmergencyRequestInput {}

fn default_status() -> String {
    "pending".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}
