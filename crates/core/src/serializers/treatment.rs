use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Represent;
use crate::context::MappingContext;
use crate::records::PatientTreatment;
use crate::validation::Validate;

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct PatientTreatmentRepresentation {
    pub id: i64,
    pub patient: i64,
    pub hospital: Option<i64>,
    pub emergency_request: Option<i64>,
    pub diagnosis: String,
    pub treatment_details: String,
    pub medications: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Represent for PatientTreatment {
    type Representation = PatientTreatmentRepresentation;

    fn to_representation(&self, _ctx: &MappingContext<'_>) -> PatientTreatmentRepresentation {
        PatientTreatmentRepresentation {
            id: self.id,
            patient: self.patient,
            hospital: self.hospital,
            emergency_request: self.emergency_request,
            diagnosis: self.diagnosis.clone(),
            treatment_details: self.treatment_details.clone(),
            medications: self.medications.clone(),
            notes: self.notes.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Candidate treatment data. `hospital` is read-only: the treating hospital is the
/// caller's own, so any value sent here is dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientTreatmentInput {
    pub patient: i64,
    #[serde(default)]
    pub emergency_request: Option<i64>,
    pub diagnosis: String,
    pub treatment_details: String,
    #[serde(default)]
    pub medications: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for PatientTreatmentInput {}
