//! Persisted records as handed over by the persistence layer.
//!
//! These types are owned by the store; this crate only reads them. Relations that the
//! mappers embed (a patient's medical histories and mobile numbers, an emergency request's
//! patient) are carried on the record, already loaded by the caller.
//!
//! Optional attachments are `Option<FileRef>`. The store writes an empty string for
//! "no file", which deserializes to `None`.

use chrono::{DateTime, NaiveDate, Utc};
use healthhelp_types::FileRef;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, with = "healthhelp_types::optional_file")]
    #[schema(value_type = Option<String>)]
    pub insurance_document: Option<FileRef>,
    #[serde(default, with = "healthhelp_types::optional_file")]
    #[schema(value_type = Option<String>)]
    pub face_image: Option<FileRef>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub medical_histories: Vec<MedicalHistory>,
    #[serde(default)]
    pub mobile_numbers: Vec<MobileNumber>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MedicalHistory {
    pub id: i64,
    /// Owning patient id.
    pub patient: i64,
    pub description: String,
    #[serde(default, with = "healthhelp_types::optional_file")]
    #[schema(value_type = Option<String>)]
    pub document: Option<FileRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MobileNumber {
    pub id: i64,
    /// Owning patient id.
    pub patient: i64,
    pub mobile_number: String,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Driver {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub license_number: String,
    #[serde(default)]
    pub license_expiry: Option<NaiveDate>,
    #[serde(default, with = "healthhelp_types::optional_file")]
    #[schema(value_type = Option<String>)]
    pub face_image: Option<FileRef>,
    #[serde(default, with = "healthhelp_types::optional_file")]
    #[schema(value_type = Option<String>)]
    pub driving_license_document: Option<FileRef>,
    #[serde(default, with = "healthhelp_types::optional_file")]
    #[schema(value_type = Option<String>)]
    pub car_insurance_document: Option<FileRef>,
    #[serde(default, with = "healthhelp_types::optional_file")]
    #[schema(value_type = Option<String>)]
    pub car_rc_document: Option<FileRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Police {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    pub badge_number: String,
    pub station_name: String,
    pub rank: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, with = "healthhelp_types::optional_file")]
    #[schema(value_type = Option<String>)]
    pub badge_document: Option<FileRef>,
    #[serde(default = "default_true")]
    pub police_active: bool,
}

/// Bed counts are not cross-checked here; the store accepts whatever it is given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Hospital {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub contact_number: Option<String>,
    pub total_beds: u32,
    pub available_beds: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmergencyRequest {
    pub id: i64,
    pub patient: Patient,
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
    pub status: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Assigned hospital id, if any.
    #[serde(default)]
    pub hospital: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientTreatment {
    pub id: i64,
    pub patient: i64,
    #[serde(default)]
    pub hospital: Option<i64>,
    #[serde(default)]
    pub emergency_request: Option<i64>,
    pub diagnosis: String,
    pub treatment_details: String,
    #[serde(default)]
    pub medications: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}
