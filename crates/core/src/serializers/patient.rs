//! Patient, medical history and mobile number mappers.
//!
//! A patient representation embeds the patient's medical histories and mobile numbers,
//! each mapped by its own mapper. The embedded collections are output-only.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{represent_many, Represent};
use crate::context::MappingContext;
use crate::records::{MedicalHistory, MobileNumber, Patient};
use crate::validation::Validate;

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct MedicalHistoryRepresentation {
    pub id: i64,
    pub description: String,
    pub document_url: Option<String>,
}

impl Represent for MedicalHistory {
    type Representation = MedicalHistoryRepresentation;

    fn to_representation(&self, ctx: &MappingContext<'_>) -> MedicalHistoryRepresentation {
        MedicalHistoryRepresentation {
            id: self.id,
            description: self.description.clone(),
            document_url: ctx.file_url(self.document.as_ref()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct MobileNumberRepresentation {
    pub id: i64,
    pub mobile_number: String,
    pub is_primary: bool,
}

impl Represent for MobileNumber {
    type Representation = MobileNumberRepresentation;

    fn to_representation(&self, _ctx: &MappingContext<'_>) -> MobileNumberRepresentation {
        MobileNumberRepresentation {
            id: self.id,
            mobile_number: self.mobile_number.clone(),
            is_primary: self.is_primary,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct PatientRepresentation {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub insurance_document: Option<String>,
    pub face_image: Option<String>,
    pub age: Option<u32>,
    pub blood_group: Option<String>,
    pub face_image_url: Option<String>,
    pub insurance_document_url: Option<String>,
    pub medical_histories: Vec<MedicalHistoryRepresentation>,
    pub mobile_numbers: Vec<MobileNumberRepresentation>,
}

impl Represent for Patient {
    type Representation = PatientRepresentation;

    fn to_representation(&self, ctx: &MappingContext<'_>) -> PatientRepresentation {
        PatientRepresentation {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            address: self.address.clone(),
            insurance_document: ctx.file_field(self.insurance_document.as_ref()),
            face_image: ctx.file_field(self.face_image.as_ref()),
            age: self.age,
            blood_group: self.blood_group.clone(),
            face_image_url: ctx.file_url(self.face_image.as_ref()),
            insurance_document_url: ctx.file_url(self.insurance_document.as_ref()),
            medical_histories: represent_many(&self.medical_histories, ctx),
            mobile_numbers: represent_many(&self.mobile_numbers, ctx),
        }
    }
}

/// Candidate data for a new medical history entry. The document is uploaded separately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MedicalHistoryInput {
    pub description: String,
}

impl Validate for MedicalHistoryInput {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MobileNumberInput {
    pub mobile_number: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl Validate for MobileNumberInput {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_FALLBACK_BASE_URL;
    use crate::context::BuildAbsoluteUri;
    use crate::serializers::test_support::{file, request};
    use crate::serializers::to_mapping;
    use crate::validation::parse_input;

    fn patient() -> Patient {
        Patient {
            id: 1,
            username: "asha".into(),
            email: "asha@example.org".into(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            gender: Some("female".into()),
            address: Some("12 Lake Road".into()),
            insurance_document: Some(file("/media/insurance/1.pdf")),
            face_image: None,
            age: Some(34),
            blood_group: Some("O+".into()),
            medical_histories: vec![
                MedicalHistory {
                    id: 10,
                    patient: 1,
                    description: "Asthma".into(),
                    document: Some(file("/media/history/10.pdf")),
                },
                MedicalHistory {
                    id: 11,
                    patient: 1,
                    description: "Appendectomy".into(),
                    document: None,
                },
            ],
            mobile_numbers: vec![MobileNumber {
                id: 20,
                patient: 1,
                mobile_number: "+91 98765 43210".into(),
                is_primary: true,
            }],
        }
    }

    #[test]
    fn nested_collections_match_related_record_counts() {
        let record = patient();
        let rep = record.to_representation(&MappingContext::detached());
        assert_eq!(rep.medical_histories.len(), record.medical_histories.len());
        assert_eq!(rep.mobile_numbers.len(), record.mobile_numbers.len());
        assert_eq!(rep.medical_histories[0].id, 10);
        assert_eq!(rep.mobile_numbers[0].mobile_number, "+91 98765 43210");
    }

    #[test]
    fn patient_without_relations_has_empty_collections() {
        let mut record = patient();
        record.medical_histories.clear();
        record.mobile_numbers.clear();

        let rep = record.to_representation(&MappingContext::detached());
        assert!(rep.medical_histories.is_empty());
        assert!(rep.mobile_numbers.is_empty());
    }

    #[test]
    fn urls_use_request_context_when_present() {
        let req = request();
        let rep = patient().to_representation(&MappingContext::with_request(&req));

        assert_eq!(
            rep.insurance_document_url.as_deref(),
            Some(req.build_absolute_uri("/media/insurance/1.pdf").as_str())
        );
        assert_eq!(rep.face_image_url, None);
        assert_eq!(
            rep.medical_histories[0].document_url.as_deref(),
            Some("https://api.healthhelp.test/media/history/10.pdf")
        );
        assert_eq!(rep.medical_histories[1].document_url, None);
    }

    #[test]
    fn urls_fall_back_without_request_context() {
        let rep = patient().to_representation(&MappingContext::detached());
        assert_eq!(
            rep.insurance_document_url,
            Some(format!("{DEFAULT_FALLBACK_BASE_URL}/media/insurance/1.pdf"))
        );
        assert_eq!(rep.insurance_document.as_deref(), Some("/media/insurance/1.pdf"));
        assert_eq!(
            rep.medical_histories[0].document_url,
            Some(format!("{DEFAULT_FALLBACK_BASE_URL}/media/history/10.pdf"))
        );
    }

    #[test]
    fn stored_location_reaches_the_url_unchanged() {
        let req = request();
        let mut record = patient();
        record.face_image = Some(file("/media/a\tb.png"));
        record.insurance_document = Some(file("/media/insurance/1.pdf  "));

        let rep = record.to_representation(&MappingContext::with_request(&req));
        assert_eq!(
            rep.face_image_url,
            Some(req.build_absolute_uri("/media/a\tb.png"))
        );
        assert_eq!(
            rep.insurance_document_url,
            Some(req.build_absolute_uri("/media/insurance/1.pdf  "))
        );

        let detached = record.to_representation(&MappingContext::detached());
        assert_eq!(
            detached.insurance_document_url,
            Some(format!("{DEFAULT_FALLBACK_BASE_URL}/media/insurance/1.pdf  "))
        );
    }

    #[test]
    fn mapping_keeps_declared_field_order() {
        let map = to_mapping(&patient(), &MappingContext::detached()).expect("mapping");
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "id",
                "username",
                "email",
                "first_name",
                "last_name",
                "gender",
                "address",
                "insurance_document",
                "face_image",
                "age",
                "blood_group",
                "face_image_url",
                "insurance_document_url",
                "medical_histories",
                "mobile_numbers",
            ]
        );
        assert!(map.contains_key("face_image_url"));
        assert!(map["face_image_url"].is_null());
        assert_eq!(map["age"], 34);
    }

    #[test]
    fn mobile_number_input_defaults_to_not_primary() {
        let input: MobileNumberInput =
            parse_input(r#"{"mobile_number": "+1 555 0100"}"#).expect("valid");
        assert!(!input.is_primary);
    }

    #[test]
    fn medical_history_input_requires_description() {
        assert!(parse_input::<MedicalHistoryInput>("{}").is_err());
    }
}
