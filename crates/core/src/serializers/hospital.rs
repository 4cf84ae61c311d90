//! Hospital mapper and the bed-capacity rule.
//!
//! `available_beds <= total_beds` is only enforced here, on inbound data. Records read from
//! the store are mapped as they are.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Represent;
use crate::context::MappingContext;
use crate::records::Hospital;
use crate::validation::Validate;
use crate::{HealthHelpError, HealthHelpResult};

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct HospitalRepresentation {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_number: Option<String>,
    pub total_beds: u32,
    pub available_beds: u32,
}

impl Represent for Hospital {
    type Representation = HospitalRepresentation;

    fn to_representation(&self, _ctx: &MappingContext<'_>) -> HospitalRepresentation {
        HospitalRepresentation {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            contact_number: self.contact_number.clone(),
            total_beds: self.total_beds,
            available_beds: self.available_beds,
        }
    }
}

/// Candidate hospital data.
///
/// Bed counts may be omitted (for example on a partial update); an omitted count takes
/// part in the capacity check as `0` and is left out of the validated output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HospitalInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_beds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_beds: Option<u32>,
}

impl Validate for HospitalInput {
    fn validate(self) -> HealthHelpResult<Self> {
        check_bed_capacity(self.total_beds, self.available_beds)?;
        Ok(self)
    }
}

/// Reject `available > total`, counting a missing value as `0`.
///
/// # Errors
///
/// Returns [`HealthHelpError::BedsExceedTotal`] when more beds are available than exist.
pub fn check_bed_capacity(
    total_beds: Option<u32>,
    available_beds: Option<u32>,
) -> HealthHelpResult<()> {
    let total = total_beds.unwrap_or(0);
    let available = available_beds.unwrap_or(0);

    if available > total {
        tracing::debug!(total, available, "rejecting hospital bed counts");
        return Err(HealthHelpError::BedsExceedTotal);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializers::to_mapping;
    use crate::validation::parse_input;

    fn input(total: Option<u32>, available: Option<u32>) -> HospitalInput {
        HospitalInput {
            name: "City General".into(),
            address: None,
            latitude: None,
            longitude: None,
            contact_number: None,
            total_beds: total,
            available_beds: available,
        }
    }

    #[test]
    fn more_available_than_total_is_rejected() {
        let err = input(Some(10), Some(12)).validate().expect_err("12 > 10");
        assert!(matches!(err, HealthHelpError::BedsExceedTotal));
        assert_eq!(err.to_string(), "Available beds cannot exceed total beds.");
    }

    #[test]
    fn available_within_total_is_accepted() {
        let validated = input(Some(10), Some(5)).validate().expect("5 <= 10");
        assert_eq!(validated.total_beds, Some(10));
        assert_eq!(validated.available_beds, Some(5));
    }

    #[test]
    fn equal_counts_are_accepted() {
        assert!(input(Some(7), Some(7)).validate().is_ok());
        assert!(input(Some(0), Some(0)).validate().is_ok());
    }

    #[test]
    fn missing_counts_are_treated_as_zero() {
        assert!(input(None, None).validate().is_ok());
        assert!(input(Some(3), None).validate().is_ok());
        assert!(input(None, Some(1)).validate().is_err());
    }

    #[test]
    fn capacity_rule_holds_across_a_range() {
        for total in 0..20u32 {
            for available in 0..20u32 {
                let result = check_bed_capacity(Some(total), Some(available));
                assert_eq!(result.is_ok(), available <= total, "{available}/{total}");
            }
        }
    }

    #[test]
    fn parse_then_validate_from_json() {
        let ok: HospitalInput =
            parse_input(r#"{"name": "City General", "total_beds": 10, "available_beds": 5}"#)
                .expect("valid hospital");
        let json = serde_json::to_value(&ok).expect("serialize");
        assert_eq!(json["available_beds"], 5);
        assert_eq!(json["total_beds"], 10);

        let err = parse_input::<HospitalInput>(
            r#"{"name": "City General", "total_beds": 10, "available_beds": 12}"#,
        )
        .expect_err("over capacity");
        assert!(matches!(err, HealthHelpError::BedsExceedTotal));
    }

    #[test]
    fn negative_beds_are_a_type_error() {
        let err = parse_input::<HospitalInput>(r#"{"name": "City General", "total_beds": -1}"#)
            .expect_err("negative");
        assert!(matches!(
            err,
            HealthHelpError::Field { ref path, .. } if path == "total_beds"
        ));
    }

    #[test]
    fn stored_record_is_mapped_as_is() {
        let record = Hospital {
            id: 2,
            name: "St. Mary's".into(),
            address: Some("1 Hill St".into()),
            latitude: None,
            longitude: None,
            contact_number: Some("080-1234".into()),
            total_beds: 10,
            available_beds: 12,
        };

        let map = to_mapping(&record, &MappingContext::detached()).expect("mapping");
        assert_eq!(map["total_beds"], 10);
        assert_eq!(map["available_beds"], 12);
        assert_eq!(map["name"], "St. Mary's");
    }
}
