use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Represent;
use crate::context::MappingContext;
use crate::records::Police;
use crate::validation::Validate;

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct PoliceRepresentation {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub badge_number: String,
    pub station_name: String,
    pub rank: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub badge_document: Option<String>,
    pub badge_document_url: Option<String>,
    pub police_active: bool,
}

impl Represent for Police {
    type Representation = PoliceRepresentation;

    fn to_representation(&self, ctx: &MappingContext<'_>) -> PoliceRepresentation {
        PoliceRepresentation {
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            badge_number: self.badge_number.clone(),
            station_name: self.station_name.clone(),
            rank: self.rank.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            badge_document: ctx.file_field(self.badge_document.as_ref()),
            badge_document_url: ctx.file_url(self.badge_document.as_ref()),
            police_active: self.police_active,
        }
    }
}

/// Candidate data for registering an officer. Coordinates may be sent later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PoliceInput {
    pub username: String,
    pub email: String,
    pub first_name: String,
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
    #[serde(default = "default_active")]
    pub police_active: bool,
}

impl Validate for PoliceInput {}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializers::test_support::{file, request};
    use crate::validation::parse_input;
    use crate::HealthHelpError;

    fn officer() -> Police {
        Police {
            id: 8,
            username: "meera".into(),
            email: "meera@police.example".into(),
            first_name: "Meera".into(),
            last_name: "Iyer".into(),
            gender: Some("female".into()),
            badge_number: "B-1024".into(),
            station_name: "Harbour".into(),
            rank: "Sub-Inspector".into(),
            latitude: Some(12.97),
            longitude: Some(77.59),
            badge_document: None,
            police_active: true,
        }
    }

    #[test]
    fn absent_badge_document_gives_null_url() {
        let req = request();
        let rep = officer().to_representation(&MappingContext::with_request(&req));
        assert_eq!(rep.badge_document, None);
        assert_eq!(rep.badge_document_url, None);
    }

    #[test]
    fn badge_document_url_is_absolute() {
        let mut record = officer();
        record.badge_document = Some(file("/media/badges/8.pdf"));

        let req = request();
        let rep = record.to_representation(&MappingContext::with_request(&req));
        assert_eq!(
            rep.badge_document_url.as_deref(),
            Some("https://api.healthhelp.test/media/badges/8.pdf")
        );
    }

    #[test]
    fn coordinates_are_optional_on_input() {
        let input: PoliceInput = parse_input(
            r#"{
                "username": "meera",
                "email": "meera@police.example",
                "first_name": "Meera",
                "last_name": "Iyer",
                "badge_number": "B-1024",
                "station_name": "Harbour",
                "rank": "Sub-Inspector"
            }"#,
        )
        .expect("valid police input");

        assert!(input.latitude.is_none());
        assert!(input.longitude.is_none());
        assert!(input.police_active);
    }

    #[test]
    fn badge_number_is_required() {
        let err = parse_input::<PoliceInput>(
            r#"{
                "username": "meera",
                "email": "meera@police.example",
                "first_name": "Meera",
                "last_name": "Iyer",
                "station_name": "Harbour",
                "rank": "Sub-Inspector"
            }"#,
        )
        .expect_err("missing badge number");

        assert!(matches!(
            err,
            HealthHelpError::Field { ref path, .. } if path == "badge_number"
        ));
    }
}
