use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::Represent;
use crate::context::MappingContext;
use crate::records::Driver;

/// Driver profile with its four attachments, each as a raw field and a derived `*_url`.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct DriverRepresentation {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub license_number: String,
    pub license_expiry: Option<NaiveDate>,
    pub face_image: Option<String>,
    pub driving_license_document: Option<String>,
    pub car_insurance_document: Option<String>,
    pub car_rc_document: Option<String>,
    pub face_image_url: Option<String>,
    pub driving_license_document_url: Option<String>,
    pub car_insurance_document_url: Option<String>,
    pub car_rc_document_url: Option<String>,
}

impl Represent for Driver {
    type Representation = DriverRepresentation;

    fn to_representation(&self, ctx: &MappingContext<'_>) -> DriverRepresentation {
        DriverRepresentation {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            address: self.address.clone(),
            license_number: self.license_number.clone(),
            license_expiry: self.license_expiry,
            face_image: ctx.file_field(self.face_image.as_ref()),
            driving_license_document: ctx.file_field(self.driving_license_document.as_ref()),
            car_insurance_document: ctx.file_field(self.car_insurance_document.as_ref()),
            car_rc_document: ctx.file_field(self.car_rc_document.as_ref()),
            face_image_url: ctx.file_url(self.face_image.as_ref()),
            driving_license_document_url: ctx.file_url(self.driving_license_document.as_ref()),
            car_insurance_document_url: ctx.file_url(self.car_insurance_document.as_ref()),
            car_rc_document_url: ctx.file_url(self.car_rc_document.as_ref()),
        }
    }
}
