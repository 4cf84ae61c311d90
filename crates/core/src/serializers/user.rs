use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::Represent;
use crate::context::MappingContext;
use crate::records::User;

/// Account fields exposed to clients. Credentials never leave the store.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct UserRepresentation {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl Represent for User {
    type Representation = UserRepresentation;

    fn to_representation(&self, _ctx: &MappingContext<'_>) -> UserRepresentation {
        UserRepresentation {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            address: self.address.clone(),
            is_active: self.is_active,
            is_staff: self.is_staff,
            date_joined: self.date_joined,
            last_login: self.last_login,
        }
    }
}
