//! HTTP routes for the HealthHelp REST API.
//!
//! Two families of endpoints:
//! - `POST /representations/...` takes a record as loaded by the persistence layer and
//!   returns its representation, with file URLs resolved against the inbound request
//! - `POST /validate/...` takes candidate input and returns the validated data or a
//!   `400` with a field-name to messages map

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, HealthService};
use healthhelp_core::records::{
    Driver, EmergencyRequest, Hospital, MedicalHistory, MobileNumber, Patient, PatientTreatment,
    Police, User,
};
use healthhelp_core::serializers::driver::DriverRepresentation;
use healthhelp_core::serializers::emergency::{
    EmergencyRequestInput, EmergencyRequestRepresentation,
};
use healthhelp_core::serializers::hospital::{HospitalInput, HospitalRepresentation};
use healthhelp_core::serializers::patient::{
    MedicalHistoryInput, MedicalHistoryRepresentation, MobileNumberInput,
    MobileNumberRepresentation, PatientRepresentation,
};
use healthhelp_core::serializers::police::{PoliceInput, PoliceRepresentation};
use healthhelp_core::serializers::treatment::{
    PatientTreatmentInput, PatientTreatmentRepresentation,
};
use healthhelp_core::serializers::user::UserRepresentation;
use healthhelp_core::{
    parse_input, BuildAbsoluteUri, CoreConfig, MappingContext, Represent, Validate,
};

use crate::request::request_context;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<CoreConfig>,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }
}

type ValidationRejection = (StatusCode, Json<BTreeMap<String, Vec<String>>>);

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        represent_user,
        represent_patient,
        represent_medical_history,
        represent_mobile_number,
        represent_driver,
        represent_police,
        represent_hospital,
        represent_emergency_request,
        represent_patient_treatment,
        validate_hospital,
        validate_police,
        validate_mobile_number,
        validate_medical_history,
        validate_emergency_request,
        validate_patient_treatment,
    ),
    components(schemas(
        HealthRes,
        User,
        Patient,
        MedicalHistory,
        MobileNumber,
        Driver,
        Police,
        Hospital,
        EmergencyRequest,
        PatientTreatment,
        UserRepresentation,
        PatientRepresentation,
        MedicalHistoryRepresentation,
        MobileNumberRepresentation,
        DriverRepresentation,
        PoliceRepresentation,
        HospitalRepresentation,
        EmergencyRequestRepresentation,
        PatientTreatmentRepresentation,
        HospitalInput,
        PoliceInput,
        MobileNumberInput,
        MedicalHistoryInput,
        EmergencyRequestInput,
        PatientTreatmentInput,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/representations/users", post(represent_user))
        .route("/representations/patients", post(represent_patient))
        .route(
            "/representations/medical-histories",
            post(represent_medical_history),
        )
        .route(
            "/representations/mobile-numbers",
            post(represent_mobile_number),
        )
        .route("/representations/drivers", post(represent_driver))
        .route("/representations/police", post(represent_police))
        .route("/representations/hospitals", post(represent_hospital))
        .route(
            "/representations/emergency-requests",
            post(represent_emergency_request),
        )
        .route(
            "/representations/patient-treatments",
            post(represent_patient_treatment),
        )
        .route("/validate/hospitals", post(validate_hospital))
        .route("/validate/police", post(validate_police))
        .route("/validate/mobile-numbers", post(validate_mobile_number))
        .route("/validate/medical-histories", post(validate_medical_history))
        .route(
            "/validate/emergency-requests",
            post(validate_emergency_request),
        )
        .route(
            "/validate/patient-treatments",
            post(validate_patient_treatment),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn represent<R: Represent>(
    state: &AppState,
    headers: &HeaderMap,
    uri: &Uri,
    record: &R,
) -> Json<R::Representation> {
    let request = request_context(headers, uri, &state.cfg);
    let ctx = MappingContext::new(
        &state.cfg,
        request.as_ref().map(|r| r as &dyn BuildAbsoluteUri),
    );
    Json(record.to_representation(&ctx))
}

fn validate<T>(entity: &'static str, body: &str) -> Result<Json<T>, ValidationRejection>
where
    T: DeserializeOwned + Serialize + Validate,
{
    match parse_input::<T>(body) {
        Ok(input) => Ok(Json(input)),
        Err(e) if e.is_validation() => {
            tracing::warn!("{} validation failed: {}", entity, e);
            Err((StatusCode::BAD_REQUEST, Json(e.detail())))
        }
        Err(e) => {
            tracing::error!("{} validation error: {:?}", entity, e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(e.detail())))
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/representations/users",
    request_body = User,
    responses(
        (status = 200, description = "User representation", body = UserRepresentation),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Record could not be parsed")
    )
)]
#[axum::debug_handler]
async fn represent_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Json(record): Json<User>,
) -> Json<UserRepresentation> {
    represent(&state, &headers, &uri, &record)
}

#[utoipa::path(
    post,
    path = "/representations/patients",
    request_body = Patient,
    responses(
        (status = 200, description = "Patient representation with nested histories and numbers", body = PatientRepresentation),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Record could not be parsed")
    )
)]
/// Map a patient record.
///
/// File URLs are absolute for the host the request arrived on. Without a `Host` header
/// they are built from the configured fallback base URL.
#[axum::debug_handler]
async fn represent_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Json(record): Json<Patient>,
) -> Json<PatientRepresentation> {
    represent(&state, &headers, &uri, &record)
}

#[utoipa::path(
    post,
    path = "/representations/medical-histories",
    request_body = MedicalHistory,
    responses(
        (status = 200, description = "Medical history representation", body = MedicalHistoryRepresentation),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Record could not be parsed")
    )
)]
#[axum::debug_handler]
async fn represent_medical_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Json(record): Json<MedicalHistory>,
) -> Json<MedicalHistoryRepresentation> {
    represent(&state, &headers, &uri, &record)
}

#[utoipa::path(
    post,
    path = "/representations/mobile-numbers",
    request_body = MobileNumber,
    responses(
        (status = 200, description = "Mobile number representation", body = MobileNumberRepresentation),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Record could not be parsed")
    )
)]
#[axum::debug_handler]
async fn represent_mobile_number(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Json(record): Json<MobileNumber>,
) -> Json<MobileNumberRepresentation> {
    represent(&state, &headers, &uri, &record)
}

#[utoipa::path(
    post,
    path = "/representations/drivers",
    request_body = Driver,
    responses(
        (status = 200, description = "Driver representation", body = DriverRepresentation),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Record could not be parsed")
    )
)]
#[axum::debug_handler]
async fn represent_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Json(record): Json<Driver>,
) -> Json<DriverRepresentation> {
    represent(&state, &headers, &uri, &record)
}

#[utoipa::path(
    post,
    path = "/representations/police",
    request_body = Police,
    responses(
        (status = 200, description = "Police representation", body = PoliceRepresentation),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Record could not be parsed")
    )
)]
#[axum::debug_handler]
async fn represent_police(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Json(record): Json<Police>,
) -> Json<PoliceRepresentation> {
    represent(&state, &headers, &uri, &record)
}

#[utoipa::path(
    post,
    path = "/representations/hospitals",
    request_body = Hospital,
    responses(
        (status = 200, description = "Hospital representation", body = HospitalRepresentation),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Record could not be parsed")
    )
)]
#[axum::debug_handler]
async fn represent_hospital(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Json(record): Json<Hospital>,
) -> Json<HospitalRepresentation> {
    represent(&state, &headers, &uri, &record)
}

#[utoipa::path(
    post,
    path = "/representations/emergency-requests",
    request_body = EmergencyRequest,
    responses(
        (status = 200, description = "Emergency request with embedded patient", body = EmergencyRequestRepresentation),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Record could not be parsed")
    )
)]
#[axum::debug_handler]
async fn represent_emergency_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Json(record): Json<EmergencyRequest>,
) -> Json<EmergencyRequestRepresentation> {
    represent(&state, &headers, &uri, &record)
}

#[utoipa::path(
    post,
    path = "/representations/patient-treatments",
    request_body = PatientTreatment,
    responses(
        (status = 200, description = "Patient treatment representation", body = PatientTreatmentRepresentation),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Record could not be parsed")
    )
)]
#[axum::debug_handler]
async fn represent_patient_treatment(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Json(record): Json<PatientTreatment>,
) -> Json<PatientTreatmentRepresentation> {
    represent(&state, &headers, &uri, &record)
}

#[utoipa::path(
    post,
    path = "/validate/hospitals",
    request_body = HospitalInput,
    responses(
        (status = 200, description = "Validated hospital data", body = HospitalInput),
        (status = 400, description = "Validation failed, including available_beds > total_beds")
    )
)]
/// Validate candidate hospital data.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - a field is missing or has the wrong type, or
/// - `available_beds` exceeds `total_beds` (missing counts are treated as 0).
#[axum::debug_handler]
async fn validate_hospital(body: String) -> Result<Json<HospitalInput>, ValidationRejection> {
    validate("hospital", &body)
}

#[utoipa::path(
    post,
    path = "/validate/police",
    request_body = PoliceInput,
    responses(
        (status = 200, description = "Validated police data", body = PoliceInput),
        (status = 400, description = "Validation failed")
    )
)]
#[axum::debug_handler]
async fn validate_police(body: String) -> Result<Json<PoliceInput>, ValidationRejection> {
    validate("police", &body)
}

#[utoipa::path(
    post,
    path = "/validate/mobile-numbers",
    request_body = MobileNumberInput,
    responses(
        (status = 200, description = "Validated mobile number", body = MobileNumberInput),
        (status = 400, description = "Validation failed")
    )
)]
#[axum::debug_handler]
async fn validate_mobile_number(
    body: String,
) -> Result<Json<MobileNumberInput>, ValidationRejection> {
    validate("mobile number", &body)
}

#[utoipa::path(
    post,
    path = "/validate/medical-histories",
    request_body = MedicalHistoryInput,
    responses(
        (status = 200, description = "Validated medical history", body = MedicalHistoryInput),
        (status = 400, description = "Validation failed")
    )
)]
#[axum::debug_handler]
async fn validate_medical_history(
    body: String,
) -> Result<Json<MedicalHistoryInput>, ValidationRejection> {
    validate("medical history", &body)
}

#[utoipa::path(
    post,
    path = "/validate/emergency-requests",
    request_body = EmergencyRequestInput,
    responses(
        (status = 200, description = "Validated emergency request; patient is read-only and ignored", body = EmergencyRequestInput),
        (status = 400, description = "Validation failed")
    )
)]
#[axum::debug_handler]
async fn validate_emergency_request(
    body: String,
) -> Result<Json<EmergencyRequestInput>, ValidationRejection> {
    validate("emergency request", &body)
}

#[utoipa::path(
    post,
    path = "/validate/patient-treatments",
    request_body = PatientTreatmentInput,
    responses(
        (status = 200, description = "Validated treatment; hospital is read-only and ignored", body = PatientTreatmentInput),
        (status = 400, description = "Validation failed")
    )
)]
#[axum::debug_handler]
async fn validate_patient_treatment(
    body: String,
) -> Result<Json<PatientTreatmentInput>, ValidationRejection> {
    validate("patient treatment", &body)
}
