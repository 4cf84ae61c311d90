//! Record-to-representation mappers.
//!
//! One module per entity. Each record type implements [`Represent`], producing a typed
//! representation whose field order is the field order of the output object. Inputs that
//! the API accepts live next to the representation of the same entity.

pub mod driver;
pub mod emergency;
pub mod hospital;
pub mod patient;
pub mod police;
pub mod treatment;
pub mod user;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::context::MappingContext;
use crate::{HealthHelpError, HealthHelpResult};

/// Maps a record to its transmittable representation.
///
/// Implementations read the record and the context only; they never fail and never
/// mutate the record.
pub trait Represent {
    type Representation: Serialize;

    fn to_representation(&self, ctx: &MappingContext<'_>) -> Self::Representation;
}

/// Map a slice of records, preserving order.
pub fn represent_many<R: Represent>(
    records: &[R],
    ctx: &MappingContext<'_>,
) -> Vec<R::Representation> {
    records.iter().map(|r| r.to_representation(ctx)).collect()
}

/// Map a record to a field-name to value map.
///
/// # Errors
///
/// Returns [`HealthHelpError::Serialization`] if the representation cannot be encoded as a
/// JSON object.
pub fn to_mapping<R: Represent>(
    record: &R,
    ctx: &MappingContext<'_>,
) -> HealthHelpResult<Map<String, Value>> {
    let value = serde_json::to_value(record.to_representation(ctx))
        .map_err(HealthHelpError::Serialization)?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(HealthHelpError::Serialization(serde::ser::Error::custom(
            format_args!("expected an object, got {other}"),
        ))),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};
    use healthhelp_types::FileRef;

    use crate::context::RequestContext;

    pub fn file(location: &str) -> FileRef {
        FileRef::new(location).expect("valid location")
    }

    pub fn request() -> RequestContext {
        RequestContext::new("https", "api.healthhelp.test", "/api/")
    }

    pub fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    impl Represent for Counter {
        type Representation = u32;

        fn to_representation(&self, _ctx: &MappingContext<'_>) -> u32 {
            self.0
        }
    }

    #[test]
    fn scalar_representation_is_a_serialization_error() {
        let err = to_mapping(&Counter(3), &MappingContext::detached()).expect_err("scalar");
        assert!(matches!(err, HealthHelpError::Serialization(_)));
        assert!(!err.is_validation());
    }
}
