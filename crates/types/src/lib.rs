//! Shared value types for the HealthHelp serialization layer.
//!
//! The only type here is [`FileRef`]: the location of an uploaded document or image as
//! handed over by the persistence layer. Records model optional attachments as
//! `Option<FileRef>`, so "is there a file?" is a plain `None` check.

/// Errors that can occur when creating a [`FileRef`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FileRefError {
    /// The location was the empty string
    #[error("File location cannot be empty")]
    Empty,
}

/// Location of an uploaded file, relative to the media root (for example
/// `/media/patients/faces/1.jpg`).
///
/// The location is kept exactly as the store wrote it; the only guarantee is that it is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRef(String);

impl FileRef {
    /// Creates a new `FileRef` from a relative location.
    ///
    /// # Errors
    ///
    /// Returns [`FileRefError::Empty`] if the input is the empty string.
    pub fn new(location: impl Into<String>) -> Result<Self, FileRefError> {
        let location = location.into();
        if location.is_empty() {
            return Err(FileRefError::Empty);
        }
        Ok(Self(location))
    }

    /// Returns the relative location of the file.
    pub fn location(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for FileRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for FileRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FileRef::new(s).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional attachments: `null`, a missing key and `""` all mean
/// "no file".
///
/// Use with `#[serde(default, with = "healthhelp_types::optional_file")]`.
pub mod optional_file {
    use super::FileRef;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<FileRef>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(file) => serializer.serialize_str(file.location()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<FileRef>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(s) if !s.is_empty() => Ok(Some(FileRef(s))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize, serde::Serialize)]
    struct Holder {
        #[serde(default, with = "optional_file")]
        file: Option<FileRef>,
    }

    #[test]
    fn keeps_location_byte_for_byte() {
        let file = FileRef::new("  /media/a.png ").expect("valid location");
        assert_eq!(file.location(), "  /media/a.png ");
        assert_eq!(file.to_string(), "  /media/a.png ");
    }

    #[test]
    fn rejects_empty_location() {
        assert_eq!(FileRef::new(""), Err(FileRefError::Empty));
        assert!(FileRef::new("   ").is_ok());
    }

    #[test]
    fn odd_stored_names_are_still_files() {
        let holder: Holder =
            serde_json::from_str(r#"{"file": "/media/a\tb.png"}"#).expect("tab in name");
        assert_eq!(
            holder.file.as_ref().map(FileRef::location),
            Some("/media/a\tb.png")
        );

        let holder: Holder =
            serde_json::from_str(r#"{"file": "/media/report.pdf  "}"#).expect("trailing spaces");
        assert_eq!(
            holder.file.as_ref().map(FileRef::location),
            Some("/media/report.pdf  ")
        );
    }

    #[test]
    fn empty_string_means_no_file() {
        let holder: Holder = serde_json::from_str(r#"{"file": ""}"#).expect("parse");
        assert!(holder.file.is_none());

        let holder: Holder = serde_json::from_str(r#"{"file": null}"#).expect("parse");
        assert!(holder.file.is_none());

        let holder: Holder = serde_json::from_str("{}").expect("parse");
        assert!(holder.file.is_none());
    }

    #[test]
    fn present_location_is_kept() {
        let holder: Holder =
            serde_json::from_str(r#"{"file": "/media/docs/1.pdf"}"#).expect("parse");
        assert_eq!(
            holder.file.as_ref().map(FileRef::location),
            Some("/media/docs/1.pdf")
        );

        let json = serde_json::to_string(&holder).expect("serialize");
        assert_eq!(json, r#"{"file":"/media/docs/1.pdf"}"#);
    }
}
