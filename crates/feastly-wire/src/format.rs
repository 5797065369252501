use crate::{WireError, WireResult};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Serialisation format of a feed file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from the file extension (`.json`, `.yaml` or `.yml`).
    pub fn from_path(path: &Path) -> WireResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(WireError::InvalidInput(format!(
                "unsupported feed file extension: {}",
                path.display()
            ))),
        }
    }

    /// Deserialize `text`, reporting the path of the first field that does not match.
    pub(crate) fn deserialize<T>(self, text: &str, what: &str) -> WireResult<T>
    where
        T: DeserializeOwned,
    {
        match self {
            Format::Json => {
                let mut de = serde_json::Deserializer::from_str(text);
                let value = with_path(&mut de, what)?;
                de.end()?;
                Ok(value)
            }
            Format::Yaml => with_path(serde_yaml::Deserializer::from_str(text), what),
        }
    }
}

fn with_path<'de, D, T>(deserializer: D, what: &str) -> WireResult<T>
where
    D: serde::Deserializer<'de>,
    D::Error: std::fmt::Display,
    T: serde::Deserialize<'de>,
{
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() {
            "<root>"
        } else {
            path.as_str()
        };
        WireError::Translation(format!("{what} schema mismatch at {path}: {source}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/recipes.json")).ok(), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("stories.YML")).ok(), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("feed.yaml")).ok(), Some(Format::Yaml));
        assert!(matches!(
            Format::from_path(Path::new("feed.txt")),
            Err(WireError::InvalidInput(_))
        ));
        assert!(Format::from_path(Path::new("feed")).is_err());
    }

    #[test]
    fn json_trailing_garbage_is_rejected() {
        let err = Format::Json
            .deserialize::<Vec<u32>>("[1, 2] [3]", "numbers")
            .expect_err("trailing data");
        assert!(matches!(err, WireError::InvalidJson(_)));
    }
}
