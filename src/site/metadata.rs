//! Human-readable image descriptions
//!
//! The description embedded in an image (read with `exiftool`) wins. When
//! the tool is missing or fails, or the tag is empty or not text, a
//! description is derived from the filename instead. This never fails.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use tracing::warn;

use super::error::{Result, SiteError};

const EXIFTOOL: &str = "exiftool";

#[derive(Debug, Deserialize)]
struct ExifRecord {
    #[serde(rename = "Description")]
    description: Option<serde_json::Value>,
}

/// Describe the image at site-relative `image_path`
pub fn image_description(site_root: &Path, image_path: &str) -> String {
    let full_path = resolve(site_root, image_path);

    match read_embedded_description(&full_path) {
        Ok(Some(description)) => description,
        Ok(None) => filename_description(image_path),
        Err(e) => {
            warn!("Could not read metadata for {}: {}", image_path, e);
            filename_description(image_path)
        }
    }
}

/// Map a site-relative URL path onto the site's source directory
pub fn resolve(site_root: &Path, image_path: &str) -> PathBuf {
    site_root.join(image_path.trim_start_matches('/'))
}

/// Ask `exiftool` for the Description tag.
///
/// A non-zero exit (unreadable file, unsupported format) yields `Ok(None)`;
/// failing to launch the tool or unparseable output is an error.
pub fn read_embedded_description(path: &Path) -> Result<Option<String>> {
    let output = Command::new(EXIFTOOL)
        .args(["-Description", "-json"])
        .arg(path)
        .output()
        .map_err(|source| SiteError::Tool {
            tool: EXIFTOOL,
            source,
        })?;

    if !output.status.success() {
        return Ok(None);
    }

    parse_exiftool_output(&output.stdout)
}

/// First record's `Description`. Missing or empty means no description;
/// a value that is not a string is an error.
pub fn parse_exiftool_output(stdout: &[u8]) -> Result<Option<String>> {
    let records: Vec<ExifRecord> =
        serde_json::from_slice(stdout).map_err(|source| SiteError::Json {
            context: "exiftool output".to_string(),
            source,
        })?;

    match records.into_iter().next().and_then(|record| record.description) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(SiteError::Metadata(format!(
            "Description is not text: {}",
            other
        ))),
    }
}

/// `"/assets/my-cool_shot.JPG"` becomes `"My cool shot"`
pub fn filename_description(image_path: &str) -> String {
    let stem = Path::new(image_path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let spaced: String = stem
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_description() {
        assert_eq!(filename_description("/assets/img/my-cool_shot.jpg"), "My cool shot");
        assert_eq!(filename_description("SUNSET-Over_BAY.png"), "Sunset over bay");
        assert_eq!(filename_description("archive.tar.gz"), "Archive.tar");
        assert_eq!(filename_description(""), "");
    }

    #[test]
    fn test_parse_description() {
        let out = br#"[{"SourceFile": "a.jpg", "Description": "Harbour at dusk"}]"#;
        assert_eq!(
            parse_exiftool_output(out).unwrap(),
            Some("Harbour at dusk".to_string())
        );
    }

    #[test]
    fn test_parse_missing_or_empty_description() {
        let missing = br#"[{"SourceFile": "a.jpg"}]"#;
        assert_eq!(parse_exiftool_output(missing).unwrap(), None);

        let empty = br#"[{"SourceFile": "a.jpg", "Description": ""}]"#;
        assert_eq!(parse_exiftool_output(empty).unwrap(), None);

        assert_eq!(parse_exiftool_output(b"[]").unwrap(), None);
    }

    #[test]
    fn test_whitespace_description_is_kept() {
        let blank = br#"[{"SourceFile": "a.jpg", "Description": "  "}]"#;
        assert_eq!(parse_exiftool_output(blank).unwrap(), Some("  ".to_string()));
    }

    #[test]
    fn test_numeric_description_is_an_error() {
        let numeric = br#"[{"SourceFile": "a.jpg", "Description": 2019}]"#;
        assert!(matches!(
            parse_exiftool_output(numeric),
            Err(SiteError::Metadata(_))
        ));
    }

    #[test]
    fn test_parse_malformed_output() {
        assert!(parse_exiftool_output(b"not json").is_err());
    }

    #[test]
    fn test_description_falls_back_for_missing_file() {
        // Whether or not exiftool is installed, a missing file ends up on the fallback
        let root = tempfile::tempdir().unwrap();
        assert_eq!(
            image_description(root.path(), "/portfolio/no_such-file.jpg"),
            "No such file"
        );
    }

    #[test]
    fn test_resolve_strips_leading_slash() {
        assert_eq!(
            resolve(Path::new("/site"), "/assets/a.jpg"),
            PathBuf::from("/site/assets/a.jpg")
        );
    }
}
