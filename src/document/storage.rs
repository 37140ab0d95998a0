use std::fs;
use std::path::Path;

use crate::error::Result;

/// Load a plan file as an opaque blob; a missing file is `None`, not an
/// error.
pub fn load_plan_text<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}

/// Persist the serialized plan in a single write.
pub fn save_plan_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_plan_is_none() {
        assert!(load_plan_text("no_such_plan.md").unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let text = "# Plan\n| Arroz | 220 g |\n";

        save_plan_text(file.path(), text).unwrap();
        let loaded = load_plan_text(file.path()).unwrap().unwrap();
        assert_eq!(loaded, text);
    }
}
