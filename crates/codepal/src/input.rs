use crate::prelude::*;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Read source code from `path`, or from stdin when no path (or `-`) is given.
pub async fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            let code = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| Error::ReadInput(path.display().to_string(), e.to_string()))?;
            Ok(code)
        }
        _ => {
            let mut code = String::new();
            tokio::io::stdin()
                .read_to_string(&mut code)
                .await
                .map_err(|e| Error::ReadInput("stdin".to_string(), e.to_string()))?;
            Ok(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_source_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "x = 1\nprint(x)\n").unwrap();

        let code = read_source(Some(file.path())).await.unwrap();
        assert_eq!(code, "x = 1\nprint(x)\n");
    }

    #[tokio::test]
    async fn test_read_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.py");

        let err = read_source(Some(&missing)).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to read "));
        assert!(err.to_string().contains("missing.py"));
    }
}
