use crate::core::Storage;
use crate::utils::error::{Result, SwapError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        // 空 base_path 代表目前工作目錄
        Self::new(String::new())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.full_path(path);
        let data = fs::read(&full_path).map_err(|source| SwapError::InputFile {
            path: full_path.display().to_string(),
            source,
        })?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|source| SwapError::OutputFile {
                path: full_path.display().to_string(),
                source,
            })?;
        }

        fs::write(&full_path, data).map_err(|source| SwapError::OutputFile {
            path: full_path.display().to_string(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_maps_to_input_error() {
        let storage = LocalStorage::new("/nonexistent-base".to_string());
        let err = storage.read_file("missing.per.dat").await.unwrap_err();
        assert!(matches!(err, SwapError::InputFile { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn test_empty_base_path_resolves_relative() {
        let storage = LocalStorage::default();
        assert_eq!(storage.full_path("case.per"), PathBuf::from("case.per"));
    }
}
