use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::parse::CourseRecord;

/// Course records kept as one json object in a file, keyed by cache key.
#[derive(Debug)]
pub struct FileStore(PathBuf);

impl FileStore {
    #[must_use]
    pub fn open(p: impl AsRef<Path>) -> Self {
        Self(p.as_ref().to_owned())
    }

    async fn load(&self) -> crate::Result<BTreeMap<String, CourseRecord>> {
        if fs::try_exists(&self.0).await? {
            let bytes = fs::read(&self.0).await?;
            if bytes.is_empty() {
                return Ok(BTreeMap::new());
            }
            serde_json::from_slice(&bytes).map_err(From::from)
        } else {
            Ok(BTreeMap::new())
        }
    }

    pub async fn get(&self, key: &str) -> crate::Result<Option<CourseRecord>> {
        Ok(self.load().await?.remove(key))
    }

    pub async fn put(&self, key: &str, value: &CourseRecord) -> crate::Result<()> {
        let mut records = self.load().await?;
        records.insert(key.to_string(), value.clone());
        fs::write(&self.0, serde_json::to_vec_pretty(&records)?).await?;
        Ok(())
    }
}
