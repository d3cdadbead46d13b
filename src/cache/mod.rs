mod local;

use std::collections::HashMap;

use crate::parse::CourseRecord;

use local::FileStore;

/// Where previously parsed course records are kept.
#[derive(Debug)]
#[non_exhaustive]
pub enum Store {
    Local(FileStore),
    AdHoc(HashMap<String, CourseRecord>),
}

impl Default for Store {
    fn default() -> Self {
        Self::AdHoc(HashMap::new())
    }
}

impl Store {
    #[inline]
    #[must_use]
    pub fn local(p: impl AsRef<std::path::Path>) -> Self {
        Self::Local(FileStore::open(p))
    }

    pub async fn get(&self, key: &str) -> crate::Result<Option<CourseRecord>> {
        match self {
            Self::Local(f) => f.get(key).await,
            Self::AdHoc(map) => Ok(map.get(key).cloned()),
        }
    }

    pub async fn save(&mut self, key: &str, record: &CourseRecord) -> crate::Result<()> {
        match self {
            Self::Local(f) => f.put(key, record).await,
            Self::AdHoc(map) => {
                map.insert(key.to_string(), record.clone());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record() -> CourseRecord {
        let html =
            fs::read_to_string("./src/parse/html_examples/course/cis1910.html").unwrap();
        CourseRecord::parse(&html).unwrap()
    }

    #[tokio::test]
    async fn test_ad_hoc() {
        let mut store = Store::default();
        assert!(store.get("2011cis1910undergraduate").await.unwrap().is_none());
        store.save("2011cis1910undergraduate", &record()).await.unwrap();
        assert_eq!(
            store.get("2011cis1910undergraduate").await.unwrap(),
            Some(record())
        );
    }

    #[tokio::test]
    async fn test_local_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.json");
        {
            let mut store = Store::local(&path);
            assert!(store.get("2011cis1910undergraduate").await.unwrap().is_none());
            store.save("2011cis1910undergraduate", &record()).await.unwrap();
            store.save("2011cis1910graduate", &record()).await.unwrap();
        }
        let reopened = Store::local(&path);
        assert_eq!(
            reopened.get("2011cis1910undergraduate").await.unwrap(),
            Some(record())
        );
        assert!(reopened.get("2011cis1910graduate").await.unwrap().is_some());
        assert!(reopened.get("2010cis1910undergraduate").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_local_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.json");
        fs::write(&path, "not json").unwrap();
        let store = Store::local(&path);
        assert!(matches!(
            store.get("anything").await,
            Err(crate::Error::Json(_))
        ));
    }
}
