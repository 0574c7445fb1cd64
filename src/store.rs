use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio::{fs, sync::Mutex};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A JSON array stored in a single file, read and overwritten as a whole.
///
/// Read-modify-write cycles issued through [`FileRepository::update`] are
/// serialized by an in-process lock. Two processes sharing the same file
/// still race and the last writer wins.
pub struct FileRepository<T> {
    inner: Arc<Inner>,
    _marker: PhantomData<fn() -> T>,
}

struct Inner {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl<T> Clone for FileRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _marker: PhantomData,
        }
    }
}

impl<T> FileRepository<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(Inner {
                path: path.into(),
                write_lock: Mutex::new(()),
            }),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Load every record. A missing or blank file is an empty collection.
    pub async fn read_all(&self) -> Result<Vec<T>, StoreError> {
        let path = self.path();
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the whole collection.
    pub async fn write_all(&self, items: &[T]) -> Result<(), StoreError> {
        let _guard = self.inner.write_lock.lock().await;
        self.persist(items).await
    }

    /// Read the collection, let `apply` mutate it, and write it back when
    /// `apply` succeeds. Nothing is written when `apply` returns an error.
    pub async fn update<R, E>(
        &self,
        apply: impl FnOnce(&mut Vec<T>) -> Result<R, E>,
    ) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.inner.write_lock.lock().await;
        let mut items = self.read_all().await?;
        let out = apply(&mut items)?;
        self.persist(&items).await?;
        Ok(out)
    }

    async fn persist(&self, items: &[T]) -> Result<(), StoreError> {
        let path = self.path();
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let body = serde_json::to_vec_pretty(items).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        // Write beside the target and rename so readers never see a torn file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body).await.map_err(io_err)?;
        fs::rename(&tmp, path).await.map_err(io_err)?;

        Ok(())
    }
}
