use std::{marker::PhantomData, path::PathBuf, sync::Arc};
use tokio::{fs, sync::Mutex};

use crate::errors::ServiceError;

/// Generic JSON file-backed array store.
///
/// Holds no records in memory: every call reads the whole file, and every
/// mutation rewrites it. Mutations on the same store are serialized by a
/// single-writer lock held across the read-modify-write cycle; plain reads
/// never take the lock.
pub struct JsonArrayStore<T> {
    file_path: PathBuf,
    write_lock: Arc<Mutex<()>>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonArrayStore<T> {
    fn clone(&self) -> Self {
        Self {
            file_path: self.file_path.clone(),
            write_lock: Arc::clone(&self.write_lock),
            _record: PhantomData,
        }
    }
}

impl<T> JsonArrayStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    /// Bind the store to a file. The file is not touched until the first call.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), write_lock: Arc::new(Mutex::new(())), _record: PhantomData }
    }

    /// Load and parse the full array from disk.
    pub async fn read(&self) -> Result<Vec<T>, ServiceError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|e| ServiceError::storage(&self.file_path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::storage(&self.file_path, e))
    }

    /// Overwrite the file with the array, indented by two spaces.
    pub async fn write(&self, records: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(records).map_err(|e| ServiceError::storage(&self.file_path, e))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::storage(&self.file_path, e))
    }

    /// Read the array, apply `f`, and persist the result if `f` succeeds.
    /// An error from `f` leaves the file untouched.
    pub async fn modify<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, ServiceError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read().await?;
        let out = f(&mut records)?;
        self.write(&records).await?;
        Ok(out)
    }
}
