//! Best-score persistence
//!
//! A single integer under a single key. On the web that is LocalStorage;
//! natively (and in tests) an in-memory cell. A missing value reads as
//! `None` and callers treat it as zero.

/// LocalStorage key for the best score
pub const HIGHSCORE_KEY: &str = "highscore";

/// Storage failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage backend available (e.g. LocalStorage disabled)
    Unavailable,
    /// Stored value is not a score
    Corrupt(String),
    /// Backend refused the write
    Write(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::Corrupt(raw) => write!(f, "Stored highscore {:?} is not a number", raw),
            StorageError::Write(e) => write!(f, "Storage write failed: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

/// Get/set contract for the best score
pub trait ScoreStore {
    fn get_highscore(&self) -> Result<Option<u32>, StorageError>;
    fn set_highscore(&mut self, score: u32) -> Result<(), StorageError>;
}

/// Parse a stored highscore string. Absent stays absent.
pub fn parse_highscore(raw: Option<&str>) -> Result<Option<u32>, StorageError> {
    match raw {
        None => Ok(None),
        Some(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| StorageError::Corrupt(s.to_string())),
    }
}

/// Process-lifetime store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a best score
    pub fn with_highscore(score: u32) -> Self {
        Self { value: Some(score) }
    }
}

impl ScoreStore for MemoryStore {
    fn get_highscore(&self) -> Result<Option<u32>, StorageError> {
        Ok(self.value)
    }

    fn set_highscore(&mut self, score: u32) -> Result<(), StorageError> {
        self.value = Some(score);
        Ok(())
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn get_highscore(&self) -> Result<Option<u32>, StorageError> {
        let storage = Self::storage()?;
        let raw = storage
            .get_item(HIGHSCORE_KEY)
            .map_err(|_| StorageError::Unavailable)?;
        parse_highscore(raw.as_deref())
    }

    fn set_highscore(&mut self, score: u32) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        storage
            .set_item(HIGHSCORE_KEY, &score.to_string())
            .map_err(|e| StorageError::Write(format!("{:?}", e)))?;
        log::info!("Highscore saved ({})", score);
        Ok(())
    }
}
