use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache lock poisoned: {0}")]
    Lock(String),
}
