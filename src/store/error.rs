use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("recipe store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("recipe {0} not found")]
    NotFound(u64),
}
