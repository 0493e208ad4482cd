use thiserror::Error;

/// Failure reported by the platform while driving or sampling the output line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error<E> {
    #[error("pin access failed: {0:?}")]
    Pin(E),
}

pub type Result<T, E> = core::result::Result<T, Error<E>>;
