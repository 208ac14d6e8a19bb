//! Process-wide [`Jyotish`] for the free functions in [`crate::convenience`].

use std::sync::OnceLock;

use crate::error::JyotiError;
use crate::jyotish::Jyotish;

static JYOTISH: OnceLock<Jyotish> = OnceLock::new();

/// Install the global instance. Fails if one is already installed.
pub fn init(jyotish: Jyotish) -> Result<(), JyotiError> {
    JYOTISH.set(jyotish).map_err(|_| JyotiError::AlreadyInitialized)
}

pub fn is_initialized() -> bool {
    JYOTISH.get().is_some()
}

pub(crate) fn jyotish() -> Result<&'static Jyotish, JyotiError> {
    JYOTISH.get().ok_or(JyotiError::NotInitialized)
}
