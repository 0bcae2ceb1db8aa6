use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Guid(Uuid);

impl Guid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidDimension(format!(
            "{name} must be a finite value > 0 (got {value})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass() -> Result<()> {
        ensure_positive("length", 0.5)?;
        ensure_positive("height", 1.0e6)?;
        Ok(())
    }

    #[test]
    fn non_positive_values_are_rejected() {
        for value in [0.0, -0.0, -14.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ensure_positive("width", value);
            assert!(matches!(err, Err(Error::InvalidDimension(_))), "{value}");
        }
    }

    #[test]
    fn error_message_names_the_dimension() {
        let err = ensure_positive("height", -1.0).unwrap_err();
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn guids_are_unique() {
        assert_ne!(Guid::new(), Guid::new());
    }
}
