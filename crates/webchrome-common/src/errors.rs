use serde::{Deserialize, Serialize};

/// Descriptor for a failed page load, reported to the host delegate.
///
/// Carries whatever failure code the content engine supplied, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct LoadError {
    pub code: Option<i32>,
    pub message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: i32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    #[error("surface error: {0}")]
    Surface(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("load failed: {0}")]
    Load(#[from] LoadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_display() {
        let err = LoadError::new("host unreachable");
        assert_eq!(err.to_string(), "host unreachable");
        assert_eq!(err.code, None);

        let err = LoadError::with_code(-1009, "offline");
        assert_eq!(err.to_string(), "offline");
        assert_eq!(err.code, Some(-1009));
    }

    #[test]
    fn chrome_error_display() {
        let err = ChromeError::Surface("engine gone".into());
        assert_eq!(err.to_string(), "surface error: engine gone");

        let err = ChromeError::InvalidUrl("not a url".into());
        assert_eq!(err.to_string(), "invalid url: not a url");
    }

    #[test]
    fn chrome_error_from_load_error() {
        let err: ChromeError = LoadError::new("timeout").into();
        assert!(matches!(err, ChromeError::Load(_)));
        assert_eq!(err.to_string(), "load failed: timeout");
    }

    #[test]
    fn load_error_round_trips_through_json() {
        let err = LoadError::with_code(102, "frame load interrupted");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: LoadError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, err);
    }
}
