#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("invalid clock time '{0}', expected HH:MM in 24-hour time")]
    InvalidClockTime(String),
    #[error("unknown travel mode '{0}'")]
    InvalidMode(String),
    #[error("invalid value '{value}' for fragment key '{key}': {message}")]
    InvalidFragmentValue {
        key: String,
        value: String,
        message: String,
    },
}
