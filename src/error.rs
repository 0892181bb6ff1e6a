#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ScrubberError {
    #[error("invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: f64, max: f64 },
}
