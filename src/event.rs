/// Notifications queued by the scrubber model for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubberEvent {
    /// Thumb moved during a continuous drag. Carries the new thumb value.
    ValueChanged(f64),
    EditingBegin,
    EditingEnd,
    /// The user tried to drag below the scrub range minimum. Advisory only.
    ScrubBeyondMinimum,
}
