use thiserror::Error;

/// Failure surfaced by an overlay collaborator.
///
/// `Clone` because a shared in-flight operation hands the same failure to
/// every lifecycle handler awaiting it. No retry happens at this layer;
/// errors propagate to the host's async-error surface.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OverlayError {
    #[error("overlay creation failed: {0}")]
    Create(String),
    #[error("overlay present failed: {0}")]
    Present(String),
    #[error("overlay dismiss failed: {0}")]
    Dismiss(String),
}
