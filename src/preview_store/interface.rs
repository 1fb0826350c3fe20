use thiserror::Error;

/// Opaque handle to a decoded preview held by a [`PreviewStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(pub u64);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreviewError {
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("preview store unavailable: {0}")]
    Unavailable(String),
}

pub trait PreviewStore {
    fn create(&self, image: &[u8]) -> Result<PreviewId, PreviewError>;

    /// Releasing an unknown id is a no-op.
    fn release(&self, preview: PreviewId) -> Result<(), PreviewError>;
}
