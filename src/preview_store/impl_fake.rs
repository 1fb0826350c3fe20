use crate::preview_store::interface::{PreviewError, PreviewId, PreviewStore};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Hands out ids without decoding anything. Empty input fails to decode so
/// tests can drive the error path.
#[derive(Default)]
pub struct PreviewStoreFake {
    next_id: AtomicU64,
    live: Mutex<HashSet<PreviewId>>,
}

impl PreviewStoreFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> HashSet<PreviewId> {
        self.live.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl PreviewStore for PreviewStoreFake {
    fn create(&self, image: &[u8]) -> Result<PreviewId, PreviewError> {
        if image.is_empty() {
            return Err(PreviewError::Decode("empty image".to_string()));
        }

        let preview = PreviewId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.live
            .lock()
            .map_err(|e| PreviewError::Unavailable(e.to_string()))?
            .insert(preview);
        Ok(preview)
    }

    fn release(&self, preview: PreviewId) -> Result<(), PreviewError> {
        self.live
            .lock()
            .map_err(|e| PreviewError::Unavailable(e.to_string()))?
            .remove(&preview);
        Ok(())
    }
}
