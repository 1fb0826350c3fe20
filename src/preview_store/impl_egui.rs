use crate::preview_store::interface::{PreviewError, PreviewId, PreviewStore};
use eframe::egui;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

const MAX_PREVIEW_SIDE: u32 = 640;

/// Decodes images into egui textures. Dropping a `TextureHandle` frees the
/// GPU texture, so releasing a preview is removing it from the map.
pub struct PreviewStoreEgui {
    ctx: egui::Context,
    next_id: AtomicU64,
    textures: Mutex<HashMap<PreviewId, egui::TextureHandle>>,
}

impl PreviewStoreEgui {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_id: AtomicU64::new(1),
            textures: Mutex::new(HashMap::new()),
        }
    }

    pub fn texture(&self, preview: PreviewId) -> Option<egui::TextureHandle> {
        self.textures
            .lock()
            .ok()
            .and_then(|textures| textures.get(&preview).cloned())
    }
}

impl PreviewStore for PreviewStoreEgui {
    fn create(&self, image: &[u8]) -> Result<PreviewId, PreviewError> {
        let decoded =
            image::load_from_memory(image).map_err(|e| PreviewError::Decode(e.to_string()))?;
        let decoded = if decoded.width() > MAX_PREVIEW_SIDE || decoded.height() > MAX_PREVIEW_SIDE
        {
            decoded.thumbnail(MAX_PREVIEW_SIDE, MAX_PREVIEW_SIDE)
        } else {
            decoded
        };

        let rgba = decoded.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

        let preview = PreviewId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let texture = self.ctx.load_texture(
            format!("preview-{}", preview.0),
            color_image,
            Default::default(),
        );

        self.textures
            .lock()
            .map_err(|e| PreviewError::Unavailable(e.to_string()))?
            .insert(preview, texture);

        Ok(preview)
    }

    fn release(&self, preview: PreviewId) -> Result<(), PreviewError> {
        self.textures
            .lock()
            .map_err(|e| PreviewError::Unavailable(e.to_string()))?
            .remove(&preview);
        Ok(())
    }
}
