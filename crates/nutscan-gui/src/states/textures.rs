use nutscan_core::result::Visualization;

/// GPU textures for the selected file preview and the three result images.
#[derive(Default)]
pub struct TextureState {
    pub preview: Option<egui::TextureHandle>,
    results: [Option<egui::TextureHandle>; 3],
}

impl TextureState {
    pub fn result(&self, which: Visualization) -> Option<&egui::TextureHandle> {
        self.results[which.index()].as_ref()
    }

    pub fn set_result(&mut self, which: Visualization, texture: Option<egui::TextureHandle>) {
        self.results[which.index()] = texture;
    }

    pub fn clear_results(&mut self) {
        self.results = Default::default();
    }
}
