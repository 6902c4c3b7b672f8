use serde::{Deserialize, Serialize};

/// One successful analysis, exactly as returned by the service.
///
/// The three image fields are opaque references (usually `data:` URLs). They
/// are displayed as-is and never validated here; see
/// [`crate::image_source`] for the display-side decoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub original_image: String,
    pub anomaly_map: String,
    pub overlay_image: String,
    pub anomaly_score: f64,
    pub is_anomaly: bool,
    pub confidence: f64,
    pub threshold: f64,
    /// Server-side processing time in seconds.
    pub processing_time: f64,
}

impl AnalysisResult {
    /// Image reference for the given visualization slot.
    pub fn image(&self, which: Visualization) -> &str {
        match which {
            Visualization::Original => &self.original_image,
            Visualization::Heatmap => &self.anomaly_map,
            Visualization::Overlay => &self.overlay_image,
        }
    }
}

/// The three fixed visualizations of a result, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visualization {
    Original,
    Heatmap,
    Overlay,
}

impl Visualization {
    pub const ALL: [Visualization; 3] = [Self::Original, Self::Heatmap, Self::Overlay];

    /// Position in the grid (0 = original, 1 = heatmap, 2 = overlay).
    pub fn index(self) -> usize {
        match self {
            Self::Original => 0,
            Self::Heatmap => 1,
            Self::Overlay => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable identifier, used for texture names.
    pub fn id(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Heatmap => "heatmap",
            Self::Overlay => "overlay",
        }
    }
}

impl std::fmt::Display for Visualization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
