//! English/Turkish display strings.
//!
//! Each table is a `const` [`Strings`] literal, so leaving out a key in either
//! language fails to compile.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub const ALL: [Language; 2] = [Self::En, Self::Tr];

    pub fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Tr => &TR,
        }
    }

    /// The other language. There are exactly two.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Tr,
            Self::Tr => Self::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "tr" => Ok(Self::Tr),
            other => Err(format!("unsupported language '{other}' (expected en or tr)")),
        }
    }
}

/// Every display string, one field per key.
#[derive(Debug)]
pub struct Strings {
    // Header
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub model_label: &'static str,
    pub model_value: &'static str,
    pub status_ready: &'static str,

    // Upload
    pub upload_title: &'static str,
    pub drag_drop_text: &'static str,
    pub or_click_text: &'static str,
    pub drop_here_text: &'static str,

    // Analyze button
    pub analyze_button: &'static str,
    pub analyzing_button: &'static str,
    pub processing_text: &'static str,

    // Status card
    pub anomaly_detected: &'static str,
    pub normal: &'static str,
    pub confidence: &'static str,
    pub score: &'static str,
    pub threshold: &'static str,
    pub processing_time: &'static str,
    pub score_vs_threshold: &'static str,

    // Results panel
    pub analysis_results: &'static str,
    pub processing_completed: &'static str,
    pub grid_view: &'static str,
    pub download: &'static str,
    pub back_to_grid: &'static str,

    // Visualizations
    pub original_image: &'static str,
    pub original_image_desc: &'static str,
    pub anomaly_heatmap: &'static str,
    pub anomaly_heatmap_desc: &'static str,
    pub overlay_analysis: &'static str,
    pub overlay_analysis_desc: &'static str,

    // Metrics
    pub detailed_metrics: &'static str,
    pub anomaly_score: &'static str,
    pub threshold_value: &'static str,
    pub confidence_value: &'static str,
    pub classification: &'static str,
    pub anomaly: &'static str,
    pub normal_class: &'static str,
    pub score_comparison: &'static str,
    pub above_threshold: &'static str,
    pub below_threshold: &'static str,

    // Placeholder
    pub ready_for_analysis: &'static str,
    pub ready_description: &'static str,
}

/// Key-addressed access to [`Strings`], used where a key is chosen at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    AppTitle,
    AppSubtitle,
    ModelLabel,
    ModelValue,
    StatusReady,
    UploadTitle,
    DragDropText,
    OrClickText,
    DropHereText,
    AnalyzeButton,
    AnalyzingButton,
    ProcessingText,
    AnomalyDetected,
    Normal,
    Confidence,
    Score,
    Threshold,
    ProcessingTime,
    ScoreVsThreshold,
    AnalysisResults,
    ProcessingCompleted,
    GridView,
    Download,
    BackToGrid,
    OriginalImage,
    OriginalImageDesc,
    AnomalyHeatmap,
    AnomalyHeatmapDesc,
    OverlayAnalysis,
    OverlayAnalysisDesc,
    DetailedMetrics,
    AnomalyScore,
    ThresholdValue,
    ConfidenceValue,
    Classification,
    Anomaly,
    NormalClass,
    ScoreComparison,
    AboveThreshold,
    BelowThreshold,
    ReadyForAnalysis,
    ReadyDescription,
}

impl TextKey {
    pub const ALL: [TextKey; 42] = [
        Self::AppTitle,
        Self::AppSubtitle,
        Self::ModelLabel,
        Self::ModelValue,
        Self::StatusReady,
        Self::UploadTitle,
        Self::DragDropText,
        Self::OrClickText,
        Self::DropHereText,
        Self::AnalyzeButton,
        Self::AnalyzingButton,
        Self::ProcessingText,
        Self::AnomalyDetected,
        Self::Normal,
        Self::Confidence,
        Self::Score,
        Self::Threshold,
        Self::ProcessingTime,
        Self::ScoreVsThreshold,
        Self::AnalysisResults,
        Self::ProcessingCompleted,
        Self::GridView,
        Self::Download,
        Self::BackToGrid,
        Self::OriginalImage,
        Self::OriginalImageDesc,
        Self::AnomalyHeatmap,
        Self::AnomalyHeatmapDesc,
        Self::OverlayAnalysis,
        Self::OverlayAnalysisDesc,
        Self::DetailedMetrics,
        Self::AnomalyScore,
        Self::ThresholdValue,
        Self::ConfidenceValue,
        Self::Classification,
        Self::Anomaly,
        Self::NormalClass,
        Self::ScoreComparison,
        Self::AboveThreshold,
        Self::BelowThreshold,
        Self::ReadyForAnalysis,
        Self::ReadyDescription,
    ];

    /// camelCase name of the key.
    pub fn name(self) -> &'static str {
        match self {
            Self::AppTitle => "appTitle",
            Self::AppSubtitle => "appSubtitle",
            Self::ModelLabel => "modelLabel",
            Self::ModelValue => "modelValue",
            Self::StatusReady => "statusReady",
            Self::UploadTitle => "uploadTitle",
            Self::DragDropText => "dragDropText",
            Self::OrClickText => "orClickText",
            Self::DropHereText => "dropHereText",
            Self::AnalyzeButton => "analyzeButton",
            Self::AnalyzingButton => "analyzingButton",
            Self::ProcessingText => "processingText",
            Self::AnomalyDetected => "anomalyDetected",
            Self::Normal => "normal",
            Self::Confidence => "confidence",
            Self::Score => "score",
            Self::Threshold => "threshold",
            Self::ProcessingTime => "processingTime",
            Self::ScoreVsThreshold => "scoreVsThreshold",
            Self::AnalysisResults => "analysisResults",
            Self::ProcessingCompleted => "processingCompleted",
            Self::GridView => "gridView",
            Self::Download => "download",
            Self::BackToGrid => "backToGrid",
            Self::OriginalImage => "originalImage",
            Self::OriginalImageDesc => "originalImageDesc",
            Self::AnomalyHeatmap => "anomalyHeatmap",
            Self::AnomalyHeatmapDesc => "anomalyHeatmapDesc",
            Self::OverlayAnalysis => "overlayAnalysis",
            Self::OverlayAnalysisDesc => "overlayAnalysisDesc",
            Self::DetailedMetrics => "detailedMetrics",
            Self::AnomalyScore => "anomalyScore",
            Self::ThresholdValue => "thresholdValue",
            Self::ConfidenceValue => "confidenceValue",
            Self::Classification => "classification",
            Self::Anomaly => "anomaly",
            Self::NormalClass => "normalClass",
            Self::ScoreComparison => "scoreComparison",
            Self::AboveThreshold => "aboveThreshold",
            Self::BelowThreshold => "belowThreshold",
            Self::ReadyForAnalysis => "readyForAnalysis",
            Self::ReadyDescription => "readyDescription",
        }
    }
}

impl Strings {
    pub fn get(&self, key: TextKey) -> &'static str {
        match key {
            TextKey::AppTitle => self.app_title,
            TextKey::AppSubtitle => self.app_subtitle,
            TextKey::ModelLabel => self.model_label,
            TextKey::ModelValue => self.model_value,
            TextKey::StatusReady => self.status_ready,
            TextKey::UploadTitle => self.upload_title,
            TextKey::DragDropText => self.drag_drop_text,
            TextKey::OrClickText => self.or_click_text,
            TextKey::DropHereText => self.drop_here_text,
            TextKey::AnalyzeButton => self.analyze_button,
            TextKey::AnalyzingButton => self.analyzing_button,
            TextKey::ProcessingText => self.processing_text,
            TextKey::AnomalyDetected => self.anomaly_detected,
            TextKey::Normal => self.normal,
            TextKey::Confidence => self.confidence,
            TextKey::Score => self.score,
            TextKey::Threshold => self.threshold,
            TextKey::ProcessingTime => self.processing_time,
            TextKey::ScoreVsThreshold => self.score_vs_threshold,
            TextKey::AnalysisResults => self.analysis_results,
            TextKey::ProcessingCompleted => self.processing_completed,
            TextKey::GridView => self.grid_view,
            TextKey::Download => self.download,
            TextKey::BackToGrid => self.back_to_grid,
            TextKey::OriginalImage => self.original_image,
            TextKey::OriginalImageDesc => self.original_image_desc,
            TextKey::AnomalyHeatmap => self.anomaly_heatmap,
            TextKey::AnomalyHeatmapDesc => self.anomaly_heatmap_desc,
            TextKey::OverlayAnalysis => self.overlay_analysis,
            TextKey::OverlayAnalysisDesc => self.overlay_analysis_desc,
            TextKey::DetailedMetrics => self.detailed_metrics,
            TextKey::AnomalyScore => self.anomaly_score,
            TextKey::ThresholdValue => self.threshold_value,
            TextKey::ConfidenceValue => self.confidence_value,
            TextKey::Classification => self.classification,
            TextKey::Anomaly => self.anomaly,
            TextKey::NormalClass => self.normal_class,
            TextKey::ScoreComparison => self.score_comparison,
            TextKey::AboveThreshold => self.above_threshold,
            TextKey::BelowThreshold => self.below_threshold,
            TextKey::ReadyForAnalysis => self.ready_for_analysis,
            TextKey::ReadyDescription => self.ready_description,
        }
    }
}

pub const EN: Strings = Strings {
    app_title: "BTC AI",
    app_subtitle: "Anomaly Detection",
    model_label: "Model:",
    model_value: "ResNet50",
    status_ready: "Ready",

    upload_title: "Upload Image",
    drag_drop_text: "Drag & drop an image here",
    or_click_text: "or click to select • PNG, JPG, JPEG",
    drop_here_text: "Drop the image here...",

    analyze_button: "Analyze Image",
    analyzing_button: "Analyzing...",
    processing_text: "Processing...",

    anomaly_detected: "ANOMALY DETECTED",
    normal: "NORMAL",
    confidence: "Confidence",
    score: "Score",
    threshold: "Threshold",
    processing_time: "Processing Time",
    score_vs_threshold: "Score vs Threshold",

    analysis_results: "Analysis Results",
    processing_completed: "Processing completed in",
    grid_view: "Grid View",
    download: "Download",
    back_to_grid: "Back to Grid",

    original_image: "Original Image",
    original_image_desc: "Input image for analysis",
    anomaly_heatmap: "Anomaly Heatmap",
    anomaly_heatmap_desc: "Heat map showing anomaly intensity (Score:",
    overlay_analysis: "Overlay Analysis",
    overlay_analysis_desc: "Original image with anomaly overlay",

    detailed_metrics: "Detailed Metrics",
    anomaly_score: "Anomaly Score",
    threshold_value: "Threshold",
    confidence_value: "Confidence",
    classification: "Classification",
    anomaly: "ANOMALY",
    normal_class: "NORMAL",
    score_comparison: "Score vs Threshold Comparison",
    above_threshold: "Above Threshold",
    below_threshold: "Below Threshold",

    ready_for_analysis: "Ready for Analysis",
    ready_description: "Upload a metal nut image to detect anomalies using our advanced BTC AI model. Get detailed analysis with heatmaps and confidence scores.",
};

pub const TR: Strings = Strings {
    app_title: "Somun Anomali",
    app_subtitle: "Anomali Tespiti",
    model_label: "Model:",
    model_value: "ResNet50",
    status_ready: "Hazır",

    upload_title: "Görüntü Yükle",
    drag_drop_text: "Bir görüntüyü buraya sürükleyip bırakın",
    or_click_text: "veya seçmek için tıklayın • PNG, JPG, JPEG",
    drop_here_text: "Görüntüyü buraya bırakın...",

    analyze_button: "Görüntüyü Analiz Et",
    analyzing_button: "Analiz Ediliyor...",
    processing_text: "İşleniyor...",

    anomaly_detected: "ANOMALİ TESPİT EDİLDİ",
    normal: "NORMAL",
    confidence: "Güven",
    score: "Skor",
    threshold: "Eşik",
    processing_time: "İşlem Süresi",
    score_vs_threshold: "Skor / Eşik Karşılaştırması",

    analysis_results: "Analiz Sonuçları",
    processing_completed: "İşlem tamamlandı",
    grid_view: "Izgara Görünümü",
    download: "İndir",
    back_to_grid: "Izgaraya Dön",

    original_image: "Orijinal Görüntü",
    original_image_desc: "Analiz için giriş görüntüsü",
    anomaly_heatmap: "Anomali Isı Haritası",
    anomaly_heatmap_desc: "Anomali yoğunluğunu gösteren ısı haritası (Skor:",
    overlay_analysis: "Katman Analizi",
    overlay_analysis_desc: "Anomali katmanı ile orijinal görüntü",

    detailed_metrics: "Detaylı Metrikler",
    anomaly_score: "Anomali Skoru",
    threshold_value: "Eşik Değeri",
    confidence_value: "Güven",
    classification: "Sınıflandırma",
    anomaly: "ANOMALİ",
    normal_class: "NORMAL",
    score_comparison: "Skor / Eşik Karşılaştırması",
    above_threshold: "Eşiğin Üstünde",
    below_threshold: "Eşiğin Altında",

    ready_for_analysis: "Analiz İçin Hazır",
    ready_description: "Gelişmiş BTC AI modelimizi kullanarak anomalileri tespit etmek için bir metal somun görüntüsü yükleyin. Isı haritaları ve güven skorları ile detaylı analiz alın.",
};
