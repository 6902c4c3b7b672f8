use std::path::PathBuf;

use nutscan_core::config::ClientConfig;
use nutscan_core::result::AnalysisResult;
use nutscan_core::session::AnalysisTicket;
use nutscan_core::upload::SelectedFile;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read a picked or dropped image and decode its preview.
    LoadFile { path: PathBuf },

    /// Submit the ticket's file to the analysis service.
    Analyze {
        ticket: AnalysisTicket,
        config: ClientConfig,
    },

    /// Render the result snapshot as PNG into `dir`.
    Export { result: AnalysisResult, dir: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    FileLoaded {
        file: SelectedFile,
        preview: Option<egui::ColorImage>,
    },

    /// Cosmetic progress while a request is outstanding.
    Progress { value: u8 },

    /// Request resolved successfully. Images are decoded in result order
    /// (original, heatmap, overlay); `None` where decoding failed.
    AnalysisComplete {
        generation: u64,
        result: AnalysisResult,
        images: [Option<egui::ColorImage>; 3],
    },

    AnalysisFailed { message: String },

    Exported { path: PathBuf },

    ConfigImported { config: ClientConfig },

    Error { message: String },
    Log { message: String },
}
