use thiserror::Error;

#[derive(Error, Debug)]
pub enum NutscanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    HttpStatus { status: u16, message: String },

    #[error("{0}")]
    Analysis(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Font error: {0}")]
    Font(String),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("No file selected")]
    NoFileSelected,

    #[error("An analysis is already in progress")]
    AnalysisInProgress,
}

impl NutscanError {
    /// True for errors raised while talking to the analysis service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::HttpStatus { .. } | Self::Analysis(_) | Self::InvalidResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NutscanError>;
