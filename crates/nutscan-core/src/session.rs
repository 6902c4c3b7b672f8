use tracing::{debug, info};

use crate::error::{NutscanError, Result};
use crate::i18n::Language;
use crate::result::{AnalysisResult, Visualization};
use crate::upload::SelectedFile;
use crate::view::{ResultView, StatusSummary};

/// How the result panel lays out its images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// All three visualizations side by side.
    #[default]
    Grid,
    /// One visualization enlarged.
    Focus(Visualization),
}

impl DisplayMode {
    pub fn focused(self) -> Option<Visualization> {
        match self {
            Self::Grid => None,
            Self::Focus(v) => Some(v),
        }
    }
}

/// Handle for one in-flight analysis, returned by [`Session::begin_analysis`].
#[derive(Clone, Debug)]
pub struct AnalysisTicket {
    /// Selection generation the analysis was started for.
    pub generation: u64,
    pub file: SelectedFile,
}

/// All mutable client state. The app owns exactly one and hands out
/// read-only views to the panels.
#[derive(Debug, Default)]
pub struct Session {
    selected_file: Option<SelectedFile>,
    /// Bumped on every selection; stale completions are discarded.
    generation: u64,
    is_analyzing: bool,
    progress: u8,
    result: Option<AnalysisResult>,
    display_mode: DisplayMode,
    language: Language,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    // ---- upload -----------------------------------------------------------

    /// Replace the selected file. Any displayed result is dropped at once.
    pub fn select_file(&mut self, file: SelectedFile) {
        info!("Selected {} ({})", file.name, file.size_label());
        self.selected_file = Some(file);
        self.generation += 1;
        self.result = None;
        self.display_mode = DisplayMode::Grid;
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    // ---- analysis ---------------------------------------------------------

    pub fn can_analyze(&self) -> bool {
        self.selected_file.is_some() && !self.is_analyzing
    }

    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket> {
        if self.is_analyzing {
            return Err(NutscanError::AnalysisInProgress);
        }
        let file = self
            .selected_file
            .clone()
            .ok_or(NutscanError::NoFileSelected)?;

        self.is_analyzing = true;
        self.progress = 0;
        Ok(AnalysisTicket {
            generation: self.generation,
            file,
        })
    }

    /// Cosmetic progress update. Ignored when idle.
    pub fn set_progress(&mut self, value: u8) {
        if self.is_analyzing {
            self.progress = value.min(100);
        }
    }

    /// Terminal success. Returns `false` when the user picked another file
    /// while the request was in flight and the result was discarded.
    pub fn finish_success(&mut self, generation: u64, result: AnalysisResult) -> bool {
        self.reset_activity();
        if generation != self.generation {
            debug!(
                "Discarding result for selection {generation}, current is {}",
                self.generation
            );
            return false;
        }
        self.result = Some(result);
        self.display_mode = DisplayMode::Grid;
        true
    }

    /// Terminal failure. The previous result, if any, stays as it was.
    pub fn finish_failure(&mut self) {
        self.reset_activity();
    }

    fn reset_activity(&mut self) {
        self.is_analyzing = false;
        self.progress = 0;
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    // ---- result view ------------------------------------------------------

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Enlarge one visualization. No effect without a result.
    pub fn focus(&mut self, which: Visualization) {
        if self.result.is_some() {
            self.display_mode = DisplayMode::Focus(which);
        }
    }

    pub fn back_to_grid(&mut self) {
        self.display_mode = DisplayMode::Grid;
    }

    pub fn result_view(&self) -> Option<ResultView<'_>> {
        self.result
            .as_ref()
            .map(|r| ResultView::new(r, self.language))
    }

    pub fn status_summary(&self) -> Option<StatusSummary> {
        self.result
            .as_ref()
            .map(|r| StatusSummary::new(r, self.language))
    }

    // ---- language ---------------------------------------------------------

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }
}
