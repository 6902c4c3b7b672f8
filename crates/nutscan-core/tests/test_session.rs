mod common;

use std::path::Path;

use nutscan_core::error::NutscanError;
use nutscan_core::i18n::Language;
use nutscan_core::result::Visualization;
use nutscan_core::session::{DisplayMode, Session};
use nutscan_core::upload::SelectedFile;

use common::{png_bytes, sample_file, sample_result};

fn other_file() -> SelectedFile {
    SelectedFile::from_bytes(Path::new("nut_002.jpg"), png_bytes(2, 2))
}

/// Session with a completed analysis of `sample_file()`.
fn analyzed_session() -> Session {
    let mut session = Session::new(Language::En);
    session.select_file(sample_file());
    let ticket = session.begin_analysis().unwrap();
    assert!(session.finish_success(ticket.generation, sample_result(0.0823, 0.05)));
    session
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn test_new_session_is_idle() {
    let session = Session::new(Language::Tr);
    assert!(session.selected_file().is_none());
    assert!(!session.is_analyzing());
    assert!(!session.can_analyze());
    assert_eq!(session.progress(), 0);
    assert!(session.result().is_none());
    assert_eq!(session.display_mode(), DisplayMode::Grid);
    assert_eq!(session.language(), Language::Tr);
}

#[test]
fn test_selecting_a_file_clears_the_result() {
    let mut session = analyzed_session();
    session.focus(Visualization::Overlay);

    session.select_file(other_file());
    assert!(session.result().is_none());
    assert_eq!(session.display_mode(), DisplayMode::Grid);
    assert_eq!(session.selected_file().unwrap().name, "nut_002.jpg");
    assert!(session.can_analyze());
}

// ---------------------------------------------------------------------------
// Analysis lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_begin_without_file_fails() {
    let mut session = Session::default();
    assert!(matches!(session.begin_analysis(), Err(NutscanError::NoFileSelected)));
    assert!(!session.is_analyzing());
}

#[test]
fn test_begin_twice_is_rejected() {
    let mut session = Session::default();
    session.select_file(sample_file());
    session.begin_analysis().unwrap();
    assert!(!session.can_analyze());
    assert!(matches!(session.begin_analysis(), Err(NutscanError::AnalysisInProgress)));
}

#[test]
fn test_progress_only_moves_while_analyzing() {
    let mut session = Session::default();
    session.set_progress(45);
    assert_eq!(session.progress(), 0);

    session.select_file(sample_file());
    session.begin_analysis().unwrap();
    session.set_progress(45);
    assert_eq!(session.progress(), 45);
}

#[test]
fn test_success_stores_result_and_resets_activity() {
    let session = analyzed_session();
    assert!(!session.is_analyzing());
    assert_eq!(session.progress(), 0);
    assert_eq!(session.result().unwrap().anomaly_score, 0.0823);
    assert_eq!(session.display_mode(), DisplayMode::Grid);
}

#[test]
fn test_failure_keeps_previous_result() {
    let mut session = analyzed_session();
    let before = session.result().cloned();

    session.begin_analysis().unwrap();
    session.set_progress(30);
    session.finish_failure();

    assert!(!session.is_analyzing());
    assert_eq!(session.progress(), 0);
    assert_eq!(session.result().cloned(), before);
}

#[test]
fn test_stale_result_is_discarded() {
    let mut session = Session::default();
    session.select_file(sample_file());
    let ticket = session.begin_analysis().unwrap();

    session.select_file(other_file());
    assert!(!session.finish_success(ticket.generation, sample_result(0.0823, 0.05)));
    assert!(session.result().is_none());
    assert!(!session.is_analyzing());
}

// ---------------------------------------------------------------------------
// Display mode
// ---------------------------------------------------------------------------

#[test]
fn test_focus_and_back_leave_result_unchanged() {
    let mut session = analyzed_session();
    let before = session.result().cloned();

    session.focus(Visualization::Heatmap);
    assert_eq!(session.display_mode(), DisplayMode::Focus(Visualization::Heatmap));
    assert_eq!(session.display_mode().focused(), Some(Visualization::Heatmap));

    session.back_to_grid();
    assert_eq!(session.display_mode(), DisplayMode::Grid);
    assert_eq!(session.result().cloned(), before);
}

#[test]
fn test_focus_without_result_is_ignored() {
    let mut session = Session::default();
    session.focus(Visualization::Original);
    assert_eq!(session.display_mode(), DisplayMode::Grid);
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

#[test]
fn test_toggling_language_changes_labels_not_numbers() {
    let mut session = analyzed_session();
    let en = session.status_summary().unwrap();

    session.toggle_language();
    assert_eq!(session.language(), Language::Tr);
    let tr = session.status_summary().unwrap();

    assert_ne!(en.headline, tr.headline);
    assert_eq!(en.score_text, tr.score_text);
    assert_eq!(en.bar_percent_text, tr.bar_percent_text);
    assert_eq!(en.classification, tr.classification);

    session.set_language(Language::En);
    assert_eq!(session.status_summary().unwrap(), en);
}
