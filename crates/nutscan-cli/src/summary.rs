use console::Style;
use nutscan_core::metrics::{Classification, ThresholdSide};
use nutscan_core::view::{MetricsPanel, ResultView, StatusSummary};

const BAR_WIDTH: usize = 40;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    anomaly: Style,
    normal: Style,
    muted: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            anomaly: Style::new().red().bold(),
            normal: Style::new().green().bold(),
            muted: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }

    fn verdict(&self, classification: Classification) -> &Style {
        match classification {
            Classification::Anomaly => &self.anomaly,
            Classification::Normal => &self.normal,
        }
    }
}

fn underline(text: &str) -> String {
    "\u{2550}".repeat(text.chars().count())
}

/// `[=====|-------]` with the fill and an optional marker position in [0, 1].
fn text_bar(fill: f64, marker: Option<f64>) -> String {
    let filled = (fill.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let mut cells: Vec<char> = (0..BAR_WIDTH)
        .map(|i| if i < filled { '=' } else { ' ' })
        .collect();
    if let Some(m) = marker {
        let idx = ((m.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH - 1);
        cells[idx] = '|';
    }
    format!("[{}]", cells.into_iter().collect::<String>())
}

/// The compact status card.
pub fn print_status_summary(summary: &StatusSummary) {
    let s = Styles::new();

    println!();
    println!("  {}", s.verdict(summary.classification).apply_to(summary.headline));
    println!("  {}", s.label.apply_to(&summary.confidence_line));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to(summary.score_label),
        s.value.apply_to(&summary.score_text)
    );
    println!("  {}", s.label.apply_to(&summary.threshold_line));
    println!(
        "  {:<14}{}",
        s.label.apply_to(summary.time_label),
        s.value.apply_to(&summary.time_text)
    );
    println!();
    println!(
        "  {:<22}{}",
        s.label.apply_to(summary.bar_label),
        s.value.apply_to(&summary.bar_percent_text)
    );
    println!(
        "  {}",
        s.verdict(summary.classification)
            .apply_to(text_bar(summary.bar_fill, None))
    );
    println!();
}

/// The detailed result panel: visualization list and metrics.
pub fn print_result_view(view: &ResultView<'_>) {
    let s = Styles::new();

    println!("  {}", s.title.apply_to(view.title));
    println!("  {}", s.title.apply_to(underline(view.title)));
    println!("  {}", s.label.apply_to(&view.completed_text));
    println!();

    for card in &view.cards {
        println!("  {}", s.header.apply_to(card.title));
        println!("    {}", card.description);
        if !card.image.starts_with("data:") {
            println!("    {}", s.path.apply_to(card.image));
        }
    }
    println!();

    print_metrics(&s, &view.metrics);
}

fn print_metrics(s: &Styles, m: &MetricsPanel) {
    println!("  {}", s.header.apply_to(m.heading));
    println!(
        "    {:<22}{}",
        s.label.apply_to(m.score_label),
        s.value.apply_to(&m.score_text)
    );
    println!(
        "    {:<22}{}",
        s.label.apply_to(m.threshold_label),
        s.value.apply_to(&m.threshold_text)
    );
    println!(
        "    {:<22}{}",
        s.label.apply_to(m.confidence_label),
        s.value.apply_to(&m.confidence_text)
    );
    println!(
        "    {:<22}{}",
        s.label.apply_to(m.classification_label),
        s.verdict(m.classification).apply_to(m.classification_text)
    );
    println!();

    let side_style = match m.side {
        ThresholdSide::Above => &s.anomaly,
        ThresholdSide::Below => &s.normal,
    };
    println!(
        "  {}  {}",
        s.header.apply_to(m.comparison_label),
        side_style.apply_to(m.side_label)
    );
    println!("    {}", text_bar(m.bar_fill, Some(m.marker_position)));
    println!(
        "    {:<width$}{}",
        MetricsPanel::SCALE_MIN_CAPTION,
        MetricsPanel::SCALE_MAX_CAPTION,
        width = BAR_WIDTH + 2 - MetricsPanel::SCALE_MAX_CAPTION.len()
    );
    println!("    {}", s.muted.apply_to(&m.scale_threshold_caption));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bar_fill_and_marker() {
        let bar = text_bar(0.5, Some(0.25));
        assert_eq!(bar.chars().count(), BAR_WIDTH + 2);
        assert_eq!(bar.chars().nth(1 + 10), Some('|'));
        assert_eq!(bar.chars().filter(|&c| c == '=').count(), 19);
    }

    #[test]
    fn test_text_bar_marker_at_end_stays_inside() {
        let bar = text_bar(1.0, Some(1.0));
        assert_eq!(bar.chars().nth(BAR_WIDTH), Some('|'));
        assert!(bar.ends_with("|]"));
    }
}
