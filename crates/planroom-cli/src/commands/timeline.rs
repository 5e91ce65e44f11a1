//! Timeline chart commands.
//!
//! Renders the chart geometry as text: one character per 12 horizontal
//! pixels, so a 120px column at zoom 1.0 is ten characters wide.

use std::path::PathBuf;

use clap::Subcommand;
use planroom_core::storage::Config;
use planroom_core::timeline::{column_label, plan_chart, ChartPlan, LayoutMode, StatusFilter, ViewMode};
use planroom_core::{RangeCalculator, Status};

/// Horizontal pixels per rendered character.
const PX_PER_CHAR: f64 = 12.0;

/// Width of the task label column.
const LABEL_WIDTH: usize = 24;

#[derive(Subcommand)]
pub enum TimelineAction {
    /// Render the chart as text
    Render {
        /// Board snapshot to render (defaults to the saved board)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Column granularity: days, weeks, or months
        #[arg(long)]
        view: Option<ViewMode>,
        /// Zoom level in [0.5, 2.0]
        #[arg(long)]
        zoom: Option<f64>,
        /// Status filter: all, pending, in-progress, or completed
        #[arg(long)]
        filter: Option<StatusFilter>,
        /// Bar sizing: duration-ratio or column-count
        #[arg(long)]
        mode: Option<LayoutMode>,
        /// Emit the raw chart plan as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the generated column ticks
    Columns {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        view: Option<ViewMode>,
    },
    /// Print the computed date range
    Range {
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

pub fn run(action: TimelineAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        TimelineAction::Render {
            file,
            view,
            zoom,
            filter,
            mode,
            json,
        } => {
            let board = super::load_board(file.as_deref())?;

            let mut view_state = config.timeline.initial_view();
            if let Some(mode) = view {
                view_state.set_view_mode(mode);
            }
            if let Some(zoom) = zoom {
                view_state.set_zoom(zoom);
            }
            if let Some(filter) = filter {
                view_state.set_status_filter(filter);
            }

            let mut chart_config = config.timeline.chart_config();
            if let Some(mode) = mode {
                chart_config.layout_mode = mode;
            }

            let plan = plan_chart(board.items(), &view_state, &chart_config);

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!(
                    "{}",
                    render_text(&plan, view_state.view_mode, view_state.zoom_level())
                );
            }
        }
        TimelineAction::Columns { file, view } => {
            let board = super::load_board(file.as_deref())?;
            let mode = view.unwrap_or(config.timeline.default_view_mode);

            let range = RangeCalculator::new()
                .with_padding(config.timeline.padding_days)
                .compute(board.items());
            let columns = planroom_core::timeline::generate_columns(&range, mode);

            for date in columns {
                println!("{}  {}", date, column_label(date, mode));
            }
        }
        TimelineAction::Range { file } => {
            let board = super::load_board(file.as_deref())?;
            let range = RangeCalculator::new()
                .with_padding(config.timeline.padding_days)
                .compute(board.items());
            println!("{} .. {} ({} days)", range.min_date, range.max_date, range.span_days());
        }
    }

    Ok(())
}

fn status_glyph(status: Status) -> char {
    match status {
        Status::Completed => '✓',
        Status::InProgress => '●',
        Status::Pending => '○',
    }
}

fn chars_for(px: f64) -> usize {
    (px / PX_PER_CHAR).round() as usize
}

/// Lay the plan out as a header line plus one row per bar.
fn render_text(plan: &ChartPlan, mode: ViewMode, zoom: f64) -> String {
    let mut out = String::new();
    let column_chars = chars_for(plan.column_width).max(1);

    out.push_str(&format!(
        "{} .. {}  ({}, zoom {:.0}%)\n",
        plan.range.min_date,
        plan.range.max_date,
        mode,
        zoom * 100.0
    ));

    // header ticks
    out.push_str(&" ".repeat(LABEL_WIDTH + 2));
    for date in &plan.columns {
        let label = column_label(*date, mode);
        out.push_str(&format!("{label:<column_chars$.column_chars$}"));
    }
    out.push('\n');

    for row in &plan.rows {
        let glyph = status_glyph(row.status);
        let title: String = row.title.chars().take(LABEL_WIDTH - 2).collect();
        out.push_str(&format!("{glyph} {title:<width$}| ", width = LABEL_WIDTH - 2));

        let left = chars_for(row.bar.left);
        let width = chars_for(row.bar.width).max(1);
        let filled = chars_for(row.fill.width).min(width);

        out.push_str(&" ".repeat(left));
        out.push_str(&"█".repeat(filled));
        out.push_str(&"░".repeat(width - filled));
        out.push_str(&format!("  {}%\n", row.progress));
    }

    if plan.rows.is_empty() {
        out.push_str("(no scheduled tasks match the filter)\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use planroom_core::timeline::{plan_chart_at, ChartConfig, ViewState};
    use planroom_core::TimelineItem;

    #[test]
    fn renders_one_line_per_scheduled_row() {
        let date = |d| NaiveDate::from_ymd_opt(2025, 7, d).unwrap();
        let items = vec![
            TimelineItem::new("1", "Planning", Status::Completed)
                .with_dates(date(1), date(10))
                .with_progress(100),
            TimelineItem::new("2", "Design", Status::InProgress)
                .with_dates(date(8), date(25))
                .with_progress(50),
        ];

        let plan = plan_chart_at(
            &items,
            &ViewState::new(),
            &ChartConfig::default(),
            date(1),
        );
        let text = render_text(&plan, ViewMode::Weeks, 1.0);
        let lines: Vec<&str> = text.lines().collect();

        // range line + header + two rows
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("2025-06-24"));
        assert!(lines[1].contains("Week"));
        assert!(lines[2].starts_with('✓'));
        assert!(lines[2].contains('█'));
        assert!(lines[3].contains('░'));
    }

    #[test]
    fn empty_plan_renders_placeholder() {
        let plan = plan_chart_at(
            &[],
            &ViewState::new(),
            &ChartConfig::default(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        );
        let text = render_text(&plan, ViewMode::Weeks, 1.0);
        assert!(text.contains("no scheduled tasks"));
    }
}
