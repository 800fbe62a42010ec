//! Dashboard main renderer
//!
//! The body panels only show the last successful load; while a load is in
//! flight or after a failure they are replaced by a placeholder, and the
//! banner line carries the error.

use super::components::{banner, charts, footer, header, logs, summary, table};
use super::state::{DashboardState, LoadState};
use super::utils::spinner_frame;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(35),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[3]);

    match state.load_state() {
        LoadState::Ready { .. } => {
            summary::render_summary(f, main_chunks[1], state);
            charts::render_charts(f, main_chunks[2], state);
            table::render_table(f, bottom_chunks[0], state);
        }
        LoadState::Idle | LoadState::Loading { .. } => {
            render_placeholder(
                f,
                main_chunks[2],
                format!("{} Loading...", spinner_frame(state.tick)),
            );
        }
        LoadState::Failed { .. } => {
            render_placeholder(f, main_chunks[2], "Data unavailable".to_string());
        }
    }

    logs::render_logs_panel(f, bottom_chunks[1], state);
    banner::render_status_line(f, main_chunks[4], state);
    footer::render_footer(f, main_chunks[5], state);
}

fn render_placeholder(f: &mut Frame, area: Rect, text: String) {
    let placeholder = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(placeholder, area);
}
