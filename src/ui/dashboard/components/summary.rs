//! Summary cards component
//!
//! Renders total reel count and average engagement rate

use super::super::state::DashboardState;
use crate::metrics::format_er;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the two headline figures above the charts.
pub fn render_summary(f: &mut Frame, area: Rect, state: &DashboardState) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_card(
        f,
        cards[0],
        "TOTAL REELS",
        state.summary.total_reels.to_string(),
        Color::Cyan,
    );
    render_card(
        f,
        cards[1],
        "AVG ER",
        format_er(state.summary.avg_er),
        Color::Green,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let card = Paragraph::new(value)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(card, area);
}
