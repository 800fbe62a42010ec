//! Status line component
//!
//! Renders the transient banner, or the account URL input when it is open

use super::super::state::{BannerKind, DashboardState};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

/// Render the one-line status area below the panels.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &DashboardState) {
    // An open input line takes priority over any banner.
    if let Some(input) = &state.account_input {
        let prompt = Paragraph::new(format!("Account URL: {}_", input))
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        f.render_widget(prompt, area);
        return;
    }

    if let Some(banner) = state.banner() {
        let style = match banner.kind {
            BannerKind::Error => Style::default().fg(Color::White).bg(Color::Red),
            BannerKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
        };
        let line = Paragraph::new(banner.msg.clone()).style(style.add_modifier(Modifier::BOLD));
        f.render_widget(line, area);
    }
}
