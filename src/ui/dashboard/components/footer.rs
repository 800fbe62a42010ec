//! Dashboard footer component
//!
//! Renders footer with key bindings

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the key hint footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer_text = if state.account_input.is_some() {
        "[Enter] Save | [Esc] Cancel".to_string()
    } else {
        let uptime = state.start_time.elapsed().as_secs();
        format!(
            "[Q] Quit | [R] Refresh | [7/1/3] 7/14/30 days | [T] Today | [[/]] Start ±1d | [,/.] End ±1d | [A] Account | [↑/↓] Scroll | Up {:02}:{:02}:{:02}",
            uptime / 3600,
            (uptime % 3600) / 60,
            uptime % 60
        )
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
