//! Dashboard header component
//!
//! Renders the title and the account / period status line

use super::super::state::{DashboardState, LoadState};
use super::super::utils::spinner_frame;
use crate::metrics::format_count;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and account status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("GRAMDASH v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let account = state
        .snapshot
        .as_ref()
        .map(|snapshot| format!("@{}", snapshot.account))
        .or_else(|| state.account_url.clone())
        .unwrap_or_else(|| "no account configured".to_string());

    let followers = state
        .snapshot
        .as_ref()
        .map(|snapshot| format_count(snapshot.follower_count))
        .unwrap_or_else(|| "-".to_string());

    let (status_text, status_color) = match state.load_state() {
        LoadState::Idle => ("idle".to_string(), Color::DarkGray),
        LoadState::Loading { started_at, .. } => (
            format!(
                "{} loading ({}s)",
                spinner_frame(state.tick),
                started_at.elapsed().as_secs()
            ),
            Color::LightBlue,
        ),
        LoadState::Ready { .. } => ("ready".to_string(), Color::LightGreen),
        LoadState::Failed { .. } => ("failed".to_string(), Color::LightRed),
    };

    let status_line = Line::from(vec![
        Span::styled(account, Style::default().fg(Color::Yellow)),
        Span::raw("  |  "),
        Span::styled(state.range.label(), Style::default().fg(Color::White)),
        Span::raw("  |  "),
        Span::styled(
            format!("{} followers", followers),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw("  |  "),
        Span::styled(status_text, Style::default().fg(status_color)),
        Span::raw("  |  "),
        Span::styled(
            state.environment.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let status = Paragraph::new(status_line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(status, header_chunks[1]);
}
