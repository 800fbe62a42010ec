//! Reel table component
//!
//! Renders the per-reel results, newest first

use super::super::state::DashboardState;
use crate::metrics::{format_count, format_er, sort_for_table, table_date};

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

/// Render the reel table, scrolled to the state's table offset.
pub fn render_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("REELS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let header = Row::new(vec!["Date", "Views", "Likes", "Comments", "ER"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let reels = state
        .snapshot
        .as_ref()
        .map(|snapshot| sort_for_table(&snapshot.reels))
        .unwrap_or_default();

    let rows: Vec<Row> = if reels.is_empty() {
        vec![Row::new(vec![
            Cell::from("No data found").style(Style::default().fg(Color::DarkGray)),
        ])]
    } else {
        reels
            .iter()
            .skip(state.table_offset)
            .map(|reel| {
                Row::new(vec![
                    Cell::from(table_date(reel)),
                    Cell::from(format_count(reel.views_count)),
                    Cell::from(format_count(reel.likes_count)),
                    Cell::from(format_count(reel.comments_count)),
                    Cell::from(format_er(reel.er))
                        .style(Style::default().fg(Color::Green)),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2);
    f.render_widget(table, area);
}
