//! Chart row component
//!
//! Renders the views bar chart, the ER trend line and the likes/comments
//! chart. All three read from the pre-sorted series in [`ChartData`], so
//! the time axis runs oldest to newest.

use super::super::state::DashboardState;
use crate::metrics::{ChartData, format_count};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{
    Axis, BarChart, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph,
};

pub fn render_charts(f: &mut Frame, area: Rect, state: &DashboardState) {
    let charts = match &state.charts {
        Some(charts) if !charts.is_empty() => charts,
        _ => {
            render_empty(f, area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_views(f, chunks[0], charts);
    render_er(f, chunks[1], charts);
    render_likes_comments(f, chunks[2], charts);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let empty = Paragraph::new("No data")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(chart_block("CHARTS"));
    f.render_widget(empty, area);
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_views(f: &mut Frame, area: Rect, charts: &ChartData) {
    let data: Vec<(&str, u64)> = charts
        .labels
        .iter()
        .map(String::as_str)
        .zip(charts.views.iter().copied())
        .collect();

    let bar_chart = BarChart::default()
        .block(chart_block("VIEWS"))
        .data(&data)
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(bar_chart, area);
}

fn render_er(f: &mut Frame, area: Rect, charts: &ChartData) {
    let points: Vec<(f64, f64)> = charts
        .er
        .iter()
        .enumerate()
        .map(|(index, er)| (index as f64, *er))
        .collect();
    let max_er = charts.er.iter().cloned().fold(0.0_f64, f64::max).max(1.0);
    let max_x = (points.len().saturating_sub(1)).max(1) as f64;

    let dataset = Dataset::default()
        .name("ER %")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points);

    let x_labels: Vec<Span> = match (charts.labels.first(), charts.labels.last()) {
        (Some(first), Some(last)) => vec![
            Span::styled(first.clone(), Style::default().fg(Color::DarkGray)),
            Span::styled(last.clone(), Style::default().fg(Color::DarkGray)),
        ],
        _ => Vec::new(),
    };

    let chart = Chart::new(vec![dataset])
        .block(chart_block("ER TREND"))
        .x_axis(Axis::default().bounds([0.0, max_x]).labels(x_labels))
        .y_axis(
            Axis::default()
                .bounds([0.0, max_er * 1.1])
                .labels(vec![
                    Span::styled("0", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{:.1}", max_er),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
        );
    f.render_widget(chart, area);
}

fn render_likes_comments(f: &mut Frame, area: Rect, charts: &ChartData) {
    let likes: Vec<(f64, f64)> = charts
        .likes
        .iter()
        .enumerate()
        .map(|(index, count)| (index as f64, *count as f64))
        .collect();
    let comments: Vec<(f64, f64)> = charts
        .comments
        .iter()
        .enumerate()
        .map(|(index, count)| (index as f64, *count as f64))
        .collect();

    let max_value = charts
        .likes
        .iter()
        .chain(charts.comments.iter())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    let max_x = (likes.len().saturating_sub(1)).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("Likes")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&likes),
        Dataset::default()
            .name("Comments")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&comments),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block("LIKES / COMMENTS"))
        .x_axis(Axis::default().bounds([0.0, max_x]))
        .y_axis(
            Axis::default()
                .bounds([0.0, max_value as f64 * 1.1])
                .labels(vec![
                    Span::styled("0", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format_count(max_value),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
        );
    f.render_widget(chart, area);
}
