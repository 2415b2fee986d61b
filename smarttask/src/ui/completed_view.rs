use super::widgets::priority_badge;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

pub fn render_completed_view(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = &app.completed;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(" Completed ({}) ", snapshot.tasks().len()),
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));

    if snapshot.is_empty() {
        let message = if snapshot.is_loaded() {
            "No completed tasks yet"
        } else {
            "Loading tasks…"
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = snapshot
        .tasks()
        .iter()
        .map(|task| {
            let description = if task.description.is_empty() {
                Span::styled(
                    "No description",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                Span::styled(task.description.clone(), Style::default().fg(Color::Gray))
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        task.title.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::CROSSED_OUT),
                    ),
                    Span::raw(" "),
                    priority_badge(task.priority),
                ]),
                Line::from(vec![
                    description,
                    Span::raw("  "),
                    Span::styled("✔ Completed", Style::default().fg(Color::Green)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_completed));

    frame.render_stateful_widget(list, area, &mut state);
}
