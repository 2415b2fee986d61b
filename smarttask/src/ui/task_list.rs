use super::widgets::{priority_badge, reminder_label};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

fn list_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(title, Style::default().fg(Color::White)))
        .padding(Padding::horizontal(1))
}

pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = &app.tasks;

    if snapshot.is_empty() {
        let message = if snapshot.is_loaded() {
            "No tasks yet. Press a to add one."
        } else {
            "Loading tasks…"
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(list_block(" Tasks ".to_string()));
        frame.render_widget(empty, area);
        return;
    }

    let pending = snapshot.pending().iter().map(|p| {
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(p.task.title.clone(), Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(
                    "saving…",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]),
            Line::from(""),
        ])
    });

    let stored = snapshot.tasks().iter().map(|task| {
        let mut detail = Vec::new();
        if !task.description.is_empty() {
            detail.push(Span::styled(
                task.description.clone(),
                Style::default().fg(Color::Gray),
            ));
            detail.push(Span::raw("  "));
        }
        detail.push(Span::styled(
            reminder_label(task.reminder_minutes),
            Style::default().fg(Color::Cyan),
        ));

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(
                    task.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                priority_badge(task.priority),
            ]),
            Line::from(detail),
        ])
    });

    let items: Vec<ListItem> = pending.chain(stored).collect();
    let list = List::new(items)
        .block(list_block(format!(" Tasks ({}) ", snapshot.tasks().len())))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    // Pending rows sit above the stored ones and are not selectable
    let mut state = ListState::default();
    if !snapshot.tasks().is_empty() {
        state.select(Some(snapshot.pending().len() + app.selected_task));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
