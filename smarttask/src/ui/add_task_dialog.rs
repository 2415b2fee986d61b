use super::utils::centered_rect;
use super::widgets::{input_text, key_hint, priority_color};
use crate::app::{App, FormField};
use crate::types::Priority;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn button(label: &'static str, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(Color::White))
    }
}

pub fn render_add_task_dialog(frame: &mut Frame, app: &App) {
    let form = match &app.form {
        Some(f) => f,
        None => return,
    };

    let area = centered_rect(64, 17, frame.area());
    frame.render_widget(Clear, area);

    let focus = form.focused;
    let text_row = |label: &'static str, field: FormField, value: String| {
        Line::from(vec![
            Span::styled(label, label_style(focus == field)),
            Span::styled(value, value_style(focus == field)),
        ])
    };

    let priority_focused = focus == FormField::Priority;
    let mut priority_spans = vec![Span::styled(
        "Priority:    ",
        label_style(priority_focused),
    )];
    for priority in [Priority::High, Priority::Medium, Priority::Low] {
        let style = if priority == form.priority {
            Style::default()
                .fg(Color::Black)
                .bg(priority_color(priority))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        priority_spans.push(Span::styled(format!(" {} ", priority), style));
        priority_spans.push(Span::raw(" "));
    }

    let mut lines = vec![
        Line::from(""),
        text_row(
            "Title:       ",
            FormField::Title,
            input_text(&form.title, focus == FormField::Title),
        ),
        Line::from(""),
        text_row(
            "Description: ",
            FormField::Description,
            input_text(&form.description, focus == FormField::Description),
        ),
        Line::from(""),
        Line::from(priority_spans),
        Line::from(""),
        text_row(
            "Reminder:    ",
            FormField::Reminder,
            format!(
                "{} min",
                input_text(&form.reminder, focus == FormField::Reminder)
            ),
        ),
        Line::from(""),
        Line::from(vec![
            button("[ Save ]", focus == FormField::Save),
            Span::raw("  "),
            button("[ Cancel ]", focus == FormField::Cancel),
        ]),
        Line::from(""),
    ];

    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }

    let mut hints = Vec::new();
    hints.extend(key_hint("Tab", ": Next field  "));
    hints.extend(key_hint("Ctrl+S", ": Save  "));
    hints.extend(key_hint("Esc", ": Cancel"));
    lines.push(Line::from(hints));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(Span::styled(" New Task ", Style::default().fg(Color::Yellow)))
                .padding(Padding::horizontal(2)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
