use crate::app::{App, Screen, StatusKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Tabs, Wrap},
    Frame,
};

mod add_task_dialog;
mod completed_view;
mod task_list;
pub(super) mod utils;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(0),    // body
            Constraint::Length(1), // status line
            Constraint::Length(1), // tab bar
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    match app.current_screen {
        Screen::Tasks => task_list::render_task_list(frame, app, root[1]),
        Screen::Completed => completed_view::render_completed_view(frame, app, root[1]),
    }

    render_status_line(frame, app, root[2]);
    render_tab_bar(frame, app, root[3]);

    if app.form.is_some() {
        add_task_dialog::render_add_task_dialog(frame, app);
    }
    if app.reminder_banner.is_some() {
        render_reminder_banner(frame, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let (title, subtitle) = match app.current_screen {
        Screen::Tasks => ("SmartTask", "Manage your tasks smartly"),
        Screen::Completed => ("Completed Tasks", "Tasks you have successfully finished"),
    };

    // Padding row, title row, subtitle row
    let title_row = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let subtitle_row = Rect {
        y: title_row.y + 1,
        ..title_row
    };
    let throbber_area = Rect {
        width: 1,
        ..title_row
    };
    let label_area = Rect {
        x: title_row.x + 2,
        width: title_row.width.saturating_sub(2),
        ..title_row
    };

    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        label_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
        subtitle_row,
    );
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let area = Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(4),
        ..area
    };

    let line = match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => Color::Green,
                StatusKind::Error => Color::Red,
            };
            Line::from(Span::styled(status.text.as_str(), Style::default().fg(color)))
        }
        None => {
            let mut spans = Vec::new();
            if app.current_screen == Screen::Tasks {
                spans.extend(widgets::key_hint("a", ": Add  "));
                spans.extend(widgets::key_hint("Enter/d", ": Complete  "));
            }
            spans.extend(widgets::key_hint("j/k", ": Move  "));
            spans.extend(widgets::key_hint("r", ": Refresh  "));
            spans.extend(widgets::key_hint("Tab", ": Switch  "));
            spans.extend(widgets::key_hint("q", ": Quit"));
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| format!("{} {}", i + 1, screen.title()));

    let tabs = Tabs::new(titles)
        .select(app.current_screen.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}

fn render_reminder_banner(frame: &mut Frame, app: &App) {
    let reminder = match &app.reminder_banner {
        Some(r) => r,
        None => return,
    };

    let area = utils::centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            reminder.body.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(Span::styled(
                    format!(" {} ", reminder.title),
                    Style::default().fg(Color::Magenta),
                ))
                .padding(Padding::horizontal(2)),
        );

    frame.render_widget(paragraph, area);
}
