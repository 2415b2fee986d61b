use crate::app::TextInput;
use crate::types::Priority;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

/// Filled badge with the priority name, e.g. ` High `.
pub fn priority_badge(priority: Priority) -> Span<'static> {
    Span::styled(
        format!(" {} ", priority),
        Style::default()
            .fg(Color::Black)
            .bg(priority_color(priority))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn reminder_label(minutes: u32) -> String {
    format!("⏰ {} min reminder", minutes)
}

/// `key: label` pair for the hint lines.
pub fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::styled(label, Style::default().fg(Color::DarkGray)),
    ]
}

/// Input text with a block cursor when focused.
pub fn input_text(input: &TextInput, focused: bool) -> String {
    if focused {
        let (before, after) = input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        input.value.clone()
    }
}
