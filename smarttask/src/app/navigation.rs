use super::*;

impl App {
    /// Switch to a screen. Returns false if it was already showing.
    pub fn navigate_to(&mut self, screen: Screen) -> bool {
        if self.current_screen == screen {
            return false;
        }
        self.current_screen = screen;
        self.clear_status();
        true
    }

    pub fn next_screen(&mut self) -> Screen {
        let next = Screen::ALL[(self.current_screen.index() + 1) % Screen::ALL.len()];
        self.navigate_to(next);
        next
    }

    pub fn previous_screen(&mut self) -> Screen {
        let len = Screen::ALL.len();
        let previous = Screen::ALL[(self.current_screen.index() + len - 1) % len];
        self.navigate_to(previous);
        previous
    }

    fn selection_mut(&mut self, screen: Screen) -> &mut usize {
        match screen {
            Screen::Tasks => &mut self.selected_task,
            Screen::Completed => &mut self.selected_completed,
        }
    }

    /// Move selection down on the current screen (vim-style j or down)
    pub fn select_next(&mut self) {
        let screen = self.current_screen;
        let len = self.snapshot(screen).tasks().len();
        let selected = self.selection_mut(screen);
        if len > 0 && *selected < len - 1 {
            *selected += 1;
        }
    }

    /// Move selection up on the current screen (vim-style k or up)
    pub fn select_previous(&mut self) {
        let selected = self.selection_mut(self.current_screen);
        *selected = selected.saturating_sub(1);
    }

    pub(super) fn clamp_selection(&mut self, screen: Screen) {
        let len = self.snapshot(screen).tasks().len();
        let selected = self.selection_mut(screen);
        *selected = (*selected).min(len.saturating_sub(1));
    }
}
