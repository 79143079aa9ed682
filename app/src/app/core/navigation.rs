use super::App;
use crate::app::types::Focus;
use crate::generation::catalog::QUICK_PROMPTS;

impl App {
    /// Move focus forward: prompt -> quick prompts -> history -> prompt.
    /// History is skipped while it is empty.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Prompt => Focus::QuickPrompts,
            Focus::QuickPrompts if self.session.history().is_empty() => Focus::Prompt,
            Focus::QuickPrompts => Focus::History,
            Focus::History => Focus::Prompt,
        };
        self.clamp_selection();
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Prompt if self.session.history().is_empty() => Focus::QuickPrompts,
            Focus::Prompt => Focus::History,
            Focus::QuickPrompts => Focus::Prompt,
            Focus::History => Focus::QuickPrompts,
        };
        self.clamp_selection();
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Prompt => 0,
            Focus::QuickPrompts => QUICK_PROMPTS.len(),
            Focus::History => self.session.history().len(),
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.focus {
            Focus::Prompt => None,
            Focus::QuickPrompts => Some(&mut self.quick_selected),
            Focus::History => Some(&mut self.history_selected),
        }
    }

    /// Move the cursor of the focused list, wrapping at both ends.
    pub fn select_next(&mut self) {
        let len = self.focused_len();
        if let Some(cur) = self.cursor_mut() {
            if len > 0 {
                *cur = (*cur + 1) % len;
            }
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.focused_len();
        if let Some(cur) = self.cursor_mut() {
            if len > 0 {
                *cur = if *cur == 0 { len - 1 } else { *cur - 1 };
            }
        }
    }

    /// Keep list cursors inside their lists, and never leave focus on an
    /// empty history.
    pub(crate) fn clamp_selection(&mut self) {
        let hist_len = self.session.history().len();
        self.history_selected = self.history_selected.min(hist_len.saturating_sub(1));
        self.quick_selected = self.quick_selected.min(QUICK_PROMPTS.len() - 1);
        if self.focus == Focus::History && hist_len == 0 {
            self.focus = Focus::Prompt;
        }
    }
}
