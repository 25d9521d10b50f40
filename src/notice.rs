//! Transient Notices
//!
//! State machine behind the auto-dismissing message banner. Each shown
//! notice gets a generation number; a dismiss timer may only clear the
//! notice whose generation it was issued for, so a stale timer never
//! hides a newer message.

/// How long a notice stays visible, in milliseconds
pub const NOTICE_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One visible banner message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    generation: u32,
}

/// Current notice plus the generation counter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeState {
    current: Option<Notice>,
    generation: u32,
}

impl NoticeState {
    /// Show a notice; returns the generation its dismiss timer must present
    pub fn show(&mut self, text: impl Into<String>, level: NoticeLevel) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(Notice {
            text: text.into(),
            level,
            generation: self.generation,
        });
        self.generation
    }

    /// Clear only when `generation` still matches the visible notice
    pub fn expire(&mut self, generation: u32) {
        if self.current.as_ref().map(|n| n.generation) == Some(generation) {
            self.current = None;
        }
    }

    /// Unconditional clear (used right before a submit)
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire_clears() {
        let mut state = NoticeState::default();
        let generation = state.show("報名成功！", NoticeLevel::Info);
        assert_eq!(state.current().unwrap().text, "報名成功！");

        state.expire(generation);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_stale_timer_keeps_newer_notice() {
        let mut state = NoticeState::default();
        let first = state.show("first", NoticeLevel::Error);
        let _second = state.show("second", NoticeLevel::Info);

        // The first notice's timer fires after the second was shown
        state.expire(first);
        assert_eq!(state.current().unwrap().text, "second");
    }

    #[test]
    fn test_clear_drops_any_notice() {
        let mut state = NoticeState::default();
        state.show("x", NoticeLevel::Error);
        state.clear();
        assert!(state.current().is_none());

        // Expiring after a clear is a no-op
        state.expire(1);
        assert!(state.current().is_none());
    }
}
