//! Transient user-visible notices (toasts).

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    #[default]
    Info,
}

impl NoticeLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Error => "notice--error",
            Self::Info => "notice--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Ordered notice queue; oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice and return its id. Ids are never reused.
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, level, text: text.into() });
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, text)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.last()
    }
}
