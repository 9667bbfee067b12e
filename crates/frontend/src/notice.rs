use std::fmt;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A blocking notification shown to the operator after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn success(title: &str, text: &str) -> Self {
        Self::build(NoticeLevel::Success, title, text)
    }

    pub fn warning(title: &str, text: &str) -> Self {
        Self::build(NoticeLevel::Warning, title, text)
    }

    /// Error notices also go to the log with their cause.
    pub fn error(text: &str, cause: &dyn fmt::Display) -> Self {
        error!("{}: {}", text, cause);
        Self::build(NoticeLevel::Error, "Error", text)
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }

    fn build(level: NoticeLevel, title: &str, text: &str) -> Self {
        Self {
            level,
            title: title.to_string(),
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.level {
            NoticeLevel::Success => "✅",
            NoticeLevel::Warning => "⚠️",
            NoticeLevel::Error => "❌",
        };
        write!(f, "{} {}: {}", marker, self.title, self.text)
    }
}
