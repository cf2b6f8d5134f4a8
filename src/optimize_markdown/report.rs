//! Messages the rewriter emits while it works. The library never prints;
//! whoever drives it supplies a [`Reporter`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Receives messages as soon as they happen, so progress made before a
/// failure is still visible.
pub trait Reporter {
    fn report(&mut self, message: CmdMessage);
}

impl Reporter for Vec<CmdMessage> {
    fn report(&mut self, message: CmdMessage) {
        self.push(message);
    }
}
