use crate::model::activity::Activity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Per-session state: the message history and the single current-activity
/// slot. Created on session start, passed to handlers, dropped on exit.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    current_activity: Option<Activity>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: content.into(),
        });
    }

    pub fn push_bot(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: Role::Bot,
            content: content.into(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Replaces the slot wholesale; the previous activity is discarded.
    pub fn set_activity(&mut self, activity: Activity) {
        self.current_activity = Some(activity);
    }

    pub fn current_activity(&self) -> Option<&Activity> {
        self.current_activity.as_ref()
    }
}
