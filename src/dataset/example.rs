use crate::dataset::message::Message;
use crate::dataset::role::Role;
use serde::Serialize;

/// One training conversation: a user prompt followed by the assistant's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    messages: [Message; 2],
}

impl Example {
    pub fn new(prompt: &str, response: &str) -> Self {
        Self {
            messages: [
                Message::new(Role::User, prompt),
                Message::new(Role::Assistant, response),
            ],
        }
    }

    pub fn prompt(&self) -> &str {
        self.messages[0].content()
    }
}
