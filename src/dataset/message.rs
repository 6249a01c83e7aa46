use crate::dataset::role::Role;
use serde::Serialize;

// Field order is the key order on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
