use crate::model::{Client, Item, ItemKind};

pub mod clients;
pub mod items;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the UI: entities to show plus messages.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub items: Vec<Item>,
    pub clients: Vec<Client>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_clients(mut self, clients: Vec<Client>) -> Self {
        self.clients = clients;
        self
    }
}

/// New field values for an existing item.
///
/// `kind` is what the caller believes the stored item is; it is checked
/// against the stored variant, never used to convert it.
#[derive(Debug, Clone)]
pub struct ItemUpdate {
    pub kind: ItemKind,
    pub title: String,
    pub pages: i32,
}

impl ItemUpdate {
    pub fn new(kind: ItemKind, title: String, pages: i32) -> Self {
        Self { kind, title, pages }
    }
}

#[derive(Debug, Clone)]
pub struct ClientUpdate {
    pub name: String,
    pub email: String,
}

impl ClientUpdate {
    pub fn new(name: String, email: String) -> Self {
        Self { name, email }
    }
}
