//! To-do items and the ordered list that owns them.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// `id` is the creation time in Unix milliseconds. Two items created within
/// the same millisecond share an id, so nothing keys on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub text: String,
}

impl TodoItem {
    /// Create an item stamped with the current time
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            text: text.into(),
        }
    }
}

/// Ordered, append-only sequence of to-do items. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item built from `text` and return it
    pub fn add(&mut self, text: impl Into<String>) -> &TodoItem {
        self.push(TodoItem::new(text));
        &self.items[self.items.len() - 1]
    }

    /// Append an already-built item
    pub fn push(&mut self, item: TodoItem) {
        log::debug!("Appending to-do {} ({} chars)", item.id, item.text.chars().count());
        self.items.push(item);
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
