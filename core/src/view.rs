//! Pure view projection of the todo store.
//!
//! Nothing here holds state: `ItemView::render` and `ListView::project` turn
//! store contents into values the host can draw, either as HTML markup or as
//! its own widgets. User interaction comes back as `UiEvent` values that carry
//! the item's id, so a control always resolves to the right todo no matter how
//! the list changed since it was drawn.

use chrono::{DateTime, Utc};

use crate::store::TodoStore;
use crate::types::{Todo, TodoId};

/// Element id of the list container in the page markup.
pub const LIST_ELEMENT_ID: &str = "todo-list";

/// Something the user did on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The new-todo text field changed.
    InputChanged(String),
    AddClicked,
    EnterPressed,
    Toggled { id: TodoId, checked: bool },
    DeleteClicked { id: TodoId },
}

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Short US-style date, e.g. `Jan 1, 2024`. Always in UTC.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: TodoId,
    pub element_id: String,
    pub title: String,
    pub completed: bool,
    pub date: String,
}

impl ItemView {
    pub fn render(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            element_id: format!("todo-{}", todo.id),
            title: todo.title.clone(),
            completed: todo.completed,
            date: format_date(&todo.created_at),
        }
    }

    pub fn class_name(&self) -> &'static str {
        if self.completed {
            "todo-item completed"
        } else {
            "todo-item"
        }
    }

    /// Event emitted when this item's checkbox changes.
    pub fn toggle(&self, checked: bool) -> UiEvent {
        UiEvent::Toggled {
            id: self.id.clone(),
            checked,
        }
    }

    /// Event emitted when this item's delete button is clicked.
    pub fn delete(&self) -> UiEvent {
        UiEvent::DeleteClicked { id: self.id.clone() }
    }

    pub fn to_html(&self) -> String {
        let id = escape_html(&self.id.to_string());
        let checked = if self.completed { " checked" } else { "" };
        format!(
            concat!(
                r#"<li id="{element_id}" class="{class}" data-id="{id}">"#,
                r#"<input type="checkbox" class="todo-checkbox"{checked}>"#,
                r#"<span class="todo-text">{title}</span>"#,
                r#"<span class="todo-date">{date}</span>"#,
                r#"<button class="todo-delete">Delete</button>"#,
                "</li>",
            ),
            element_id = escape_html(&self.element_id),
            class = self.class_name(),
            id = id,
            checked = checked,
            title = escape_html(&self.title),
            date = escape_html(&self.date),
        )
    }
}

/// The whole list, in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub items: Vec<ItemView>,
}

impl ListView {
    pub fn project(store: &TodoStore) -> Self {
        Self {
            items: store.iter().map(ItemView::render).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &TodoId) -> Option<&ItemView> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn to_html(&self) -> String {
        let mut html = format!(r#"<ul id="{LIST_ELEMENT_ID}">"#);
        for item in &self.items {
            html.push_str("\n  ");
            html.push_str(&item.to_html());
        }
        if !self.items.is_empty() {
            html.push('\n');
        }
        html.push_str("</ul>");
        html
    }
}
