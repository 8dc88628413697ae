//! Ordered in-memory mapping from id to `Todo`.
//!
//! The store is the client's source of truth for what the list shows; views
//! are projections of it. Order is insertion order: server order after a
//! full load, appended at the end for newly created todos.

use std::collections::HashMap;

use crate::types::{Todo, TodoId};

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    order: Vec<TodoId>,
    items: HashMap<TodoId, Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection, keeping the given order. A repeated id
    /// keeps its first position and its last value.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.order.clear();
        self.items.clear();
        for todo in todos {
            self.push(todo);
        }
    }

    /// Append `todo`, or overwrite it in place if the id is already known.
    pub fn push(&mut self, todo: Todo) {
        if !self.items.contains_key(&todo.id) {
            self.order.push(todo.id.clone());
        }
        self.items.insert(todo.id.clone(), todo);
    }

    /// Returns `false` if the id is unknown.
    pub fn set_completed(&mut self, id: &TodoId, completed: bool) -> bool {
        match self.items.get_mut(id) {
            Some(todo) => {
                todo.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Idempotent: removing an absent id is a no-op returning `None`.
    pub fn remove(&mut self, id: &TodoId) -> Option<Todo> {
        let todo = self.items.remove(id)?;
        self.order.retain(|known| known != id);
        Some(todo)
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> + '_ {
        self.order.iter().filter_map(|id| self.items.get(id))
    }
}
