//! Terminal host for `TodoListController`.
//!
//! Plays the part of the page: user actions become `UiEvent`s, the
//! controller's requests go out through the transport, alerts go to the
//! error stream and the list is redrawn after every action.

use std::io::{self, Write};

use todo_core::{TodoClient, TodoId, TodoListController, Transport, UiEvent};

use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reload from the server.
    List,
    Add(String),
    Check { id: TodoId, checked: bool },
    Remove(TodoId),
    /// Print the current list as HTML markup instead of text.
    Html,
}

pub struct App<T> {
    controller: TodoListController,
    transport: T,
    failures: usize,
}

impl<T: Transport> App<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            controller: TodoListController::new(client),
            transport,
            failures: 0,
        }
    }

    /// Alerts raised so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    #[cfg(test)]
    pub fn controller(&self) -> &TodoListController {
        &self.controller
    }

    pub fn run(&mut self, action: Action, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        let as_html = action == Action::Html;
        match action {
            Action::List => self.controller.load(),
            Action::Add(title) => {
                self.controller.dispatch(UiEvent::InputChanged(title));
                self.controller.dispatch(UiEvent::AddClicked);
            }
            Action::Check { id, checked } => self.controller.dispatch(UiEvent::Toggled { id, checked }),
            Action::Remove(id) => self.controller.dispatch(UiEvent::DeleteClicked { id }),
            Action::Html => {}
        }
        self.controller.run_until_idle(&mut self.transport);

        let notices = self.controller.take_notices();
        self.failures += notices.len();
        render::write_notices(err, &notices)?;

        let view = self.controller.view();
        if as_html {
            writeln!(out, "{}", view.to_html())
        } else {
            render::write_list(out, &view)
        }
    }
}
