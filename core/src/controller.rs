//! The to-do list controller: list state plus the four server operations.
//!
//! # Design
//! The controller owns the store and the new-todo input text, and never does
//! I/O. Each operation queues a pending request; the host pulls the next one
//! with `poll_request`, executes it, and hands the outcome back through
//! `complete`. `run_until_idle` does this loop against a `Transport`.
//!
//! At most one request is in flight and the queue is FIFO, so operations
//! take effect in the order the user issued them. For a single todo the last
//! issued `set_completed` wins, and a `load` never interleaves with an `add`
//! or `remove`. The corrective reload after a failed `set_completed` is the
//! one exception: it jumps to the front of the queue.
//!
//! Every failure is caught here and surfaced as `Notice::RequestFailed` with
//! a fixed per-operation message; the underlying `ApiError` only reaches the
//! diagnostic log.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, error, warn};

use crate::client::TodoClient;
use crate::error::{ApiError, ControllerError};
use crate::http::{HttpRequest, HttpResponse};
use crate::store::TodoStore;
use crate::transport::Transport;
use crate::types::{CreateTodo, TodoId};
use crate::view::{ListView, UiEvent};

/// Identifies one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    SetCompleted,
    Remove,
}

impl Operation {
    /// The alert text shown when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load todos. Please try again later.",
            Operation::Add => "Failed to add todo. Please try again.",
            Operation::SetCompleted => "Failed to update todo. Please try again.",
            Operation::Remove => "Failed to delete todo. Please try again.",
        }
    }
}

/// User-visible outcome the host must surface, e.g. as a modal alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    RequestFailed {
        operation: Operation,
        message: &'static str,
    },
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::RequestFailed { message, .. } => message,
        }
    }
}

/// A request the host should execute, tagged with its ticket.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub operation: Operation,
    pub request: HttpRequest,
}

#[derive(Debug, Clone)]
enum Pending {
    Load,
    Add { title: String },
    SetCompleted { id: TodoId, completed: bool },
    Remove { id: TodoId },
}

impl Pending {
    fn operation(&self) -> Operation {
        match self {
            Pending::Load => Operation::Load,
            Pending::Add { .. } => Operation::Add,
            Pending::SetCompleted { .. } => Operation::SetCompleted,
            Pending::Remove { .. } => Operation::Remove,
        }
    }
}

#[derive(Debug)]
pub struct TodoListController {
    client: TodoClient,
    store: TodoStore,
    input: String,
    queue: VecDeque<Pending>,
    in_flight: Option<(Ticket, Pending)>,
    next_ticket: u64,
    notices: Vec<Notice>,
}

impl TodoListController {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            store: TodoStore::new(),
            input: String::new(),
            queue: VecDeque::new(),
            in_flight: None,
            next_ticket: 1,
            notices: Vec::new(),
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn view(&self) -> ListView {
        ListView::project(&self.store)
    }

    /// Current contents of the new-todo input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Queue a full reload of the collection.
    pub fn load(&mut self) {
        self.queue.push_back(Pending::Load);
    }

    /// Queue creation of a todo. Returns `false` without queuing anything when
    /// the trimmed title is empty.
    pub fn add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.queue.push_back(Pending::Add {
            title: title.to_string(),
        });
        true
    }

    /// `add` with the current input text, as the add button and Enter do.
    pub fn submit_input(&mut self) -> bool {
        let title = self.input.clone();
        self.add(&title)
    }

    /// Flip the flag locally right away, then queue the PATCH.
    pub fn set_completed(&mut self, id: TodoId, completed: bool) {
        self.store.set_completed(&id, completed);
        self.queue.push_back(Pending::SetCompleted { id, completed });
    }

    pub fn remove(&mut self, id: TodoId) {
        self.queue.push_back(Pending::Remove { id });
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::InputChanged(text) => self.set_input(text),
            UiEvent::AddClicked | UiEvent::EnterPressed => {
                self.submit_input();
            }
            UiEvent::Toggled { id, checked } => self.set_completed(id, checked),
            UiEvent::DeleteClicked { id } => self.remove(id),
        }
    }

    /// True when nothing is queued or in flight.
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_none() && self.queue.is_empty()
    }

    /// Number of requests waiting behind the one in flight.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Next request to execute, or `None` if one is already in flight or the
    /// queue is empty.
    pub fn poll_request(&mut self) -> Option<Dispatch> {
        while self.in_flight.is_none() {
            let pending = self.queue.pop_front()?;
            match self.build(&pending) {
                Ok(request) => {
                    let ticket = Ticket(self.next_ticket);
                    self.next_ticket += 1;
                    let operation = pending.operation();
                    debug!(%ticket, ?operation, method = request.method.as_str(), path = %request.path, "dispatching");
                    self.in_flight = Some((ticket, pending));
                    return Some(Dispatch {
                        ticket,
                        operation,
                        request,
                    });
                }
                Err(err) => self.fail(pending, err),
            }
        }
        None
    }

    /// Apply the outcome of the in-flight request identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<(), ControllerError> {
        let pending = match self.in_flight.take() {
            Some((current, pending)) if current == ticket => pending,
            other => {
                self.in_flight = other;
                return Err(ControllerError::UnexpectedCompletion(ticket));
            }
        };
        debug!(%ticket, operation = ?pending.operation(), "completed");
        if let Err(err) = outcome.and_then(|response| self.apply(&pending, response)) {
            self.fail(pending, err);
        }
        Ok(())
    }

    /// Drain the alerts raised since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Execute queued requests one at a time until the queue is empty.
    pub fn run_until_idle<T: Transport + ?Sized>(&mut self, transport: &mut T) {
        while let Some(dispatch) = self.poll_request() {
            let outcome = transport.execute(&dispatch.request);
            if let Err(err) = self.complete(dispatch.ticket, outcome) {
                error!(%err, "lost track of in-flight request");
                break;
            }
        }
    }

    fn build(&self, pending: &Pending) -> Result<HttpRequest, ApiError> {
        match pending {
            Pending::Load => Ok(self.client.build_list_todos()),
            Pending::Add { title } => self.client.build_create_todo(&CreateTodo {
                title: title.clone(),
            }),
            Pending::SetCompleted { id, completed } => self.client.build_set_completed(id, *completed),
            Pending::Remove { id } => Ok(self.client.build_delete_todo(id)),
        }
    }

    fn apply(&mut self, pending: &Pending, response: HttpResponse) -> Result<(), ApiError> {
        match pending {
            Pending::Load => {
                let todos = self.client.parse_list_todos(response)?;
                self.store.replace_all(todos);
                self.reapply_queued_toggles();
            }
            Pending::Add { .. } => {
                let todo = self.client.parse_create_todo(response)?;
                self.store.push(todo);
                self.input.clear();
            }
            Pending::SetCompleted { .. } => self.client.parse_set_completed(response)?,
            Pending::Remove { id } => {
                self.client.parse_delete_todo(response)?;
                self.store.remove(id);
            }
        }
        Ok(())
    }

    /// A reload must not undo toggles the user issued whose PATCH has not
    /// gone out yet. Applied in queue order so the last one wins.
    fn reapply_queued_toggles(&mut self) {
        for pending in &self.queue {
            if let Pending::SetCompleted { id, completed } = pending {
                self.store.set_completed(id, *completed);
            }
        }
    }

    fn fail(&mut self, pending: Pending, err: ApiError) {
        let operation = pending.operation();
        warn!(?operation, error = %err, "request failed");
        self.notices.push(Notice::RequestFailed {
            operation,
            message: operation.failure_message(),
        });
        if let Pending::SetCompleted { .. } = pending {
            self.queue.push_front(Pending::Load);
        }
    }
}
