//! I/O-free client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of that sits
//! `TodoListController`, which keeps an ordered store of todos in sync with
//! the server and exposes it to the host as a pure `ListView`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - The controller queues requests and lets the host execute them one at a
//!   time through a `Transport`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use controller::{Dispatch, Notice, Operation, Ticket, TodoListController};
pub use error::{ApiError, ControllerError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::TodoStore;
pub use transport::Transport;
pub use types::{CreateTodo, SetCompleted, Todo, TodoId};
pub use view::{escape_html, format_date, ItemView, ListView, UiEvent};
