//! # SMS Dashboard Web
//!
//! Browser front end for the campaign dashboard. Requests are handled as
//! state transition, then data reload, then a pure render of the session's
//! view:
//!
//! - [`session`]: per-session language and sector, keyed by cookie
//! - [`view`]: the page description for one session
//! - [`html`]: HTML for a page
//! - [`server`]: `axum` routes

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod html;
pub mod server;
pub mod session;
pub mod view;

pub use server::{create_router, serve, AppState};
pub use session::{Event, SessionState, SessionStore};
pub use view::{render, Page, ViewContext};
