//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `list`, one module per list screen) so
//! pages depend on small focused models. None of these types touch the DOM;
//! pages wrap them in `RwSignal`s.

pub mod auth;
pub mod controls;
pub mod courses;
pub mod list;
pub mod settings;
pub mod users;
