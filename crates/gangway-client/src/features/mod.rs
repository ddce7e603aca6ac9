//! Feature modules.
//!
//! Each module exports one or more factories returning a named
//! [`Initializer`](gangway_core::init::Initializer). A factory closes over
//! the shared page handle; the initializer it returns is zero-argument and
//! runs exactly once at boot. Initializers must not depend on whether
//! unrelated siblings have run; the sequence order in
//! [`crate::boot::standard_initializers`] is a choice, not a contract.

pub mod buttons;
pub mod clipboard;
pub mod common_page;
pub mod forms;
pub mod notifications;
pub mod tablesort;
pub mod toolkit;
pub mod tooltips;
pub mod user_auth;
