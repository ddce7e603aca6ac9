//! Client-side bootstrap for the server-rendered web UI.
//!
//! The host surface (a webview shell in production, the `gangway` binary for
//! headless runs) constructs a [`page::Page`] from the current location,
//! calls [`boot::boot`], and signals the content-loaded gate when the
//! document is ready. Feature handlers react to forwarded events by pushing
//! [`page::UiCommand`]s, which the host drains and applies to the real
//! document.

pub mod boot;
pub mod features;
pub mod page;
