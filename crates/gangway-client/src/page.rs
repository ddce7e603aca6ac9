//! The client-side view of the rendered page.
//!
//! The server renders the markup; this runtime only wires behavior onto it.
//! Elements are addressed by *role* (a stable `data-role` style marker in
//! the rendered markup) rather than by CSS selector, so the host surface can
//! map events however it likes. Handlers never touch the real document;
//! they emit [`UiCommand`]s for the host to apply.
//!
//! Single-threaded, matching the event-loop host: interior mutability is
//! `RefCell`, and `Page` is neither `Send` nor `Sync`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gangway_core::location::Location;

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A UI event forwarded by the host surface.
#[derive(Debug, Clone)]
pub struct Event {
    /// Event kind ("click", "keydown", "change", ...).
    pub kind: String,
    /// Role marker of the element the event landed on.
    pub role: String,
    /// Identifier of the concrete element instance.
    pub target: String,
    /// Kind-specific payload: the pressed key, the copied text, a column
    /// name, an OAuth provider slug.
    pub value: Option<String>,
}

impl Event {
    pub fn new(kind: impl Into<String>, role: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            role: role.into(),
            target: target.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

// ---------------------------------------------------------------------------
// UiCommand
// ---------------------------------------------------------------------------

/// An instruction for the host surface to apply to the real document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    ToggleDropdown(String),
    ShowModal(String),
    TriggerClick(String),
    SubmitForm(String),
    ConfirmLeave(String),
    CopyToClipboard(String),
    ShowTooltip { target: String, text: String },
    HideTooltip(String),
    SortTable {
        table: String,
        column: String,
        ascending: bool,
    },
    MarkNotificationRead(String),
    BeginOauthSignIn(String),
    ReloadPage,
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

type Handler = Box<dyn Fn(&Page, &Event)>;

struct Binding {
    kind: String,
    role: String,
    handler: Handler,
}

pub struct Page {
    location: Location,
    bindings: RefCell<Vec<Rc<Binding>>>,
    commands: RefCell<Vec<UiCommand>>,
    props: RefCell<HashMap<String, String>>,
}

impl Page {
    pub fn new(location: Location) -> Rc<Self> {
        Rc::new(Self {
            location,
            bindings: RefCell::new(Vec::new()),
            commands: RefCell::new(Vec::new()),
            props: RefCell::new(HashMap::new()),
        })
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Register a delegated handler for every element with `role`.
    pub fn delegate(
        &self,
        kind: impl Into<String>,
        role: impl Into<String>,
        handler: impl Fn(&Page, &Event) + 'static,
    ) {
        self.bindings.borrow_mut().push(Rc::new(Binding {
            kind: kind.into(),
            role: role.into(),
            handler: Box::new(handler),
        }));
    }

    /// Route an event to every binding matching its kind and role, in
    /// registration order. Matching bindings are collected before any
    /// handler runs, so handlers may register further bindings.
    pub fn dispatch(&self, event: &Event) {
        let matching: Vec<Rc<Binding>> = self
            .bindings
            .borrow()
            .iter()
            .filter(|b| b.kind == event.kind && b.role == event.role)
            .cloned()
            .collect();
        for binding in matching {
            (binding.handler)(self, event);
        }
    }

    pub fn push_command(&self, command: UiCommand) {
        self.commands.borrow_mut().push(command);
    }

    /// Drain the queued commands, oldest first.
    pub fn take_commands(&self) -> Vec<UiCommand> {
        self.commands.take()
    }

    pub fn set_prop(&self, key: impl Into<String>, value: impl Into<String>) {
        self.props.borrow_mut().insert(key.into(), value.into());
    }

    pub fn prop(&self, key: &str) -> Option<String> {
        self.props.borrow().get(key).cloned()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.borrow().len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
