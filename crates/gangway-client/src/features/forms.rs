//! Form behaviors: quick submit from textareas and the dirty-form leave
//! confirmation.

use std::cell::Cell;
use std::rc::Rc;

use gangway_core::init::Initializer;

use crate::page::{Page, UiCommand};

pub fn init_quick_submit(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_quick_submit", move || {
        page.delegate("keydown", "form-textarea", |p, e| {
            if e.value.as_deref() == Some("Ctrl+Enter") {
                p.push_command(UiCommand::SubmitForm(e.target.clone()));
            }
        });
        Ok(())
    })
}

/// Tracks edits to any tracked form and asks the host to confirm before a
/// navigation would discard them. The flag is per page load, not per form.
pub fn init_form_dirty_confirm(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_form_dirty_confirm", move || {
        let dirty = Rc::new(Cell::new(false));

        let flag = dirty.clone();
        page.delegate("change", "tracked-form", move |_, _| {
            flag.set(true);
        });

        page.delegate("navigate", "window", move |p, e| {
            if dirty.get() {
                p.push_command(UiCommand::ConfirmLeave(e.target.clone()));
            }
        });
        Ok(())
    })
}
