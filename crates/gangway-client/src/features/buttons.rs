//! Generic button behaviors shared across pages.

use std::rc::Rc;

use gangway_core::init::Initializer;

use crate::page::{Page, UiCommand};

/// Buttons carrying a modal reference open that modal; the reference comes
/// from the rendered markup via the event value.
pub fn init_global_show_modal(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_global_show_modal", move || {
        page.delegate("click", "show-modal-button", |p, e| {
            let modal = e.value.clone().unwrap_or_else(|| e.target.clone());
            p.push_command(UiCommand::ShowModal(modal));
        });
        Ok(())
    })
}

/// Keyboard activation for elements styled as buttons.
pub fn init_click_on_enter(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_click_on_enter", move || {
        page.delegate("keydown", "clickable", |p, e| {
            if e.value.as_deref() == Some("Enter") {
                p.push_command(UiCommand::TriggerClick(e.target.clone()));
            }
        });
        Ok(())
    })
}

/// Destructive actions always confirm through a modal first.
pub fn init_global_delete_button(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_global_delete_button", move || {
        page.delegate("click", "delete-button", |p, e| {
            let modal = e.value.clone().unwrap_or_else(|| "confirm-delete".into());
            p.push_command(UiCommand::ShowModal(modal));
        });
        Ok(())
    })
}
