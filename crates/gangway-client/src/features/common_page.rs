//! Page chrome present on every rendered page: dropdown menus, the
//! collapsible navbar, and the footer language menu.

use std::rc::Rc;

use gangway_core::init::Initializer;

use crate::page::{Page, UiCommand};

pub fn init_global_dropdown(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_global_dropdown", move || {
        page.delegate("click", "dropdown-trigger", |p, e| {
            p.push_command(UiCommand::ToggleDropdown(e.target.clone()));
        });
        Ok(())
    })
}

pub fn init_head_navbar_toggle(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_head_navbar_toggle", move || {
        page.delegate("click", "navbar-toggle", |p, _| {
            let expanded = p.prop("navbar.expanded").as_deref() == Some("true");
            p.set_prop("navbar.expanded", if expanded { "false" } else { "true" });
        });
        Ok(())
    })
}

/// Switching language is server-side state; the client records the choice
/// and asks the host to reload the page.
pub fn init_foot_language_menu(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_foot_language_menu", move || {
        page.delegate("click", "language-option", |p, e| {
            if let Some(lang) = &e.value {
                p.set_prop("ui.language", lang.clone());
                p.push_command(UiCommand::ReloadPage);
            }
        });
        Ok(())
    })
}
