//! Delegated tooltips for any element carrying tooltip text.

use std::rc::Rc;

use gangway_core::init::Initializer;

use crate::page::{Page, UiCommand};

pub fn init_global_tooltips(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_global_tooltips", move || {
        page.delegate("mouseover", "tooltip-host", |p, e| {
            let text = e.value.clone().unwrap_or_default();
            p.push_command(UiCommand::ShowTooltip {
                target: e.target.clone(),
                text,
            });
        });
        page.delegate("mouseout", "tooltip-host", |p, e| {
            p.push_command(UiCommand::HideTooltip(e.target.clone()));
        });
        Ok(())
    })
}
