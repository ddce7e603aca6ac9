//! Copy-to-clipboard buttons. The text travels in the event value; writing
//! to the system clipboard is the host's job.

use std::rc::Rc;

use gangway_core::init::Initializer;

use crate::page::{Page, UiCommand};

pub fn init_copy_to_clipboard(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_copy_to_clipboard", move || {
        page.delegate("click", "copy-button", |p, e| {
            if let Some(text) = &e.value {
                p.push_command(UiCommand::CopyToClipboard(text.clone()));
            }
        });
        Ok(())
    })
}
