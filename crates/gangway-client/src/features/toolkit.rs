//! Eager setup that must precede everything else: widget toolkit defaults
//! and document text direction. These run before the content-loaded gate,
//! outside the timed boot pass.

use std::rc::Rc;

use gangway_core::init::Initializer;

use crate::page::Page;

pub fn init_widget_defaults(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_widget_defaults", move || {
        page.set_prop("widget.dropdown.delay_ms", "300");
        page.set_prop("widget.modal.dim_background", "true");
        Ok(())
    })
}

pub fn init_text_direction(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_text_direction", move || {
        page.set_prop("document.dir", "auto");
        Ok(())
    })
}
