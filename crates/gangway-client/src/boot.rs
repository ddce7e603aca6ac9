//! Explicit composition of the boot sequence.
//!
//! Every initializer the client runs is listed here, in one place, by
//! calling the feature factories directly. There is no registration through
//! module side effects, so the sequence is statically checkable.

use std::rc::Rc;

use gangway_core::gate::ReadyGate;
use gangway_core::init::Initializer;
use gangway_core::orchestrator;

use crate::features::{
    buttons, clipboard, common_page, forms, notifications, tablesort, toolkit, tooltips, user_auth,
};
use crate::page::Page;

/// Initializers that run immediately, before the content-loaded gate.
pub fn eager_initializers(page: &Rc<Page>) -> Vec<Initializer> {
    vec![
        toolkit::init_widget_defaults(page),
        toolkit::init_text_direction(page),
    ]
}

/// The ordered main sequence, run once the gate fires. Order groups related
/// features for readability; initializers must not rely on it.
pub fn standard_initializers(page: &Rc<Page>) -> Vec<Initializer> {
    vec![
        common_page::init_global_dropdown(page),
        common_page::init_head_navbar_toggle(page),
        common_page::init_foot_language_menu(page),
        buttons::init_global_show_modal(page),
        buttons::init_click_on_enter(page),
        buttons::init_global_delete_button(page),
        forms::init_quick_submit(page),
        forms::init_form_dirty_confirm(page),
        clipboard::init_copy_to_clipboard(page),
        tooltips::init_global_tooltips(page),
        tablesort::init_table_sort(page),
        notifications::init_notification_count(page),
        user_auth::init_oauth_sign_in(page),
    ]
}

/// Wire the full client boot: eager initializers now, the main sequence
/// once `gate` fires.
///
/// A failure in the deferred pass has no caller to propagate to (the host
/// owns the readiness event), so it is logged and the page is left with
/// whatever was wired before the failure.
pub fn boot(page: Rc<Page>, gate: &ReadyGate) -> gangway_core::Result<()> {
    for init in eager_initializers(&page) {
        init.run()?;
    }

    gate.on_ready(move || {
        let sequence = standard_initializers(&page);
        if let Err(e) = orchestrator::run_all(page.location(), sequence) {
            tracing::error!("client boot aborted: {e}");
        }
    });

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use gangway_core::location::Location;

    #[test]
    fn nothing_from_the_main_sequence_runs_before_the_gate() {
        let page = Page::new(Location::default());
        let gate = ReadyGate::new();

        boot(page.clone(), &gate).unwrap();

        // Eager props are set, but no delegated handler exists yet.
        assert_eq!(page.prop("document.dir").as_deref(), Some("auto"));
        assert_eq!(page.binding_count(), 0);
    }

    #[test]
    fn gate_fire_wires_the_whole_sequence_once() {
        let page = Page::new(Location::default());
        let gate = ReadyGate::new();

        boot(page.clone(), &gate).unwrap();
        gate.signal_ready();
        let wired = page.binding_count();
        assert!(wired > 0);

        // A spurious second signal must not re-wire anything.
        gate.signal_ready();
        assert_eq!(page.binding_count(), wired);
    }

    #[test]
    fn boot_on_an_already_ready_gate_wires_synchronously() {
        let page = Page::new(Location::default());
        let gate = ReadyGate::new();
        gate.signal_ready();

        boot(page.clone(), &gate).unwrap();

        assert!(page.binding_count() > 0);
    }

    #[test]
    fn standard_sequence_has_unique_names() {
        let page = Page::new(Location::default());
        let sequence = standard_initializers(&page);
        let mut names: Vec<&str> = sequence.iter().map(|i| i.name()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
