//! Notification indicator. The server renders the unread count into the
//! page props; marking one read updates the badge locally and tells the
//! host to sync the server.

use std::rc::Rc;

use gangway_core::init::Initializer;

use crate::page::{Page, UiCommand};

const UNREAD_PROP: &str = "notifications.unread";

pub fn init_notification_count(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_notification_count", move || {
        page.delegate("click", "notification-read-button", |p, e| {
            let unread: u64 = p
                .prop(UNREAD_PROP)
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            p.set_prop(UNREAD_PROP, unread.saturating_sub(1).to_string());
            p.push_command(UiCommand::MarkNotificationRead(e.target.clone()));
        });
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Event;
    use gangway_core::location::Location;

    #[test]
    fn marking_read_decrements_the_badge() {
        let page = Page::new(Location::default());
        page.set_prop(UNREAD_PROP, "2");
        init_notification_count(&page).run().unwrap();

        page.dispatch(&Event::new("click", "notification-read-button", "notif-7"));

        assert_eq!(page.prop(UNREAD_PROP).as_deref(), Some("1"));
        assert_eq!(
            page.take_commands(),
            vec![UiCommand::MarkNotificationRead("notif-7".into())]
        );
    }

    #[test]
    fn badge_never_goes_negative() {
        let page = Page::new(Location::default());
        init_notification_count(&page).run().unwrap();

        page.dispatch(&Event::new("click", "notification-read-button", "notif-1"));

        assert_eq!(page.prop(UNREAD_PROP).as_deref(), Some("0"));
    }
}
