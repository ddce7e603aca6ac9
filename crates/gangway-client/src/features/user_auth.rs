//! OAuth sign-in buttons on the login and link-account pages.

use std::rc::Rc;

use gangway_core::init::Initializer;

use crate::page::{Page, UiCommand};

pub fn init_oauth_sign_in(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_oauth_sign_in", move || {
        page.delegate("click", "oauth-provider-button", |p, e| {
            let provider = e.value.clone().unwrap_or_else(|| e.target.clone());
            p.push_command(UiCommand::BeginOauthSignIn(provider));
        });
        Ok(())
    })
}
