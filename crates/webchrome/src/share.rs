//! Share sheet requests.
//!
//! Tapping the share button assembles a request from the current URL, the
//! built-in open-in-browser action, and any host-supplied actions. The
//! request is queued and handed to the shell on the next turn; presenting
//! from inside an event callback would re-enter the host UI.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::i18n::{localized, Language, StringKey};

/// Identifier of the built-in open-in-browser share action.
pub const OPEN_IN_BROWSER_ACTION_ID: &str = "open-in-browser";

/// One action offered on the share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareAction {
    pub id: String,
    pub title: String,
}

impl ShareAction {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// The built-in action handing the page to the system browser.
    pub fn open_in_browser(language: Language) -> Self {
        Self::new(
            OPEN_IN_BROWSER_ACTION_ID,
            localized(language, StringKey::OpenInBrowser),
        )
    }
}

/// A share sheet presentation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// The page being shared, when the surface has one.
    pub url: Option<Url>,
    /// Actions in presentation order: built-in first, then host extras.
    pub actions: Vec<ShareAction>,
}

impl ShareRequest {
    pub fn assemble(url: Option<Url>, language: Language, extras: &[ShareAction]) -> Self {
        let mut actions = Vec::with_capacity(1 + extras.len());
        actions.push(ShareAction::open_in_browser(language));
        actions.extend_from_slice(extras);
        Self { url, actions }
    }
}
