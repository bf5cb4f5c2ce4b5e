//! Chrome state reducer.
//!
//! Pure derivation of the toolbar button set and title from a surface
//! status snapshot and the controller configuration. No hidden state: the
//! same inputs always produce the same chrome.

use crate::config::ChromeConfig;
use crate::surface::SurfaceStatus;

/// One entry in the toolbar button set, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarItem {
    Back { enabled: bool },
    Forward { enabled: bool },
    Stop,
    Refresh,
    Share,
    FixedSpace { width: f32 },
    FlexibleSpace,
}

/// Derived chrome: toolbar items plus the title to display, if any.
///
/// `title: None` means "leave the currently displayed title alone", not
/// "clear the title".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChromeState {
    pub items: Vec<ToolbarItem>,
    pub title: Option<String>,
}

/// Derive the toolbar button set and title for the given surface status.
///
/// Back/forward are always present with enabled flags mirroring history
/// availability. Loading swaps refresh for stop and shows the current URL
/// (scheme-stripped) when configured; idle shows the page title when
/// configured. A share button is appended last when enabled.
pub fn derive_chrome_state(status: &SurfaceStatus, config: &ChromeConfig) -> ChromeState {
    let fixed = ToolbarItem::FixedSpace {
        width: config.item_spacing,
    };

    let mut items = vec![
        ToolbarItem::Back {
            enabled: status.can_go_back,
        },
        fixed.clone(),
        ToolbarItem::Forward {
            enabled: status.can_go_forward,
        },
        fixed,
    ];

    let title = if status.is_loading {
        items.push(ToolbarItem::Stop);
        if config.show_url_while_loading {
            status
                .current_url
                .as_ref()
                .map(|url| strip_web_scheme(url.as_str()).to_string())
        } else {
            None
        }
    } else {
        items.push(ToolbarItem::Refresh);
        if config.show_page_title {
            status.title.clone()
        } else {
            None
        }
    };
    items.push(ToolbarItem::FlexibleSpace);

    if config.show_share_action {
        items.push(ToolbarItem::Share);
    }

    ChromeState { items, title }
}

/// Strip a leading `http://` or `https://`, literally and at most once.
fn strip_web_scheme(url: &str) -> &str {
    url.strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url)
}
