//! Controller configuration.
//!
//! All fields have defaults so hosts can start from `Default` and adjust.
//! Mutations go through the controller setters, which re-derive and
//! re-apply the dependent chrome state immediately.

use serde::{Deserialize, Serialize};
use webchrome_common::Color;

use crate::i18n::Language;
use crate::share::ShareAction;

/// Default width of the fixed-space toolbar separators, in points.
pub const DEFAULT_ITEM_SPACING: f32 = 35.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Tint for the bars and the progress indicator.
    pub tint_color: Color,
    /// Bar background tint; `None` keeps the shell default.
    pub bar_tint_color: Option<Color>,
    /// Whether the host toolbar is hidden while presented.
    pub toolbar_hidden: bool,
    /// Width of the fixed-space separators between toolbar buttons.
    pub item_spacing: f32,
    /// Append a share button to the toolbar.
    pub show_share_action: bool,
    /// Show the scheme-stripped URL as the title while loading.
    pub show_url_while_loading: bool,
    /// Show the reported page title when not loading.
    pub show_page_title: bool,
    /// Host-supplied share actions, appended after the built-in one.
    pub extra_share_actions: Vec<ShareAction>,
    /// Language for localized chrome strings.
    pub language: Language,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            tint_color: Color::BLUE,
            bar_tint_color: None,
            toolbar_hidden: false,
            item_spacing: DEFAULT_ITEM_SPACING,
            show_share_action: true,
            show_url_while_loading: true,
            show_page_title: true,
            extra_share_actions: Vec::new(),
            language: Language::English,
        }
    }
}
