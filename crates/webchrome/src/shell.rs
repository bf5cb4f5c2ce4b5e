//! Host shell chrome, consumed at its interface boundary.
//!
//! The controller never draws anything itself. It reads and writes bar
//! styles, hidden flags, toolbar items, the title, and the progress
//! indicator through [`ChromeShell`], and asks the shell to present the
//! external-open confirmation and the share sheet.

use url::Url;
use webchrome_common::Color;

use crate::chrome::ToolbarItem;
use crate::i18n::ExternalOpenPrompt;
use crate::share::ShareRequest;

/// Opaque handle naming a host image asset (bar backgrounds, shadows).
/// The controller only moves these around; it never inspects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Bar metrics a background image is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMetrics {
    Default,
    Compact,
}

/// Visual style of the host navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationBarStyle {
    pub tint_color: Color,
    pub bar_tint_color: Option<Color>,
    pub translucent: bool,
    pub shadow_image: Option<ImageRef>,
    pub background_image_default: Option<ImageRef>,
    pub background_image_compact: Option<ImageRef>,
}

impl NavigationBarStyle {
    pub fn background_image(&self, metrics: BarMetrics) -> Option<&ImageRef> {
        match metrics {
            BarMetrics::Default => self.background_image_default.as_ref(),
            BarMetrics::Compact => self.background_image_compact.as_ref(),
        }
    }

    pub fn set_background_image(&mut self, metrics: BarMetrics, image: Option<ImageRef>) {
        match metrics {
            BarMetrics::Default => self.background_image_default = image,
            BarMetrics::Compact => self.background_image_compact = image,
        }
    }
}

impl Default for NavigationBarStyle {
    fn default() -> Self {
        Self {
            tint_color: Color::BLUE,
            bar_tint_color: None,
            translucent: true,
            shadow_image: None,
            background_image_default: None,
            background_image_compact: None,
        }
    }
}

/// Visual style of the host toolbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarStyle {
    pub tint_color: Color,
    pub bar_tint_color: Option<Color>,
    pub translucent: bool,
}

impl Default for ToolbarStyle {
    fn default() -> Self {
        Self {
            tint_color: Color::BLUE,
            bar_tint_color: None,
            translucent: true,
        }
    }
}

/// The host window chrome: navigation bar, toolbar, progress indicator,
/// and the presentation hooks for prompts and share sheets.
///
/// Hidden flags live on the container, not on the bar styles, which is why
/// they are separate accessors here and captured separately by the
/// appearance snapshots. The `animated` arguments are cosmetic; shells may
/// ignore them.
pub trait ChromeShell {
    fn navigation_bar(&self) -> &NavigationBarStyle;
    fn navigation_bar_mut(&mut self) -> &mut NavigationBarStyle;
    fn toolbar(&self) -> &ToolbarStyle;
    fn toolbar_mut(&mut self) -> &mut ToolbarStyle;

    fn is_navigation_bar_hidden(&self) -> bool;
    fn set_navigation_bar_hidden(&mut self, hidden: bool, animated: bool);
    fn is_toolbar_hidden(&self) -> bool;
    fn set_toolbar_hidden(&mut self, hidden: bool, animated: bool);

    /// Replace the visible toolbar button set.
    fn set_toolbar_items(&mut self, items: Vec<ToolbarItem>, animated: bool);

    /// Set the displayed title. Never called with a cleared title; the
    /// previously displayed title persists when no new one is derived.
    fn set_title(&mut self, title: &str);

    fn set_progress(&mut self, value: f64, animated: bool);
    fn set_progress_alpha(&mut self, alpha: f32);
    fn set_progress_tint(&mut self, color: Color);

    /// Present the open-in-external-app confirmation and return whether
    /// the user chose to open.
    fn confirm_external_open(&mut self, url: &Url, prompt: &ExternalOpenPrompt) -> bool;

    /// Present the share sheet for the given request.
    fn present_share(&mut self, request: ShareRequest);
}
