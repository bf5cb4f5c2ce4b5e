//! Appearance snapshots: restorable copies of the host chrome styling.
//!
//! The controller captures one snapshot pair when it attaches and applies
//! it back when it detaches, so presenting a browser never leaves the host
//! shell restyled. Snapshots are immutable once captured; applying writes
//! every field, explicitly clearing optionals the snapshot does not carry.

use webchrome_common::Color;

use crate::shell::{BarMetrics, ImageRef, NavigationBarStyle, ToolbarStyle};

/// Captured visual configuration of a navigation bar, plus the
/// container-level hidden flag.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationBarAppearance {
    hidden: bool,
    tint_color: Color,
    bar_tint_color: Option<Color>,
    translucent: bool,
    shadow_image: Option<ImageRef>,
    background_image_default: Option<ImageRef>,
    background_image_compact: Option<ImageRef>,
}

impl NavigationBarAppearance {
    /// Read every style field from `bar`. The hidden flag is a container
    /// property, not a bar property, so the caller supplies it.
    pub fn capture(bar: &NavigationBarStyle, hidden: bool) -> Self {
        Self {
            hidden,
            tint_color: bar.tint_color,
            bar_tint_color: bar.bar_tint_color,
            translucent: bar.translucent,
            shadow_image: bar.shadow_image.clone(),
            background_image_default: bar.background_image(BarMetrics::Default).cloned(),
            background_image_compact: bar.background_image(BarMetrics::Compact).cloned(),
        }
    }

    /// Write every captured field back to `bar`. Absent optionals are
    /// cleared rather than left stale.
    pub fn apply(&self, bar: &mut NavigationBarStyle) {
        bar.tint_color = self.tint_color;
        bar.bar_tint_color = self.bar_tint_color;
        bar.translucent = self.translucent;
        bar.shadow_image = self.shadow_image.clone();
        bar.set_background_image(BarMetrics::Default, self.background_image_default.clone());
        bar.set_background_image(BarMetrics::Compact, self.background_image_compact.clone());
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }
}

/// Captured visual configuration of a toolbar, plus the container-level
/// hidden flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarAppearance {
    hidden: bool,
    tint_color: Color,
    bar_tint_color: Option<Color>,
    translucent: bool,
}

impl ToolbarAppearance {
    pub fn capture(toolbar: &ToolbarStyle, hidden: bool) -> Self {
        Self {
            hidden,
            tint_color: toolbar.tint_color,
            bar_tint_color: toolbar.bar_tint_color,
            translucent: toolbar.translucent,
        }
    }

    pub fn apply(&self, toolbar: &mut ToolbarStyle) {
        toolbar.tint_color = self.tint_color;
        toolbar.bar_tint_color = self.bar_tint_color;
        toolbar.translucent = self.translucent;
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }
}
