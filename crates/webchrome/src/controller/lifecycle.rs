//! Presentation lifecycle: attach, present, detach, dismiss.

use tracing::debug;

use crate::appearance::{NavigationBarAppearance, ToolbarAppearance};
use crate::i18n::{localized, StringKey};
use crate::shell::{BarMetrics, ChromeShell};
use crate::surface::NavigableSurface;

use super::{BrowserController, Lifecycle};

impl<S: NavigableSurface, H: ChromeShell> BrowserController<S, H> {
    /// Capture the host chrome appearance and take ownership of the
    /// surface's embedding configuration. Attaching twice is a no-op.
    pub fn attach(&mut self) {
        if self.lifecycle != Lifecycle::Detached {
            debug!("attach ignored: controller already attached");
            return;
        }
        self.saved_navigation_bar = Some(NavigationBarAppearance::capture(
            self.shell.navigation_bar(),
            self.shell.is_navigation_bar_hidden(),
        ));
        self.saved_toolbar = Some(ToolbarAppearance::capture(
            self.shell.toolbar(),
            self.shell.is_toolbar_hidden(),
        ));
        self.surface.set_multiple_touch_enabled(true);
        self.surface.set_always_bounce_vertical(true);
        self.lifecycle = Lifecycle::Attached;
        debug!("controller attached");
    }

    /// Take over the host chrome. The navigation bar is forced visible and
    /// temporarily stripped of background/shadow overrides so the progress
    /// indicator renders correctly over it.
    pub fn present(&mut self) {
        if self.lifecycle == Lifecycle::Detached {
            self.attach();
        }
        self.shell.set_navigation_bar_hidden(false, true);
        {
            let bar = self.shell.navigation_bar_mut();
            bar.set_background_image(BarMetrics::Default, None);
            bar.shadow_image = None;
            bar.translucent = true;
        }
        let toolbar_hidden = self.config.toolbar_hidden;
        self.shell.set_toolbar_hidden(toolbar_hidden, true);
        self.shell.set_progress_alpha(0.0);
        self.lifecycle = Lifecycle::Presented;
        self.apply_tint();
        self.apply_bar_tint();
        self.refresh_chrome();
        debug!("controller presented");
    }

    /// Restore the saved shell appearance and drop the event subscription.
    ///
    /// Unconditional and idempotent: detaching twice, or without ever
    /// attaching, is a no-op and never re-applies a stale snapshot.
    pub fn detach(&mut self) {
        self.fade_deadline = None;
        self.pending_shares.clear();
        self.lifecycle = Lifecycle::Detached;
        let (Some(navigation_bar), Some(toolbar)) =
            (self.saved_navigation_bar.take(), self.saved_toolbar.take())
        else {
            return;
        };
        navigation_bar.apply(self.shell.navigation_bar_mut());
        toolbar.apply(self.shell.toolbar_mut());
        self.shell
            .set_navigation_bar_hidden(navigation_bar.hidden(), true);
        self.shell.set_toolbar_hidden(toolbar.hidden(), true);
        debug!("controller detached; shell appearance restored");
    }

    /// Run the dismiss sequence: `on_will_dismiss`, detach, `on_did_dismiss`.
    pub fn dismiss(&mut self) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.on_will_dismiss();
        }
        self.detach();
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.on_did_dismiss();
        }
    }

    /// Wrap the controller in a host-navigation container with a
    /// preconfigured, localized Done dismiss action.
    pub fn into_root_navigation(self) -> RootNavigation<S, H> {
        RootNavigation::new(self)
    }
}

/// Host-navigation container around a [`BrowserController`], carrying the
/// localized Done action that dismisses the browser.
pub struct RootNavigation<S: NavigableSurface, H: ChromeShell> {
    browser: BrowserController<S, H>,
    done_title: String,
}

impl<S: NavigableSurface, H: ChromeShell> RootNavigation<S, H> {
    pub fn new(browser: BrowserController<S, H>) -> Self {
        let done_title = localized(browser.config().language, StringKey::Done).to_string();
        Self {
            browser,
            done_title,
        }
    }

    pub fn done_title(&self) -> &str {
        &self.done_title
    }

    pub fn browser(&self) -> &BrowserController<S, H> {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut BrowserController<S, H> {
        &mut self.browser
    }

    pub fn done_tapped(&mut self) {
        self.browser.dismiss();
    }
}
