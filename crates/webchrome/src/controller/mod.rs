//! Navigation policy and lifecycle controller.
//!
//! `BrowserController` owns the navigable surface and the host chrome
//! shell. It consumes the surface's lifecycle/progress events, derives the
//! toolbar/title state through the chrome reducer, applies it to the
//! shell, answers navigation-policy questions, and saves/restores the
//! shell appearance around its presentation lifecycle.

use std::time::Instant;

use tracing::debug;
use url::Url;
use webchrome_common::{Color, Result};

use crate::appearance::{NavigationBarAppearance, ToolbarAppearance};
use crate::chrome::derive_chrome_state;
use crate::config::ChromeConfig;
use crate::delegate::BrowserDelegate;
use crate::i18n::Language;
use crate::policy::ExternalHandler;
use crate::share::{ShareAction, ShareRequest};
use crate::shell::ChromeShell;
use crate::surface::{LoadRequest, NavigableSurface, SurfaceStatus};

mod events;
mod lifecycle;

pub use events::PROGRESS_FADE_DELAY;
pub use lifecycle::RootNavigation;

/// Presentation lifecycle phase.
///
/// Detaching runs to completion inside `detach`, so no intermediate phase
/// is observable between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Detached,
    Attached,
    Presented,
}

pub struct BrowserController<S: NavigableSurface, H: ChromeShell> {
    surface: S,
    shell: H,
    config: ChromeConfig,
    delegate: Option<Box<dyn BrowserDelegate>>,
    external_handler: Option<Box<dyn ExternalHandler>>,
    lifecycle: Lifecycle,
    /// Appearance snapshot pair, at most one in flight per presentation.
    saved_navigation_bar: Option<NavigationBarAppearance>,
    saved_toolbar: Option<ToolbarAppearance>,
    /// Last progress value applied to the shell indicator.
    last_progress: f64,
    /// Deadline of the scheduled progress fade-out, when one is pending.
    fade_deadline: Option<Instant>,
    /// Share requests queued for presentation on the next turn.
    pending_shares: Vec<ShareRequest>,
}

impl<S: NavigableSurface, H: ChromeShell> BrowserController<S, H> {
    pub fn new(surface: S, shell: H) -> Self {
        Self::with_config(surface, shell, ChromeConfig::default())
    }

    pub fn with_config(surface: S, shell: H, config: ChromeConfig) -> Self {
        Self {
            surface,
            shell,
            config,
            delegate: None,
            external_handler: None,
            lifecycle: Lifecycle::Detached,
            saved_navigation_bar: None,
            saved_toolbar: None,
            last_progress: 0.0,
            fade_deadline: None,
            pending_shares: Vec::new(),
        }
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn BrowserDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn set_external_handler(&mut self, handler: Box<dyn ExternalHandler>) {
        self.external_handler = Some(handler);
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn shell(&self) -> &H {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut H {
        &mut self.shell
    }

    // -- Load entry points --

    pub fn load_request(&mut self, request: &LoadRequest) -> Result<()> {
        self.surface.load_request(request)
    }

    pub fn load_url(&mut self, url: &Url) -> Result<()> {
        self.surface.load_url(url)
    }

    /// Convenience string entry point. A malformed URL string is ignored:
    /// nothing is loaded and no error is raised.
    pub fn load_url_str(&mut self, url: &str) -> Result<()> {
        match Url::parse(url) {
            Ok(parsed) => self.load_url(&parsed),
            Err(e) => {
                debug!(url, error = %e, "ignoring malformed url string");
                Ok(())
            }
        }
    }

    pub fn load_html(&mut self, html: &str, base_url: Option<&Url>) -> Result<()> {
        self.surface.load_html(html, base_url)
    }

    // -- Toolbar button actions --

    pub fn back_tapped(&mut self) {
        self.surface.go_back();
        self.refresh_chrome();
    }

    pub fn forward_tapped(&mut self) {
        self.surface.go_forward();
        self.refresh_chrome();
    }

    pub fn stop_tapped(&mut self) {
        self.surface.stop();
    }

    /// Refresh stops any in-flight load before reloading.
    pub fn refresh_tapped(&mut self) -> Result<()> {
        self.surface.stop();
        self.surface.reload()
    }

    /// Queue a share-sheet presentation for the next turn. Presenting from
    /// inside an event callback would re-enter the host UI, so the request
    /// is deferred until [`Self::tick`].
    pub fn share_tapped(&mut self) {
        let request = ShareRequest::assemble(
            self.surface.current_url(),
            self.config.language,
            &self.config.extra_share_actions,
        );
        self.pending_shares.push(request);
    }

    // -- Configuration; every setter takes effect immediately --

    pub fn set_tint_color(&mut self, color: Color) {
        self.config.tint_color = color;
        self.apply_tint();
    }

    pub fn set_bar_tint_color(&mut self, color: Option<Color>) {
        self.config.bar_tint_color = color;
        self.apply_bar_tint();
    }

    pub fn set_toolbar_hidden(&mut self, hidden: bool) {
        self.config.toolbar_hidden = hidden;
        if self.lifecycle == Lifecycle::Presented {
            self.shell.set_toolbar_hidden(hidden, true);
        }
    }

    pub fn set_item_spacing(&mut self, spacing: f32) {
        self.config.item_spacing = spacing;
        self.refresh_chrome();
    }

    pub fn set_show_share_action(&mut self, show: bool) {
        self.config.show_share_action = show;
        self.refresh_chrome();
    }

    pub fn set_show_url_while_loading(&mut self, show: bool) {
        self.config.show_url_while_loading = show;
        self.refresh_chrome();
    }

    pub fn set_show_page_title(&mut self, show: bool) {
        self.config.show_page_title = show;
        self.refresh_chrome();
    }

    pub fn set_language(&mut self, language: Language) {
        self.config.language = language;
    }

    pub fn set_extra_share_actions(&mut self, actions: Vec<ShareAction>) {
        self.config.extra_share_actions = actions;
    }

    // -- Chrome derivation; the single path every update funnels through --

    fn refresh_chrome(&mut self) {
        if self.lifecycle != Lifecycle::Presented {
            return;
        }
        let status = SurfaceStatus::capture(&self.surface);
        let state = derive_chrome_state(&status, &self.config);
        debug!(
            loading = status.is_loading,
            items = state.items.len(),
            title = ?state.title,
            "chrome refresh"
        );
        self.shell.set_toolbar_items(state.items, true);
        // A derived title of None leaves the displayed title alone.
        if let Some(title) = state.title {
            self.shell.set_title(&title);
        }
    }

    fn apply_tint(&mut self) {
        if self.lifecycle != Lifecycle::Presented {
            return;
        }
        let tint = self.config.tint_color;
        self.shell.set_progress_tint(tint);
        self.shell.navigation_bar_mut().tint_color = tint;
        self.shell.toolbar_mut().tint_color = tint;
    }

    fn apply_bar_tint(&mut self) {
        if self.lifecycle != Lifecycle::Presented {
            return;
        }
        let bar_tint = self.config.bar_tint_color;
        self.shell.navigation_bar_mut().bar_tint_color = bar_tint;
        self.shell.toolbar_mut().bar_tint_color = bar_tint;
    }
}
