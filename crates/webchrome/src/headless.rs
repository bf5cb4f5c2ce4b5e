//! In-memory shell and surface implementations.
//!
//! These back the demo binary and the controller tests: the shell records
//! everything the controller applies to it, and the surface is scripted by
//! the host (begin/progress/finish/fail) while keeping real history
//! semantics for back/forward.

use url::Url;
use webchrome_common::{Color, Result};

use crate::chrome::ToolbarItem;
use crate::i18n::ExternalOpenPrompt;
use crate::shell::{ChromeShell, NavigationBarStyle, ToolbarStyle};
use crate::share::ShareRequest;
use crate::surface::{LoadRequest, NavigableSurface};

/// Chrome shell that stores its state in memory.
#[derive(Debug, Clone)]
pub struct HeadlessShell {
    navigation_bar: NavigationBarStyle,
    toolbar: ToolbarStyle,
    navigation_bar_hidden: bool,
    toolbar_hidden: bool,
    /// Currently displayed toolbar items.
    pub toolbar_items: Vec<ToolbarItem>,
    /// Currently displayed title. Persists until overwritten.
    pub title: Option<String>,
    /// Progress indicator value.
    pub progress: f64,
    /// Progress indicator opacity.
    pub progress_alpha: f32,
    /// Progress indicator tint.
    pub progress_tint: Color,
    /// Every progress value applied, in order.
    pub progress_history: Vec<f64>,
    /// URLs the external-open prompt was shown for.
    pub prompts_shown: Vec<Url>,
    /// Scripted answer the prompt returns.
    pub confirm_external: bool,
    /// Share sheets presented.
    pub shares_presented: Vec<ShareRequest>,
}

impl HeadlessShell {
    pub fn new() -> Self {
        Self {
            navigation_bar: NavigationBarStyle::default(),
            toolbar: ToolbarStyle::default(),
            navigation_bar_hidden: false,
            toolbar_hidden: true,
            toolbar_items: Vec::new(),
            title: None,
            progress: 0.0,
            progress_alpha: 0.0,
            progress_tint: Color::BLUE,
            progress_history: Vec::new(),
            prompts_shown: Vec::new(),
            confirm_external: false,
            shares_presented: Vec::new(),
        }
    }
}

impl Default for HeadlessShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeShell for HeadlessShell {
    fn navigation_bar(&self) -> &NavigationBarStyle {
        &self.navigation_bar
    }

    fn navigation_bar_mut(&mut self) -> &mut NavigationBarStyle {
        &mut self.navigation_bar
    }

    fn toolbar(&self) -> &ToolbarStyle {
        &self.toolbar
    }

    fn toolbar_mut(&mut self) -> &mut ToolbarStyle {
        &mut self.toolbar
    }

    fn is_navigation_bar_hidden(&self) -> bool {
        self.navigation_bar_hidden
    }

    fn set_navigation_bar_hidden(&mut self, hidden: bool, _animated: bool) {
        self.navigation_bar_hidden = hidden;
    }

    fn is_toolbar_hidden(&self) -> bool {
        self.toolbar_hidden
    }

    fn set_toolbar_hidden(&mut self, hidden: bool, _animated: bool) {
        self.toolbar_hidden = hidden;
    }

    fn set_toolbar_items(&mut self, items: Vec<ToolbarItem>, _animated: bool) {
        self.toolbar_items = items;
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_progress(&mut self, value: f64, _animated: bool) {
        self.progress = value;
        self.progress_history.push(value);
    }

    fn set_progress_alpha(&mut self, alpha: f32) {
        self.progress_alpha = alpha;
    }

    fn set_progress_tint(&mut self, color: Color) {
        self.progress_tint = color;
    }

    fn confirm_external_open(&mut self, url: &Url, _prompt: &ExternalOpenPrompt) -> bool {
        self.prompts_shown.push(url.clone());
        self.confirm_external
    }

    fn present_share(&mut self, request: ShareRequest) {
        self.shares_presented.push(request);
    }
}

/// Scripted content surface with in-memory history.
///
/// The host drives the load lifecycle explicitly (`begin_load`,
/// `set_progress`, `finish_load`, `fail_load`) and delivers the matching
/// [`crate::surface::SurfaceEvent`]s to the controller itself.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    loading: bool,
    progress: f64,
    current_url: Option<Url>,
    title: Option<String>,
    back_stack: Vec<Url>,
    forward_stack: Vec<Url>,
    multiple_touch: bool,
    bounce_vertical: bool,
    /// HTML documents loaded via `load_html`.
    pub html_loads: Vec<String>,
    /// Whether `stop` was called since the last load began.
    pub stopped: bool,
    /// How many times `reload` was called.
    pub reload_count: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a navigation to `url`. The previous page, if any, becomes
    /// history.
    pub fn begin_load(&mut self, url: Url) {
        if let Some(previous) = self.current_url.take() {
            self.back_stack.push(previous);
            self.forward_stack.clear();
        }
        self.current_url = Some(url);
        self.loading = true;
        self.stopped = false;
        self.progress = 0.0;
        self.title = None;
    }

    pub fn set_progress(&mut self, value: f64) {
        self.progress = value;
    }

    pub fn finish_load(&mut self, title: impl Into<String>) {
        self.loading = false;
        self.progress = 1.0;
        self.title = Some(title.into());
    }

    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    pub fn multiple_touch_enabled(&self) -> bool {
        self.multiple_touch
    }

    pub fn always_bounce_vertical(&self) -> bool {
        self.bounce_vertical
    }
}

impl NavigableSurface for HeadlessSurface {
    fn load_request(&mut self, request: &LoadRequest) -> Result<()> {
        self.begin_load(request.url.clone());
        Ok(())
    }

    fn load_html(&mut self, html: &str, base_url: Option<&Url>) -> Result<()> {
        self.html_loads.push(html.to_string());
        self.current_url = base_url.cloned();
        self.loading = false;
        self.title = None;
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        self.reload_count += 1;
        if self.current_url.is_some() {
            self.loading = true;
            self.progress = 0.0;
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
        self.loading = false;
    }

    fn go_back(&mut self) {
        if let Some(previous) = self.back_stack.pop() {
            if let Some(current) = self.current_url.take() {
                self.forward_stack.push(current);
            }
            self.current_url = Some(previous);
        }
    }

    fn go_forward(&mut self) {
        if let Some(next) = self.forward_stack.pop() {
            if let Some(current) = self.current_url.take() {
                self.back_stack.push(current);
            }
            self.current_url = Some(next);
        }
    }

    fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn current_url(&self) -> Option<Url> {
        self.current_url.clone()
    }

    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn estimated_progress(&self) -> f64 {
        self.progress
    }

    fn set_multiple_touch_enabled(&mut self, enabled: bool) {
        self.multiple_touch = enabled;
    }

    fn set_always_bounce_vertical(&mut self, enabled: bool) {
        self.bounce_vertical = enabled;
    }
}
