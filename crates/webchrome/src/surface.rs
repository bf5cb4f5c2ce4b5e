//! The navigable content surface, consumed at its interface boundary.

use url::Url;
use webchrome_common::{LoadError, Result};

/// A request the surface can load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: Url,
}

impl LoadRequest {
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

impl From<Url> for LoadRequest {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

/// The opaque content-rendering object: performs loads and reports
/// navigation lifecycle and progress. The controller owns one exclusively
/// while attached.
pub trait NavigableSurface {
    fn load_request(&mut self, request: &LoadRequest) -> Result<()>;

    fn load_url(&mut self, url: &Url) -> Result<()> {
        self.load_request(&LoadRequest::new(url.clone()))
    }

    fn load_html(&mut self, html: &str, base_url: Option<&Url>) -> Result<()>;

    fn reload(&mut self) -> Result<()>;
    fn stop(&mut self);
    fn go_back(&mut self);
    fn go_forward(&mut self);

    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn is_loading(&self) -> bool;
    fn current_url(&self) -> Option<Url>;
    fn title(&self) -> Option<String>;
    /// Load progress estimate in `[0, 1]`.
    fn estimated_progress(&self) -> f64;

    // Embedding configuration, applied once on attach.
    fn set_multiple_touch_enabled(&mut self, enabled: bool);
    fn set_always_bounce_vertical(&mut self, enabled: bool);
}

/// Lifecycle and progress events delivered by the surface.
///
/// Navigation-policy questions are not events; they are answered
/// synchronously through the controller's policy methods.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A navigation started. Carries the URL being loaded, when known.
    LoadStarted { url: Option<Url> },
    /// The navigation committed and finished.
    LoadFinished { url: Option<Url> },
    /// The navigation failed, before or after commit.
    LoadFailed {
        url: Option<Url>,
        error: LoadError,
    },
    /// The load progress estimate changed.
    ProgressChanged { value: f64 },
}

/// Point-in-time snapshot of the surface, recomputed on demand — never
/// stored between events.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfaceStatus {
    pub is_loading: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub current_url: Option<Url>,
    pub title: Option<String>,
    pub estimated_progress: f64,
}

impl SurfaceStatus {
    pub fn capture<S: NavigableSurface + ?Sized>(surface: &S) -> Self {
        Self {
            is_loading: surface.is_loading(),
            can_go_back: surface.can_go_back(),
            can_go_forward: surface.can_go_forward(),
            current_url: surface.current_url(),
            title: surface.title(),
            estimated_progress: surface.estimated_progress(),
        }
    }
}
