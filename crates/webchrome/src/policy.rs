//! Navigation policy.
//!
//! The decision itself is a pure function over the request and the
//! availability of an external handler; the controller consumes the tagged
//! outcome and performs the side effects (cancel, redirect, prompt).

use url::Url;

/// Schemes the content surface loads in place. Anything else requires an
/// external handler.
const WEB_SCHEMES: &[&str] = &["http", "https"];

/// Target frame of a navigation request, when the request has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub is_main_frame: bool,
}

/// A navigation request as reported by the surface, before it proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub url: Url,
    /// `None` means the request targets a new top-level surface.
    pub target_frame: Option<FrameInfo>,
}

impl NavigationRequest {
    /// A request with no target frame (new top-level surface).
    pub fn new(url: Url) -> Self {
        Self {
            url,
            target_frame: None,
        }
    }

    pub fn with_target_frame(url: Url, is_main_frame: bool) -> Self {
        Self {
            url,
            target_frame: Some(FrameInfo { is_main_frame }),
        }
    }
}

/// The synchronous answer handed back to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    Allow,
    Cancel,
}

/// Outcome of the pure policy decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    /// Let the surface perform the load unmodified.
    Allow,
    /// Block the load; nothing else happens.
    Cancel,
    /// Block the load and load the URL in the existing surface instead.
    RedirectToExisting(Url),
    /// Block the load and ask the user whether to open externally.
    PromptExternal(Url),
}

/// Whether a URL cannot be loaded by the content surface and needs an
/// out-of-process handler.
pub fn requires_external_handler(url: &Url) -> bool {
    !WEB_SCHEMES.contains(&url.scheme())
}

/// Decide what to do with a navigation request.
///
/// Non-web schemes go to the external handler when one is available and
/// are dropped otherwise. Web-scheme requests with no target frame are
/// redirected into the existing surface so no orphaned secondary surface
/// is created; everything else proceeds unmodified.
pub fn decide_navigation(
    request: &NavigationRequest,
    external_handler_available: bool,
) -> PolicyDecision {
    if requires_external_handler(&request.url) {
        if external_handler_available {
            PolicyDecision::PromptExternal(request.url.clone())
        } else {
            PolicyDecision::Cancel
        }
    } else if request.target_frame.is_none() {
        PolicyDecision::RedirectToExisting(request.url.clone())
    } else {
        PolicyDecision::Allow
    }
}

/// Outcome of a create-new-surface request. No variant ever produces a new
/// surface object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewSurfaceDecision {
    /// Load the request in the current surface instead.
    RedirectToExisting(Url),
    /// Drop the request.
    Ignore,
}

/// Decide a request to create a new surface (a link opening "in a new
/// window"). Non-main-frame targets are folded into the current surface.
pub fn decide_new_surface(request: &NavigationRequest) -> NewSurfaceDecision {
    match request.target_frame {
        Some(frame) if !frame.is_main_frame => {
            NewSurfaceDecision::RedirectToExisting(request.url.clone())
        }
        _ => NewSurfaceDecision::Ignore,
    }
}

/// An out-of-process application registered to open URLs the surface
/// cannot load.
pub trait ExternalHandler {
    /// Whether any external application can open this URL.
    fn can_open(&self, url: &Url) -> bool;

    /// Hand the URL to the external application. Returns whether the
    /// hand-off succeeded.
    fn open(&mut self, url: &Url) -> bool;
}
