//! Surface event handling, navigation policy orchestration, and the
//! deferred progress fade.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::i18n::ExternalOpenPrompt;
use crate::policy::{
    decide_navigation, decide_new_surface, NavigationPolicy, NavigationRequest,
    NewSurfaceDecision, PolicyDecision,
};
use crate::shell::ChromeShell;
use crate::surface::{NavigableSurface, SurfaceEvent};

use super::{BrowserController, Lifecycle};

/// Delay before the progress indicator fades out after reaching full
/// progress.
pub const PROGRESS_FADE_DELAY: Duration = Duration::from_millis(600);

impl<S: NavigableSurface, H: ChromeShell> BrowserController<S, H> {
    /// Consume one lifecycle/progress event from the surface.
    ///
    /// Every event re-derives the chrome from the current surface status.
    /// Events delivered after detach are dropped; the subscription is
    /// conceptually released.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        if self.lifecycle == Lifecycle::Detached {
            debug!(?event, "surface event ignored: controller detached");
            return;
        }
        match event {
            SurfaceEvent::LoadStarted { url } => {
                debug!(url = ?url.as_ref().map(|u| u.as_str()), "load started");
                self.refresh_chrome();
                if let Some(delegate) = self.delegate.as_mut() {
                    delegate.on_start_loading(url.as_ref());
                }
            }
            SurfaceEvent::LoadFinished { url } => {
                debug!(url = ?url.as_ref().map(|u| u.as_str()), "load finished");
                self.refresh_chrome();
                if let Some(delegate) = self.delegate.as_mut() {
                    delegate.on_finish_loading(url.as_ref());
                }
            }
            SurfaceEvent::LoadFailed { url, error } => {
                // Recoverable: lifecycle state is unchanged, chrome is
                // re-derived so history controls stay correct.
                warn!(url = ?url.as_ref().map(|u| u.as_str()), %error, "load failed");
                self.refresh_chrome();
                if let Some(delegate) = self.delegate.as_mut() {
                    delegate.on_fail_loading(url.as_ref(), &error);
                }
            }
            SurfaceEvent::ProgressChanged { value } => {
                self.refresh_chrome();
                self.apply_progress(value);
            }
        }
    }

    fn apply_progress(&mut self, value: f64) {
        let value = value.clamp(0.0, 1.0);
        self.shell.set_progress_alpha(1.0);
        let animated = value > self.last_progress;
        self.shell.set_progress(value, animated);
        self.last_progress = value;
        if value >= 1.0 {
            self.fade_deadline = Some(Instant::now() + PROGRESS_FADE_DELAY);
        } else {
            // A fresh progress update supersedes any scheduled fade.
            self.fade_deadline = None;
        }
    }

    /// Drive deferred work: queued share presentations and the progress
    /// fade-out. The host calls this once per turn of its event loop.
    pub fn tick(&mut self, now: Instant) {
        let pending = std::mem::take(&mut self.pending_shares);
        for request in pending {
            self.shell.present_share(request);
        }

        if let Some(deadline) = self.fade_deadline {
            if now >= deadline {
                self.shell.set_progress_alpha(0.0);
                self.shell.set_progress(0.0, false);
                self.last_progress = 0.0;
                self.fade_deadline = None;
            }
        }
    }

    /// Answer the surface's navigation-policy question for one request.
    ///
    /// The decision itself is pure ([`decide_navigation`]); this method
    /// performs the decided side effects: redirecting into the existing
    /// surface, or prompting and handing the URL to the external handler.
    /// Once detached the controller no longer intercepts: the request is
    /// allowed unmodified and nothing touches the surface or shell.
    pub fn decide_navigation_policy(&mut self, request: &NavigationRequest) -> NavigationPolicy {
        if self.lifecycle == Lifecycle::Detached {
            debug!(url = %request.url, "policy question ignored: controller detached");
            return NavigationPolicy::Allow;
        }
        let handler_available = self
            .external_handler
            .as_ref()
            .is_some_and(|handler| handler.can_open(&request.url));

        match decide_navigation(request, handler_available) {
            PolicyDecision::Allow => NavigationPolicy::Allow,
            PolicyDecision::Cancel => {
                warn!(url = %request.url, "navigation dropped: no handler for scheme");
                NavigationPolicy::Cancel
            }
            PolicyDecision::RedirectToExisting(url) => {
                debug!(%url, "redirecting top-level request into existing surface");
                if let Err(e) = self.surface.load_url(&url) {
                    warn!(%url, error = %e, "redirect load failed");
                }
                NavigationPolicy::Cancel
            }
            PolicyDecision::PromptExternal(url) => {
                let prompt = ExternalOpenPrompt::for_language(self.config.language);
                if self.shell.confirm_external_open(&url, &prompt) {
                    if let Some(handler) = self.external_handler.as_mut() {
                        if !handler.open(&url) {
                            warn!(%url, "external handler failed to open url");
                        }
                    }
                }
                NavigationPolicy::Cancel
            }
        }
    }

    /// Answer a request to create a new surface. Never produces one:
    /// non-main-frame targets are folded into the current surface, the
    /// rest are dropped.
    pub fn handle_new_surface_request(&mut self, request: &NavigationRequest) {
        if self.lifecycle == Lifecycle::Detached {
            debug!(url = %request.url, "new-surface request ignored: controller detached");
            return;
        }
        match decide_new_surface(request) {
            NewSurfaceDecision::RedirectToExisting(url) => {
                debug!(%url, "folding new-surface request into existing surface");
                if let Err(e) = self.surface.load_url(&url) {
                    warn!(%url, error = %e, "redirect load failed");
                }
            }
            NewSurfaceDecision::Ignore => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use webchrome_common::LoadError;

    use crate::chrome::ToolbarItem;
    use crate::controller::testutil::{presented_controller, url, RecordingDelegate, RecordingHandler};
    use crate::controller::{Lifecycle, PROGRESS_FADE_DELAY};
    use crate::policy::{NavigationPolicy, NavigationRequest};
    use crate::shell::ChromeShell;
    use crate::surface::{NavigableSurface, SurfaceEvent};

    #[test]
    fn load_started_swaps_refresh_for_stop_and_shows_url() {
        let mut controller = presented_controller();
        controller.surface_mut().begin_load(url("https://example.com/path"));
        controller.handle_event(SurfaceEvent::LoadStarted {
            url: Some(url("https://example.com/path")),
        });

        assert!(controller.shell().toolbar_items.contains(&ToolbarItem::Stop));
        assert!(!controller.shell().toolbar_items.contains(&ToolbarItem::Refresh));
        assert_eq!(controller.shell().title.as_deref(), Some("example.com/path"));
    }

    #[test]
    fn load_finished_shows_page_title() {
        let mut controller = presented_controller();
        controller.surface_mut().begin_load(url("https://example.com/"));
        controller.handle_event(SurfaceEvent::LoadStarted {
            url: Some(url("https://example.com/")),
        });
        controller.surface_mut().finish_load("Example Domain");
        controller.handle_event(SurfaceEvent::LoadFinished {
            url: Some(url("https://example.com/")),
        });

        assert!(controller.shell().toolbar_items.contains(&ToolbarItem::Refresh));
        assert_eq!(controller.shell().title.as_deref(), Some("Example Domain"));
    }

    #[test]
    fn title_persists_when_show_flags_are_off() {
        let mut controller = presented_controller();
        controller.shell_mut().set_title("previous title");
        controller.set_show_page_title(false);
        controller.set_show_url_while_loading(false);

        controller.surface_mut().begin_load(url("https://example.com/"));
        controller.handle_event(SurfaceEvent::LoadStarted {
            url: Some(url("https://example.com/")),
        });
        controller.surface_mut().finish_load("Example Domain");
        controller.handle_event(SurfaceEvent::LoadFinished {
            url: Some(url("https://example.com/")),
        });

        assert_eq!(controller.shell().title.as_deref(), Some("previous title"));
    }

    #[test]
    fn delegate_sees_lifecycle_callbacks() {
        let delegate = RecordingDelegate::default();
        let log = delegate.log.clone();

        let mut controller = presented_controller();
        controller.set_delegate(Box::new(delegate));

        controller.handle_event(SurfaceEvent::LoadStarted {
            url: Some(url("https://example.com/")),
        });
        controller.handle_event(SurfaceEvent::LoadFinished {
            url: Some(url("https://example.com/")),
        });

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert!(log[0].starts_with("start"));
        assert!(log[1].starts_with("finish"));
    }

    #[test]
    fn load_failure_keeps_controller_presented() {
        let delegate = RecordingDelegate::default();
        let log = delegate.log.clone();

        let mut controller = presented_controller();
        controller.set_delegate(Box::new(delegate));
        controller.surface_mut().begin_load(url("https://down.example/"));
        controller.surface_mut().fail_load();
        controller.handle_event(SurfaceEvent::LoadFailed {
            url: Some(url("https://down.example/")),
            error: LoadError::with_code(-1009, "offline"),
        });

        assert_eq!(controller.lifecycle(), Lifecycle::Presented);
        // Chrome re-derived: not loading any more, so refresh is back.
        assert!(controller.shell().toolbar_items.contains(&ToolbarItem::Refresh));
        assert!(log.borrow()[0].starts_with("fail"));
        assert!(log.borrow()[0].contains("offline"));
    }

    #[test]
    fn events_after_detach_are_dropped() {
        let mut controller = presented_controller();
        controller.shell_mut().set_title("kept");
        controller.detach();

        controller.handle_event(SurfaceEvent::LoadStarted {
            url: Some(url("https://example.com/")),
        });
        assert_eq!(controller.shell().title.as_deref(), Some("kept"));
        assert_eq!(controller.lifecycle(), Lifecycle::Detached);
    }

    // -- Progress --

    #[test]
    fn progress_values_apply_in_order_then_fade_and_reset() {
        let mut controller = presented_controller();
        controller.surface_mut().begin_load(url("https://example.com/"));

        for value in [0.2, 0.6, 1.0] {
            controller.surface_mut().set_progress(value);
            controller.handle_event(SurfaceEvent::ProgressChanged { value });
        }

        assert_eq!(controller.shell().progress_history, vec![0.2, 0.6, 1.0]);
        assert_eq!(controller.shell().progress_alpha, 1.0);

        // Before the delay elapses the indicator stays put.
        controller.tick(Instant::now());
        assert_eq!(controller.shell().progress, 1.0);

        // Past the deadline it fades out and resets.
        controller.tick(Instant::now() + PROGRESS_FADE_DELAY + Duration::from_millis(50));
        assert_eq!(controller.shell().progress_alpha, 0.0);
        assert_eq!(controller.shell().progress, 0.0);
    }

    #[test]
    fn new_progress_supersedes_scheduled_fade() {
        let mut controller = presented_controller();
        controller.handle_event(SurfaceEvent::ProgressChanged { value: 1.0 });
        controller.handle_event(SurfaceEvent::ProgressChanged { value: 0.1 });

        controller.tick(Instant::now() + PROGRESS_FADE_DELAY + Duration::from_millis(50));
        assert_eq!(controller.shell().progress, 0.1);
        assert_eq!(controller.shell().progress_alpha, 1.0);
    }

    #[test]
    fn progress_values_are_clamped() {
        let mut controller = presented_controller();
        controller.handle_event(SurfaceEvent::ProgressChanged { value: 1.7 });
        assert_eq!(controller.shell().progress, 1.0);
    }

    // -- Navigation policy --

    #[test]
    fn mailto_with_handler_prompts_once_and_opens_on_confirm() {
        let handler = RecordingHandler {
            openable: true,
            ..RecordingHandler::default()
        };
        let opened = handler.opened.clone();

        let mut controller = presented_controller();
        controller.shell_mut().confirm_external = true;
        controller.set_external_handler(Box::new(handler));

        let request = NavigationRequest::with_target_frame(url("mailto:someone@example.com"), true);
        let policy = controller.decide_navigation_policy(&request);

        assert_eq!(policy, NavigationPolicy::Cancel);
        assert_eq!(controller.shell().prompts_shown.len(), 1);
        assert_eq!(opened.borrow().as_slice(), [url("mailto:someone@example.com")]);
    }

    #[test]
    fn mailto_prompt_declined_does_not_open() {
        let handler = RecordingHandler {
            openable: true,
            ..RecordingHandler::default()
        };
        let opened = handler.opened.clone();

        let mut controller = presented_controller();
        controller.shell_mut().confirm_external = false;
        controller.set_external_handler(Box::new(handler));

        let request = NavigationRequest::with_target_frame(url("mailto:someone@example.com"), true);
        let policy = controller.decide_navigation_policy(&request);

        assert_eq!(policy, NavigationPolicy::Cancel);
        assert_eq!(controller.shell().prompts_shown.len(), 1);
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn mailto_without_handler_cancels_silently() {
        let mut controller = presented_controller();
        controller.set_external_handler(Box::new(RecordingHandler::default()));

        let request = NavigationRequest::with_target_frame(url("mailto:someone@example.com"), true);
        let policy = controller.decide_navigation_policy(&request);

        assert_eq!(policy, NavigationPolicy::Cancel);
        assert!(controller.shell().prompts_shown.is_empty());
    }

    #[test]
    fn top_level_https_request_loads_in_existing_surface() {
        let mut controller = presented_controller();
        let request = NavigationRequest::new(url("https://example.com/path"));
        let policy = controller.decide_navigation_policy(&request);

        assert_eq!(policy, NavigationPolicy::Cancel);
        assert_eq!(
            controller.surface().current_url(),
            Some(url("https://example.com/path"))
        );
    }

    #[test]
    fn framed_https_request_is_allowed_unmodified() {
        let mut controller = presented_controller();
        let request = NavigationRequest::with_target_frame(url("https://example.com/"), true);
        assert_eq!(
            controller.decide_navigation_policy(&request),
            NavigationPolicy::Allow
        );
        assert_eq!(controller.surface().current_url(), None);
    }

    #[test]
    fn new_surface_request_for_subframe_redirects() {
        let mut controller = presented_controller();
        let request =
            NavigationRequest::with_target_frame(url("https://example.com/popup"), false);
        controller.handle_new_surface_request(&request);
        assert_eq!(
            controller.surface().current_url(),
            Some(url("https://example.com/popup"))
        );
    }

    #[test]
    fn new_surface_request_for_main_frame_is_dropped() {
        let mut controller = presented_controller();
        let request = NavigationRequest::with_target_frame(url("https://example.com/"), true);
        controller.handle_new_surface_request(&request);
        assert_eq!(controller.surface().current_url(), None);
    }

    #[test]
    fn policy_after_detach_allows_without_side_effects() {
        let handler = RecordingHandler {
            openable: true,
            ..RecordingHandler::default()
        };
        let opened = handler.opened.clone();

        let mut controller = presented_controller();
        controller.shell_mut().confirm_external = true;
        controller.set_external_handler(Box::new(handler));
        controller.detach();

        // A top-level web request no longer redirects into the surface.
        let request = NavigationRequest::new(url("https://late.example/"));
        assert_eq!(
            controller.decide_navigation_policy(&request),
            NavigationPolicy::Allow
        );
        assert_eq!(controller.surface().current_url(), None);

        // A non-web scheme no longer prompts through the restored shell.
        let request = NavigationRequest::with_target_frame(url("mailto:late@example.com"), true);
        assert_eq!(
            controller.decide_navigation_policy(&request),
            NavigationPolicy::Allow
        );
        assert!(controller.shell().prompts_shown.is_empty());
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn new_surface_request_after_detach_is_dropped() {
        let mut controller = presented_controller();
        controller.detach();

        let request =
            NavigationRequest::with_target_frame(url("https://late.example/popup"), false);
        controller.handle_new_surface_request(&request);
        assert_eq!(controller.surface().current_url(), None);
    }

    // -- Share deferral --

    #[test]
    fn share_is_deferred_until_tick() {
        let mut controller = presented_controller();
        controller.load_url_str("https://example.com/").unwrap();
        controller.share_tapped();
        assert!(controller.shell().shares_presented.is_empty());

        controller.tick(Instant::now());
        assert_eq!(controller.shell().shares_presented.len(), 1);

        // Draining is one-shot.
        controller.tick(Instant::now());
        assert_eq!(controller.shell().shares_presented.len(), 1);
    }
}
