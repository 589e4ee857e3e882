//! Shared context for the app shell.
//!
//! The shell owns a handful of state singletons: the preview overlay, the
//! header-visibility machine, the pending-request gauge, and the auth
//! session, plus the current route path and viewport width they key off.
//! `ShellContext` holds them all behind per-piece locks and provides the
//! navigation, scroll, and resize entry points that keep them consistent,
//! so host event handlers stay thin.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Mutex, MutexGuard};

use crate::chrome::{self, DeviceMode, HeaderVisibility};
use crate::preview::PreviewGallery;
use crate::routes;
use crate::session::{AuthSession, LoadingCounter, SessionStore};

type HeaderChangeCallback = Box<dyn Fn(bool) + Send + Sync>;

pub struct ShellContext<S: SessionStore> {
    preview: Mutex<PreviewGallery>,
    header: Mutex<HeaderVisibility>,
    loading: LoadingCounter,
    auth: Mutex<AuthSession<S>>,
    route_path: Mutex<String>,
    viewport_width: Mutex<Option<f64>>,
    route_transitioning: AtomicBool,
    on_header_change: Mutex<Vec<HeaderChangeCallback>>,
}

impl<S: SessionStore> ShellContext<S> {
    /// Builds the shell around an already-restored session. Tracking starts
    /// at the root path with the header visible.
    pub fn new(auth: AuthSession<S>) -> Self {
        Self {
            preview: Mutex::new(PreviewGallery::new()),
            header: Mutex::new(HeaderVisibility::new()),
            loading: LoadingCounter::new(),
            auth: Mutex::new(auth),
            route_path: Mutex::new("/".to_owned()),
            viewport_width: Mutex::new(None),
            route_transitioning: AtomicBool::new(false),
            on_header_change: Mutex::new(Vec::new()),
        }
    }

    pub fn preview(&self) -> MutexGuard<'_, PreviewGallery> {
        self.preview.lock()
    }

    pub fn auth(&self) -> MutexGuard<'_, AuthSession<S>> {
        self.auth.lock()
    }

    pub fn loading(&self) -> &LoadingCounter {
        &self.loading
    }

    pub fn current_route_path(&self) -> String {
        self.route_path.lock().clone()
    }

    /// Registers a callback fired whenever the header flips between shown
    /// and hidden, with the new hidden flag.
    pub fn connect_header_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_header_change.lock().push(Box::new(callback));
    }

    /// Records the start of a navigation: stores the target path, forgets
    /// scroll history so the old view cannot hide the new view's header,
    /// and marks a route transition in flight.
    ///
    /// Returns whether this navigation is the login-to-home handoff, which
    /// gets its own full-screen overlay.
    pub fn handle_navigation_start(&self, url: &str) -> bool {
        let to_path = routes::normalize_route_path(url);
        let from_path = {
            let mut route = self.route_path.lock();
            std::mem::replace(&mut *route, to_path.clone())
        };

        self.reset_header();
        self.route_transitioning.store(true, Ordering::Release);

        routes::is_login_home_transition(&from_path, &to_path)
    }

    /// Records the end (or cancellation) of a navigation against the path
    /// the router actually settled on.
    pub fn handle_navigation_end(&self, url: &str) {
        *self.route_path.lock() = routes::normalize_route_path(url);
        self.reset_header();
        self.route_transitioning.store(false, Ordering::Release);
    }

    /// Feeds a scroll sample from the main content area into the header
    /// machine and returns the resulting hidden flag.
    ///
    /// Eligibility is derived here: the current view must participate in
    /// header swapping and the header must be shown at all.
    pub fn handle_scroll(&self, raw_top: f64) -> bool {
        let eligible = self.show_global_header()
            && routes::enables_header_swap(&self.current_route_path());

        let (was_hidden, now_hidden) = {
            let mut header = self.header.lock();
            let was_hidden = header.is_hidden();
            header.on_scroll(raw_top, eligible);
            (was_hidden, header.is_hidden())
        };

        if was_hidden != now_hidden {
            self.notify_header_change(now_hidden);
        }
        now_hidden
    }

    pub fn is_header_hidden(&self) -> bool {
        self.header.lock().is_hidden()
    }

    /// The global header exists only for signed-in users outside the public
    /// entry views.
    pub fn show_global_header(&self) -> bool {
        let has_session = self.auth.lock().has_session();
        has_session && !routes::is_public_entry_route(&self.current_route_path())
    }

    /// Whether the layout should keep space reserved for the header.
    pub fn reserve_header_space(&self) -> bool {
        self.show_global_header() && !self.is_header_hidden()
    }

    pub fn handle_resize(&self, viewport_width: f64) {
        *self.viewport_width.lock() = Some(viewport_width);
    }

    /// Unknown viewports count as desktop until the first resize report.
    pub fn device_mode(&self) -> DeviceMode {
        let width = *self.viewport_width.lock();
        width
            .map(DeviceMode::from_viewport_width)
            .unwrap_or(DeviceMode::Desktop)
    }

    pub fn uses_compact_header_menu(&self) -> bool {
        let width = *self.viewport_width.lock();
        self.device_mode().is_mobile() || width.is_some_and(chrome::uses_compact_header)
    }

    pub fn is_route_transitioning(&self) -> bool {
        self.route_transitioning.load(Ordering::Acquire)
    }

    /// One flag for the global spinner: any pending request or an unfinished
    /// route transition.
    pub fn is_global_loading(&self) -> bool {
        self.loading.is_loading() || self.is_route_transitioning()
    }

    fn reset_header(&self) {
        let was_hidden = {
            let mut header = self.header.lock();
            let was_hidden = header.is_hidden();
            header.reset();
            was_hidden
        };
        if was_hidden {
            self.notify_header_change(false);
        }
    }

    fn notify_header_change(&self, hidden: bool) {
        for callback in self.on_header_change.lock().iter() {
            callback(hidden);
        }
    }
}
