//! Route-path classification for the app shell.
//!
//! These helpers operate on already-resolved route paths; the router itself
//! and its configuration live in the host application. The shell only needs
//! to answer three questions about the current path: is it a public entry
//! view, does it participate in the hide-header-on-scroll behavior, and is
//! the current navigation the one-shot login-to-home handoff.

/// Strips the query string and fragment from a route url and maps anything
/// empty back to the root path.
pub fn normalize_route_path(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return "/".to_owned();
    }
    let path = trimmed.split('?').next().unwrap_or_default();
    let path = path.split('#').next().unwrap_or_default();
    if path.is_empty() {
        "/".to_owned()
    } else {
        path.to_owned()
    }
}

/// Views reachable without a session: landing, login, register.
pub fn is_public_entry_route(path: &str) -> bool {
    matches!(path, "/" | "/users/login" | "/users/register")
}

/// Views where the header hides on sustained downward scroll.
///
/// These are the long scrolling lists (home, bookings, flat search) and the
/// building drill-down views; everything else keeps the header pinned.
pub fn enables_header_swap(path: &str) -> bool {
    match path {
        "/home" | "/users/bookings" | "/users/flats/search" => return true,
        _ => {}
    }

    let segments: Vec<&str> = path
        .strip_prefix('/')
        .unwrap_or(path)
        .split('/')
        .collect();

    match segments.as_slice() {
        ["users", "buildings", building, "towers"] => !building.is_empty(),
        ["users", "buildings", building, "towers", tower] => {
            !building.is_empty() && !tower.is_empty()
        }
        ["users", "buildings", building, "towers", tower, "flats", flat] => {
            !building.is_empty() && !tower.is_empty() && !flat.is_empty()
        }
        _ => false,
    }
}

/// Whether a navigation is the login-to-home handoff that gets the one-shot
/// welcome overlay.
pub fn is_login_home_transition(from_path: &str, to_path: &str) -> bool {
    to_path == "/home" && is_public_entry_route(from_path)
}
