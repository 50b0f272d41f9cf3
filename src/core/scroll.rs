// Pure scroll-position predicates and mappings for the page chrome.
//
// The event wiring reads the scroll offset from the window and feeds it
// through these so the thresholds stay testable off the browser.

// Scroll offset past which the navbar switches to its compact state
pub const NAVBAR_SCROLL_PX: f64 = 100.0;

// Scroll offset past which the back-to-top button shows
pub const BACK_TO_TOP_PX: f64 = 500.0;

// Parallax fallback when an element carries no data-speed attribute
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_PX
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_PX
}

/// Read-progress percentage in \[0, 100\] for the progress bar width.
/// A page shorter than the viewport reads as 0.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let track = scroll_height - client_height;
    if track <= 0.0 {
        return 0.0;
    }
    (scroll_y / track * 100.0).clamp(0.0, 100.0)
}

/// Vertical offset in px applied to a parallax element.
#[inline]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Parse a `data-speed` attribute, falling back to the default.
pub fn parse_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}
