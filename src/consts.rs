//! Shared constants: breakpoints, timings, selectors and class names.

// ── Carousel ────────────────────────────────────────────────────

/// Viewport widths below this show a single carousel item.
pub const CAROUSEL_NARROW_PX: f64 = 520.0;

/// Viewport widths below this (and at least [`CAROUSEL_NARROW_PX`]) show two items.
pub const CAROUSEL_MEDIUM_PX: f64 = 900.0;

/// Horizontal gap between carousel items, in pixels.
pub const CAROUSEL_GAP_PX: f64 = 18.0;

/// Autoplay advance interval.
pub const CAROUSEL_AUTOPLAY_MS: u32 = 4200;

/// Quiet period before a resize re-renders the carousel.
pub const CAROUSEL_RESIZE_DEBOUNCE_MS: u32 = 120;

/// Delay before the first carousel render after setup.
pub const CAROUSEL_INITIAL_RENDER_MS: u32 = 200;

// ── Contact form ────────────────────────────────────────────────

/// How long the confirmation popup stays visible.
pub const POPUP_VISIBLE_MS: u32 = 3000;

/// Name used in the confirmation when the field is empty.
pub const POPUP_FALLBACK_NAME: &str = "amigo/a";

// ── Typewriter ──────────────────────────────────────────────────

/// Delay before typing starts, so it lands after the page fade-in.
pub const TYPING_START_DELAY_MS: u32 = 450;

/// Interval between typed characters.
pub const TYPING_CHAR_MS: u32 = 22;

/// Delay after the last character before the cursor class is removed.
pub const TYPING_CURSOR_LINGER_MS: u32 = 800;

// ── Banner ──────────────────────────────────────────────────────

/// Maximum pointer-driven shift of the banner image, in pixels, edge to edge.
pub const BANNER_POINTER_SHIFT_PX: f64 = 6.0;

/// Scroll-to-offset factor for the banner parallax.
pub const BANNER_SCROLL_FACTOR: f64 = 0.08;

/// Upper bound of the scroll parallax offset, in pixels.
pub const BANNER_SCROLL_MAX_PX: f64 = 30.0;

/// Scroll position above which the banner blurs.
pub const BANNER_BLUR_AFTER_PX: f64 = 60.0;

/// Quiet period for the scroll handler.
pub const BANNER_SCROLL_DEBOUNCE_MS: u32 = 12;

// ── Tilt ────────────────────────────────────────────────────────

/// Peak-to-peak rotation around the Y axis, in degrees.
pub const TILT_Y_RANGE_DEG: f64 = 12.0;

/// Peak-to-peak rotation around the X axis, in degrees.
pub const TILT_X_RANGE_DEG: f64 = 10.0;

// ── Navigation ──────────────────────────────────────────────────

/// Below this window width a nav link click closes the hamburger menu.
pub const NAV_COLLAPSE_BELOW_PX: f64 = 900.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Visible fraction that triggers a reveal.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Elements observed for scroll reveal.
pub const REVEAL_SELECTOR: &str =
    ".card, .section-img, .contenido, h2, p, img, .fade-in, .fade-up, .fade-down, .zoom";

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key of the dark-mode flag.
pub const DARK_MODE_STORAGE_KEY: &str = "site-dark";

/// Id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "page-fx-config";
