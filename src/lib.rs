//! Visual effects for a static marketing page, compiled to WebAssembly.
//!
//! Each effect is an independent behavior bound to a DOM query. The crate
//! splits every effect in two: a pure model (this crate's top-level modules,
//! testable natively) and a browser binding under [`dom`] that applies the
//! model to the page. Bindings are compiled only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Clamped paging model and breakpoints |
//! | [`typewriter`] | Iterator of growing text prefixes |
//! | [`dark_mode`] | Persisted dark-mode flag over a [`dark_mode::PreferenceStore`] |
//! | [`contact`] | Contact form confirmation text |
//! | [`banner`] | Banner parallax and scroll blur math |
//! | [`tilt`] | Card hover tilt math |
//! | [`nav`] | Hamburger navigation state |
//! | [`outline`] | Keyboard focus outline rules |
//! | [`flip`] | Flip card state |
//! | [`schedule`] | Single-handle timer slots |
//! | [`geometry`] | Pointer position within element bounds |
//! | [`config`] | Runtime configuration |
//! | [`consts`] | Breakpoints, timings, selectors |
//! | [`error`] | Error type and handler error reporting |
//! | `dom` | Browser bindings and page entry point (`hydrate` only) |

pub mod banner;
pub mod carousel;
pub mod config;
pub mod consts;
pub mod contact;
pub mod dark_mode;
pub mod error;
pub mod flip;
pub mod geometry;
pub mod nav;
pub mod outline;
pub mod schedule;
pub mod tilt;
pub mod typewriter;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
mod entry;
