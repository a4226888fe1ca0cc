//! Platform-free behaviour of the Yaam Wai site.
//!
//! Everything here is plain Rust: the browser crate (`ui/site-wasm`) owns the
//! DOM and drives these types through the host traits in `notification`,
//! `submission` and `timer`.

pub mod config;
pub mod counter;
pub mod easter_egg;
pub mod error;
pub mod navigation;
pub mod notification;
pub mod page;
pub mod scroll;
pub mod state;
pub mod submission;
pub mod timer;
pub mod tone;
pub mod validation;

pub use config::{SiteConfig, SiteCopy, SiteVariant};
pub use error::{FieldError, Result, SiteError};
pub use notification::NotificationKind;
pub use state::SiteState;
pub use tone::Tone;
