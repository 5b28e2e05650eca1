//! # smiles-core
//!
//! Everything the We Scale Smiles landing page needs that is not markup:
//!
//! - [`content`]: the page copy, section anchors and card lists in render order
//! - [`lead`]: the contact-form draft, its native-style checks and the sink seam
//! - [`theme`]: brand color, font and animation tokens plus the generated CSS
//! - [`config`]: the optional backend base URL
//!
//! No module here performs network I/O.

pub mod config;
pub mod content;
pub mod error;
pub mod lead;
pub mod theme;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use lead::{ACKNOWLEDGEMENT, Lead, LeadDraft, LeadField, LeadSink, LogSink};
pub use theme::Theme;
