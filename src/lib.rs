// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod error;
pub mod fetch;
pub mod locale;
pub mod record;
pub mod run;
pub mod sources;
pub mod store;
pub mod text;

// ---- Re-exports for stable public API ----
pub use crate::config::Config;
pub use crate::fetch::{HttpTransport, Transport};
pub use crate::locale::ActiveLocale;
pub use crate::record::Announcement;
pub use crate::run::{Orchestrator, RunState};
pub use crate::text::{ClickAction, ClickEvent, RichText, Span};
