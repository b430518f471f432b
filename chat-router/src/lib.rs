//! Response routing for the health chat.
//!
//! Public API: [`ResponseRouter::answer`]. For each question it either
//! returns a canned reply, answers conversationally from the platform
//! description, or grounds the answer in loaded documents and then web
//! search results, picking the model tier from the requested version.

mod api_types;
mod classify;
mod platform;
mod router;

pub use api_types::{HealthQuery, ModelVersion, RoutedAnswer};
pub use classify::{BasicIntent, classify_basic};
pub use platform::{NO_INFORMATION_REPLY, PLATFORM_CONTEXT};
pub use router::{DEFAULT_SEARCH_SUFFIX, ResponseRouter, RouterOptions};
