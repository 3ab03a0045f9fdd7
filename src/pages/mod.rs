//! Page-level wiring.
//!
//! ARCHITECTURE
//! ============
//! `landing` owns the one `PageController` that binds every behavior to the
//! served document. It only exists in `hydrate` builds.

pub mod banner;
#[cfg(feature = "hydrate")]
pub mod landing;
