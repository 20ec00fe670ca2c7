//! # Route Modules
//!
//! One module per resource. Each module exposes a `router()` returning
//! `Router<AppState>`, merged into the application in `lib.rs`.

pub mod registrations;
