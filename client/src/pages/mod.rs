//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns load-time orchestration and delegates rendering details to
//! `components`.

pub mod home;
