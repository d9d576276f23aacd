//! Session-cookie middleware for the admin surface.
//!
//! [`session::admin_gate`] -- redirects unauthenticated requests away from
//! the admin pages and authenticated ones away from the login page.

pub mod session;
