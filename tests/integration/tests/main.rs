//! End-to-End Integration Tests
//!
//! Drive caller parameters through settings resolution, XML emission and
//! the transport bindings.

mod authn_request;
mod bindings;
