//! cookbook integration tests.

mod support;
mod service;
