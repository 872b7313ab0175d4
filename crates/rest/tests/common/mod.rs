//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server over the sample catalogue
//! - [`assertions`] - Response body and header assertions

#![allow(dead_code)]

pub mod assertions;
pub mod harness;
