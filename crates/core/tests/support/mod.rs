//! Shared test helpers for `dealdesk-core` integration tests.
//!
//! Lightweight mock repositories and deal fixtures, so tests can focus on
//! store behaviour instead of setup.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
