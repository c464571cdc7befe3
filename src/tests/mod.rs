//! Test modules for Olelo.
//!
//! This module contains the cross-component and property-based tests:
//! - Property-based tests for the trie using proptest
//! - Configuration loading and validation tests
//! - Error type and reporter tests
//! - Test fixtures and utilities

pub mod config_tests;

pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
