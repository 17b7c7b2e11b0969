//! Unit tests for the audit module.

mod export_tests;
