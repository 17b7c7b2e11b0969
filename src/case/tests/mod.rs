//! Unit tests for the case module.

mod adapter_tests;
