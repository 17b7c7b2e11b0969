//! Unit tests for the KPI module.

mod productivity_tests;
