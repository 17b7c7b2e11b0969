//! Unit tests for the pipeline module.
