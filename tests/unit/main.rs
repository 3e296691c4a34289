//! Unit tests for fbctl
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod input_service;
