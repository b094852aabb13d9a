//! Integration tests live in the tests/ directory.
