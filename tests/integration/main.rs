//! Integration tests for the LinkHub HTTP API.
//!
//! These tests drive the full router against a live PostgreSQL instance
//! (TEST_DATABASE_URL, falling back to a local default). Each test scopes
//! itself to a fresh workspace, so tests are isolated without truncating
//! shared tables.

mod helpers;

mod association_test;
mod folder_test;
