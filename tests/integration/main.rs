//! Integration tests for the catalog front ends

mod common;
mod menu_tests;
