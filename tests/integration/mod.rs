//! Integration test modules.

mod menu_session_test;
