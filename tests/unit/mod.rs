//! Unit test modules.

mod menu_choice_test;
mod records_test;
