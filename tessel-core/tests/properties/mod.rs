//! Property test modules.

mod command_tests;
mod geometry_tests;
mod layout_tests;
