//! Property test modules

mod board_tests;
mod drop_policy_tests;
mod identity_tests;
mod keyboard_tests;
