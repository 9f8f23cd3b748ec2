//! Integration tests for storyline

mod helpers;

mod cli_test;
mod deck_test;
mod session_test;
mod view_test;
