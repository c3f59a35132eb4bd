//! Integration tests for ccusage-rainbow.

mod cli_test;
mod helpers;
mod layout_test;
mod render_test;
