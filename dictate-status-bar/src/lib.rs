// SPDX-License-Identifier: GPL-3.0-only
pub mod cli;
pub mod config;
pub mod output;

// Re-export the main run function
pub use bar_main::run;

mod bar_main;
