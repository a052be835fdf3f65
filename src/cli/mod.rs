//! CLI infrastructure for the valency toolkit
//!
//! This module provides the command-line interface for dumping and
//! summarizing classified execution trees.

pub mod commands;
pub mod config;
pub mod output;
