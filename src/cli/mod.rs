//! CLI infrastructure for the Brainstorm puzzle toolkit
//!
//! This module provides the command-line interface for solving, checking and
//! browsing puzzle objectives.

pub mod commands;
pub mod output;
