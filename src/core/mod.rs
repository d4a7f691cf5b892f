//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats
//! - Path normalization and config-path resolution
//! - Document reading for the CLI host

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
