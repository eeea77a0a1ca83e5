//! Output rendering module
//! Formats analysis results for console, JSON, Markdown, and HTML

pub mod formatter;
