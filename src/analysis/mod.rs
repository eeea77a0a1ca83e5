//! Report analysis module
//! Keyword scanning, demographic field extraction, and result assembly

pub mod analyzer;
pub mod extractor;
pub mod report;
pub mod vocabulary;
