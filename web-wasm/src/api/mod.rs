//! 解析サービスAPI連携

pub mod analyzer;

pub use analyzer::analyze_file;
