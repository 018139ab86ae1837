//! Command implementations for the blocksort CLI.

pub mod compress;
pub mod decompress;
pub mod info;
pub mod report;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use info::cmd_info;
pub use report::cmd_report;
