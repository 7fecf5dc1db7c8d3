mod scan_config_file;
mod scan_options;

pub use scan_config_file::load_scan_config;
pub use scan_options::{PrefixCheck, ScanConfigFile, ScanOptions};
