use serde::{Deserialize, Serialize};

/// How the prefix-bounded strategies test "key has prefix p".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixCheck {
    /// Ask the cursor (`Cursor::valid_for_prefix`); stores may answer cheaper
    /// than a byte comparison.
    #[default]
    Native,
    /// Compare the current key's leading bytes directly.
    Bytewise,
}

/// Runtime options for range scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Stop a `Scan` after this many entries.
    pub limit: Option<usize>,
    pub prefix_check: PrefixCheck,
}

/// On-disk form of [`ScanOptions`], every field optional.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanConfigFile {
    pub limit: Option<usize>,
    pub prefix_check: Option<PrefixCheck>,
}

impl ScanConfigFile {
    /// Overlay the fields present in the file onto the defaults.
    pub fn to_scan_options(self) -> ScanOptions {
        let mut opts = ScanOptions::default();

        if self.limit.is_some() {
            opts.limit = self.limit;
        }
        if let Some(check) = self.prefix_check {
            opts.prefix_check = check;
        }

        opts
    }
}
