use std::path::Path;

use config::{Config, File, FileFormat};
use log::debug;

use crate::DBError;
use crate::util::scan_options::ScanConfigFile;

/// Load `scan.yaml`, `scan.json` or `scan.ini` from `dir`, first one found wins.
///
/// A directory without any of them yields an empty [`ScanConfigFile`], i.e.
/// default options.
pub fn load_scan_config(dir: &Path) -> Result<ScanConfigFile, DBError> {
    let mut cfg = Config::builder();

    let candidates = [
        ("scan.yaml", FileFormat::Yaml),
        ("scan.json", FileFormat::Json),
        ("scan.ini", FileFormat::Ini),
    ];

    match candidates
        .into_iter()
        .map(|(name, format)| (dir.join(name), format))
        .find(|(path, _)| path.exists())
    {
        Some((path, format)) => {
            debug!("loading scan config from {}", path.display());
            cfg = cfg.add_source(File::from(path.as_path()).format(format));
        }
        None => {
            debug!("no scan config in {}, using defaults", dir.display());
        }
    }

    let cfg = cfg.build()?;
    Ok(cfg.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::util::{PrefixCheck, ScanOptions};

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let opts = load_scan_config(dir.path()).unwrap().to_scan_options();
        assert_eq!(opts, ScanOptions::default());
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let file = ScanConfigFile {
            limit: Some(5),
            prefix_check: Some(PrefixCheck::Bytewise),
        };
        fs::write(dir.path().join("scan.yaml"), serde_yaml::to_string(&file).unwrap()).unwrap();

        let opts = load_scan_config(dir.path()).unwrap().to_scan_options();
        assert_eq!(opts.limit, Some(5));
        assert_eq!(opts.prefix_check, PrefixCheck::Bytewise);
    }

    #[test]
    fn test_load_json_partial() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("scan.json"),
            serde_json::json!({ "limit": 2 }).to_string(),
        )
        .unwrap();

        let opts = load_scan_config(dir.path()).unwrap().to_scan_options();
        assert_eq!(opts.limit, Some(2));
        assert_eq!(opts.prefix_check, PrefixCheck::Native);
    }

    #[test]
    fn test_yaml_takes_precedence_over_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scan.yaml"), "limit: 7\n").unwrap();
        fs::write(dir.path().join("scan.json"), r#"{"limit": 1}"#).unwrap();

        let opts = load_scan_config(dir.path()).unwrap().to_scan_options();
        assert_eq!(opts.limit, Some(7));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scan.json"), "{ not json").unwrap();

        let err = load_scan_config(dir.path()).unwrap_err();
        assert!(matches!(err, DBError::Config(_)), "got {err:?}");
    }
}
