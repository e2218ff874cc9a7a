use std::path::{Path, PathBuf};

/// Asset catalog folder the icon ships in, relative to the crate root.
const IMAGESET_DIR: &str = "Sources/Assets.xcassets/JoyConIcon.imageset";

/// One PNG to produce: canvas size in pixels and file name inside the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: &'static str,
}

pub const TARGETS: [IconTarget; 2] = [
    IconTarget { size: 18, file_name: "joycon-icon.png" },
    IconTarget { size: 36, file_name: "joycon-icon@2x.png" },
];

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub out_dir: PathBuf,
    pub targets: Vec<IconTarget>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { out_dir: default_out_dir(), targets: TARGETS.to_vec() }
    }
}

impl GeneratorConfig {
    /// Same targets, different directory.
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into(), ..Self::default() }
    }

    pub fn target_path(&self, target: &IconTarget) -> PathBuf {
        self.out_dir.join(target.file_name)
    }
}

/// Absolute path of the imageset folder next to this crate's manifest.
pub fn default_out_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(IMAGESET_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets() {
        let cfg = GeneratorConfig::default();
        assert!(cfg.out_dir.is_absolute());
        assert!(cfg.out_dir.ends_with("Sources/Assets.xcassets/JoyConIcon.imageset"));
        assert_eq!(cfg.targets, TARGETS.to_vec());
        assert_eq!(cfg.targets[1].size, cfg.targets[0].size * 2);
    }

    #[test]
    fn out_dir_override_keeps_targets() {
        let cfg = GeneratorConfig::with_out_dir("/tmp/icons");
        assert_eq!(cfg.out_dir, PathBuf::from("/tmp/icons"));
        assert_eq!(cfg.targets.len(), 2);
        assert_eq!(cfg.target_path(&cfg.targets[1]), PathBuf::from("/tmp/icons/joycon-icon@2x.png"));
    }
}
