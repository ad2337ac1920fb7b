/// Scan and center bitmaps. Both are required; the widget refuses to
/// construct without them.

use crate::radar::error::RadarError;
use cairo::ImageSurface;
use std::fs::File;
use std::path::Path;

pub const SCAN_FILE: &str = "radar_scan.png";
pub const CENTER_FILE: &str = "radar_center.png";

#[derive(Debug)]
pub struct RadarAssets {
    scan: ImageSurface,
    center: ImageSurface,
}

impl RadarAssets {
    /// Load both bitmaps from `dir`, failing fast if either is missing or
    /// undecodable.
    pub fn load(dir: &str) -> Result<Self, RadarError> {
        let dir = Path::new(dir);
        Ok(Self {
            scan: load_png(&dir.join(SCAN_FILE))?,
            center: load_png(&dir.join(CENTER_FILE))?,
        })
    }

    /// Build from already-decoded surfaces.
    pub fn from_surfaces(scan: ImageSurface, center: ImageSurface) -> Self {
        Self { scan, center }
    }

    pub fn scan(&self) -> &ImageSurface {
        &self.scan
    }

    pub fn center(&self) -> &ImageSurface {
        &self.center
    }

    /// Ripple radius ceiling: half the scan bitmap's width.
    pub fn scan_radius(&self) -> f64 {
        self.scan.width() as f64 / 2.0
    }
}

fn load_png(path: &Path) -> Result<ImageSurface, RadarError> {
    let mut file = File::open(path).map_err(|e| RadarError::AssetLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    ImageSurface::create_from_png(&mut file).map_err(|e| RadarError::AssetLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairo::Format;

    #[test]
    fn test_missing_assets_fail() {
        let err = RadarAssets::load("/nonexistent/path").unwrap_err();
        match err {
            RadarError::AssetLoad { path, .. } => assert!(path.contains(SCAN_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        for (name, size) in [(SCAN_FILE, 200), (CENTER_FILE, 48)] {
            let surface = ImageSurface::create(Format::ARgb32, size, size).unwrap();
            let mut file = File::create(dir.path().join(name)).unwrap();
            surface.write_to_png(&mut file).unwrap();
        }

        let assets = RadarAssets::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(assets.scan_radius(), 100.0);
        assert_eq!(assets.center().width(), 48);
    }
}
