use serde::{Deserialize, Serialize};

/// A single photo as returned by the Mars Photos API. Deserialized verbatim;
/// never mutated locally. Unknown fields in the upstream payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub rover: RoverInfo,
    pub camera: CameraInfo,
    pub earth_date: String,
    pub img_src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraInfo {
    pub name: String,
}

/// Top-level shape of a photos response: `{ "photos": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoPage {
    pub photos: Vec<Photo>,
}

impl Photo {
    /// Convenience constructor used by tests and fixtures.
    pub fn new(rover: &str, camera: &str, earth_date: &str, img_src: &str) -> Self {
        Self {
            rover: RoverInfo {
                name: rover.to_string(),
            },
            camera: CameraInfo {
                name: camera.to_string(),
            },
            earth_date: earth_date.to_string(),
            img_src: img_src.to_string(),
        }
    }
}
