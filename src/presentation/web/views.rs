use crate::domain::bans::BanRule;
use crate::domain::photos::Photo;

/// The displayed photo, flattened for the template.
pub struct PhotoView {
    pub rover: String,
    pub camera: String,
    pub earth_date: String,
    pub img_src: String,
}

impl PhotoView {
    pub fn from_domain(photo: &Photo) -> Self {
        Self {
            rover: photo.rover.name.clone(),
            camera: photo.camera.name.clone(),
            earth_date: photo.earth_date.clone(),
            img_src: photo.img_src.clone(),
        }
    }
}

/// One row of the ban list. The index doubles as the removal handle.
pub struct BanView {
    pub index: usize,
    pub attribute: &'static str,
    pub value: String,
}

impl BanView {
    pub fn from_domain(index: usize, rule: &BanRule) -> Self {
        Self {
            index,
            attribute: rule.attribute.as_str(),
            value: rule.value.clone(),
        }
    }
}
