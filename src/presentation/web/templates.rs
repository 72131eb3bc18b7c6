use askama::Template;

use super::views::{BanView, PhotoView};

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub status: &'static str,
    pub error: Option<String>,
    pub photo: Option<PhotoView>,
    pub bans: Vec<BanView>,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}
