//! Roverpic: a small web application that draws random photos from the Mars
//! Photos API, letting the user ban rovers, cameras, or earth dates until an
//! acceptable photo turns up.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
