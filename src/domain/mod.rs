pub mod bans;
pub mod photos;
pub mod selection;

// Re-exports
pub use bans::{BanAttribute, BanRule};
pub use photos::{Photo, PhotoPage};
pub use selection::{ExhaustedCandidates, Selection};
