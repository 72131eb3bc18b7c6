pub mod roulette;

pub use roulette::{RouletteService, RouletteSnapshot, RouletteStatus};
