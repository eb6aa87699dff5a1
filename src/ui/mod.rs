pub mod hud;
pub mod overlay;
