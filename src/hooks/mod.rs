mod fullscreen;
mod overlay_visibility;

pub use fullscreen::{use_fullscreen, UseFullscreen};
pub use overlay_visibility::{use_overlay_visibility, OverlayVisibility};
