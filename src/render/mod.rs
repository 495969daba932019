pub mod globe;
pub mod particles;
pub mod scene;
