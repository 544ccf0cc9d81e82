pub mod app;
pub mod audio;
pub mod theme;
pub mod view;
pub mod window;
