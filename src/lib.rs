pub mod config;
pub mod events;
pub mod gui;
pub mod layout;
pub mod macros;
pub mod menu;
pub mod selection;
pub mod state;
pub mod sys;
