pub mod forms;
pub mod menu;
pub mod scroll;
pub mod slider;
