pub mod controls;
pub mod edit_panel;
pub mod instructions;
pub mod rotation_indicator;
pub mod status_bar;
