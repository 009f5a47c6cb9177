mod central_panel;
mod controls_panel;
mod status_panel;

pub use central_panel::central_panel;
pub use controls_panel::controls_panel;
pub use status_panel::status_panel;
