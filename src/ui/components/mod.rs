//! Reusable UI components

pub mod common;
pub mod form_panel;
pub mod format_picker;
pub mod help_panel;
pub mod schedule_list;
pub mod status_bar;

pub use form_panel::FormPanel;
pub use format_picker::FormatPicker;
pub use help_panel::HelpPanel;
pub use schedule_list::ScheduleList;
pub use status_bar::StatusBar;
