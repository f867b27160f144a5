// Components module - reusable UI building blocks
//
// - Table panel: heading, header row and the sortable student rows
// - Student row / cell editor: one record and the input being edited
// - Logs panel: System log entries
// - Status bar: mode, validation hint, key hints
// - Toast: transient notifications

pub mod cell_editor;
pub mod logs_panel;
pub mod status_bar;
pub mod student_row;
pub mod table_panel;
pub mod toast;

pub use logs_panel::LogsPanel;
pub use table_panel::TablePanel;
pub use toast::Toast;
