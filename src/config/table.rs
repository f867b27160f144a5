//! Table and drag-and-drop configuration

use serde::Deserialize;

/// Table behavior
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Allow editing cells. Off by default: fields render read only.
    pub editable: bool,

    /// Show the system logs panel under the table at startup
    pub show_logs: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            editable: false,
            show_logs: false,
        }
    }
}

/// Table settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileTableConfig {
    pub editable: Option<bool>,
    pub show_logs: Option<bool>,
}

impl TableConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileTableConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            editable: file.editable.unwrap_or(defaults.editable),
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
        }
    }
}

/// Drag sensor tuning
#[derive(Debug, Clone)]
pub struct DragConfig {
    /// Cells the pointer must travel while held before a drag starts
    pub activation_distance: u16,

    /// Cells moved per arrow key during a keyboard drag
    pub keyboard_step: u16,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: 1,
            keyboard_step: 1,
        }
    }
}

/// Drag settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDragConfig {
    pub activation_distance: Option<u16>,
    pub keyboard_step: Option<u16>,
}

impl DragConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileDragConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            activation_distance: file
                .activation_distance
                .unwrap_or(defaults.activation_distance),
            // A zero step would make keyboard drags inert
            keyboard_step: file
                .keyboard_step
                .filter(|&s| s > 0)
                .unwrap_or(defaults.keyboard_step),
        }
    }
}
