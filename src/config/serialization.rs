//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# student-table configuration

# Theme: dark, light, nord (press 't' in the app to cycle)
theme = "{theme}"

[table]
# Allow editing cells (Enter on a cell). Read only when false.
editable = {editable}
# Show the system logs panel at startup (toggle with 'L')
show_logs = {show_logs}

[drag]
# Cells the mouse must move while held before a drag starts
activation_distance = {activation_distance}
# Cells moved per Up/Down press during a keyboard drag
keyboard_step = {keyboard_step}

# Logging configuration (RUST_LOG env var overrides level)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the in-app log buffer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            editable = self.table.editable,
            show_logs = self.table.show_logs,
            activation_distance = self.drag.activation_distance,
            keyboard_step = self.drag.keyboard_step,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
