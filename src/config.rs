use crate::style::Palette;
use std::path::PathBuf;

const DATABASE: &str = "tasks.db";
const LOG_FILE: &str = "todo.log";
const PLACEHOLDER_TASK: &str = "- - - Add Items Here - - -";
const TITLE: &str = "To-Do App";

pub(crate) struct Config {
    /// SQLite file holding the `tasks` table, relative to the working directory.
    pub(crate) database: PathBuf,
    /// Where log records go when `RUST_LOG` is set.
    pub(crate) log_file: PathBuf,
    /// Seed row written when the database is first created.
    pub(crate) placeholder_task: String,
    pub(crate) title: String,
    pub(crate) palette: Palette,
    /// Blank lines above and below each row's text.
    pub(crate) row_padding: u16,
    /// Lines moved per scroll unit.
    pub(crate) scroll_step: u16,
    /// Text lines visible in the input field.
    pub(crate) input_height: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: PathBuf::from(DATABASE),
            log_file: PathBuf::from(LOG_FILE),
            placeholder_task: PLACEHOLDER_TASK.to_owned(),
            title: TITLE.to_owned(),
            palette: Palette::default(),
            row_padding: 1,
            scroll_step: 1,
            input_height: 3,
        }
    }
}
