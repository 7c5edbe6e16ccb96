pub mod icons;
pub mod output;
pub mod progress;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{
    banner, header, load_report, no_data, panel, section, success, summary_row, tab, tiles, warn,
};
pub use progress::Spinner;
pub use table::{load_report_table, result_table};
pub use theme::{theme, Theme};
