pub mod dashboard;
pub mod filter_dropdown;
pub mod header;
pub mod layout;
pub mod navigation;
pub mod search_results;
pub mod search_scores;
pub mod searchbar;
pub mod statistics_chart;
pub mod toaster;
pub mod top_students_table;

pub use dashboard::Dashboard;
pub use filter_dropdown::{FilterDropdown, FilterOption};
pub use header::Header;
pub use layout::Shell;
pub use navigation::Sidebar;
pub use search_results::SearchResults;
pub use search_scores::SearchScores;
pub use searchbar::Searchbar;
pub use statistics_chart::StatisticsChart;
pub use toaster::Toaster;
pub use top_students_table::TopStudentsSection;
