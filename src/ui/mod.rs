mod bracket_screen;
pub mod constants;
pub mod popup_message;
mod ranking_screen;
mod result_screen;
mod tournament_list_screen;
pub(crate) mod traits;
pub mod ui;
pub mod ui_callback;
mod utils;
pub mod widgets;

pub use bracket_screen::BracketView;
pub use result_screen::CommentFeed;
