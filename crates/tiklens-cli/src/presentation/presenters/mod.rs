pub mod card;
pub mod check;
pub mod config;
pub mod history;
pub mod lists;
pub mod stats;

pub use card::{
    CardInput, present_comparison_card, present_follower_card, present_following_card,
    render_card,
};
pub use check::present_check;
pub use config::present_config;
pub use history::present_history;
pub use lists::{present_comparison_list, present_follower_list, present_following_list};
pub use stats::present_stats;
