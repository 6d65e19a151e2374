pub mod alert_detail;
pub mod alert_feed;
pub mod alert_summary;
pub mod safety_tips;
pub mod time_ago;
