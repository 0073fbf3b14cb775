mod activity_log;
mod controls;
mod monitor;
mod results;
mod scenario_card;

pub use activity_log::{event_icon, render_activity_log, status_badge};
pub use controls::{progress_percent, render_controls};
pub use monitor::{render_monitor, LiveStatus};
pub use results::{blocked_of, render_results};
pub use scenario_card::{attack_type_icon, difficulty_badge, render_card};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewMode {
    Overview,
    Detailed,
}
