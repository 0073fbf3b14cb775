use crate::error::{Error, Result};
use crate::state::DashboardSnapshot;
use crate::views::{
    render_activity_log, render_card, render_controls, render_monitor, render_results, ViewMode,
};

// The live page caps the activity log; the standalone log view does not.
const LIVE_LOG_LIMIT: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DashboardView {
    Page,
    Scenarios,
    Controls,
    Monitor,
    Log,
    Results,
}

impl DashboardView {
    pub fn names() -> [&'static str; 6] {
        ["page", "scenarios", "controls", "monitor", "log", "results"]
    }
}

pub fn render_page(
    snapshot: &DashboardSnapshot,
    selected: Option<&str>,
    mode: ViewMode,
) -> String {
    if let Some(active) = &snapshot.simulation.active {
        let recent =
            &snapshot.security.events[..snapshot.security.events.len().min(LIVE_LOG_LIMIT)];
        let mut out = render_controls(active, snapshot.simulation.paused, snapshot.simulation.speed);
        out.push('\n');
        out.push_str(&render_monitor(active, mode));
        out.push('\n');
        out.push_str(&render_activity_log(recent, true));
        out
    } else if let Some(report) = &snapshot.simulation.report {
        render_results(report)
    } else {
        render_scenario_list(snapshot, selected)
    }
}

pub fn render_scenario_list(snapshot: &DashboardSnapshot, selected: Option<&str>) -> String {
    let mut out = String::from("Attack Scenarios\n");
    if snapshot.simulation.scenarios.is_empty() {
        out.push_str("No scenarios available.\n");
        return out;
    }
    for scenario in &snapshot.simulation.scenarios {
        let is_selected = selected == Some(scenario.id.as_str());
        out.push_str(&render_card(scenario, is_selected));
    }
    out
}

pub fn render_view(
    snapshot: &DashboardSnapshot,
    view: DashboardView,
    selected: Option<&str>,
    mode: ViewMode,
) -> Result<String> {
    if let Some(id) = selected {
        if !snapshot.simulation.scenarios.iter().any(|s| s.id == id) {
            return Err(Error::UnknownScenario(id.to_string()));
        }
    }

    match view {
        DashboardView::Page => Ok(render_page(snapshot, selected, mode)),
        DashboardView::Scenarios => Ok(render_scenario_list(snapshot, selected)),
        DashboardView::Controls => {
            let active = snapshot
                .simulation
                .active
                .as_ref()
                .ok_or(Error::NoActiveSimulation)?;
            Ok(render_controls(
                active,
                snapshot.simulation.paused,
                snapshot.simulation.speed,
            ))
        }
        DashboardView::Monitor => {
            let active = snapshot
                .simulation
                .active
                .as_ref()
                .ok_or(Error::NoActiveSimulation)?;
            Ok(render_monitor(active, mode))
        }
        DashboardView::Log => Ok(render_activity_log(
            &snapshot.security.events,
            snapshot.simulation.active.is_some(),
        )),
        DashboardView::Results => {
            let report = snapshot.simulation.report.as_ref().ok_or(Error::NoReport)?;
            Ok(render_results(report))
        }
    }
}
