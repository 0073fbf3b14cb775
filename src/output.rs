use serde::Serialize;

use crate::error::{Error, Result};
use crate::page::{render_view, DashboardView};
use crate::state::{DashboardSnapshot, PageState};
use crate::views::{progress_percent, LiveStatus, ViewMode};
use crate::{defaults, models::SimulationReport};

pub trait Formatter {
    fn write(
        &self,
        snapshot: &DashboardSnapshot,
        view: DashboardView,
        selected: Option<&str>,
        mode: ViewMode,
    ) -> Result<String>;
}

pub struct HumanFormatter;

// Summary and JSON describe the snapshot as a whole; the view selection
// only applies to human output.
pub struct SummaryFormatter;

pub struct JsonFormatter;

impl Formatter for HumanFormatter {
    fn write(
        &self,
        snapshot: &DashboardSnapshot,
        view: DashboardView,
        selected: Option<&str>,
        mode: ViewMode,
    ) -> Result<String> {
        render_view(snapshot, view, selected, mode)
    }
}

impl Formatter for SummaryFormatter {
    fn write(
        &self,
        snapshot: &DashboardSnapshot,
        _view: DashboardView,
        _selected: Option<&str>,
        _mode: ViewMode,
    ) -> Result<String> {
        let state = PageState::of(&snapshot.simulation);
        let mut out = String::new();
        out.push_str(&format!("State: {}\n", state));
        out.push_str(&format!(
            "Scenarios: {}\n",
            snapshot.simulation.scenarios.len()
        ));
        out.push_str(&format!(
            "Security events: {}\n",
            snapshot.security.events.len()
        ));

        if let Some(active) = &snapshot.simulation.active {
            out.push_str(&format!("Scenario: {}\n", active.scenario_name));
            out.push_str(&format!(
                "Step: {}/{} ({}%)\n",
                active.current_step,
                active.steps.len(),
                progress_percent(active.current_step, active.steps.len())
            ));
            out.push_str(&format!("Paused: {}\n", snapshot.simulation.paused));
            out.push_str(&format!("Speed: {}x\n", snapshot.simulation.speed));
        } else if let Some(report) = &snapshot.simulation.report {
            out.push_str(&format!(
                "Blocked: {}/{}\n",
                report.blocked_attacks, report.total_attacks
            ));
            out.push_str(&format!(
                "Detected: {}/{}\n",
                report.detected_attacks, report.total_attacks
            ));
            out.push_str(&format!(
                "Successful: {}/{}\n",
                report.successful_attacks, report.total_attacks
            ));
            out.push_str(&format!(
                "Protection rate: {}%\n",
                effective_protection_rate(report)
            ));
        }

        Ok(out)
    }
}

impl Formatter for JsonFormatter {
    fn write(
        &self,
        snapshot: &DashboardSnapshot,
        _view: DashboardView,
        _selected: Option<&str>,
        _mode: ViewMode,
    ) -> Result<String> {
        let report = PageReport::of(snapshot);
        let mut out =
            serde_json::to_string_pretty(&report).map_err(|err| Error::Json(err.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}

fn effective_protection_rate(report: &SimulationReport) -> u32 {
    report.protection_rate.unwrap_or(defaults::PROTECTION_RATE)
}

#[derive(Debug, Serialize)]
pub struct PageReport {
    pub state: String,
    pub scenario_count: usize,
    pub security_event_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<ActiveReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsReport>,
}

#[derive(Debug, Serialize)]
pub struct ActiveReport {
    pub scenario: String,
    pub step: usize,
    pub total_steps: usize,
    pub progress_percent: u32,
    pub paused: bool,
    pub speed: f64,
    pub latest_attack: Option<String>,
    pub latest_defense: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResultsReport {
    pub blocked_attacks: u32,
    pub detected_attacks: u32,
    pub successful_attacks: u32,
    pub total_attacks: u32,
    pub protection_rate: u32,
}

impl PageReport {
    pub fn of(snapshot: &DashboardSnapshot) -> Self {
        let state = PageState::of(&snapshot.simulation);
        let active = match state {
            PageState::Active => snapshot.simulation.active.as_ref().map(|active| {
                let live = LiveStatus::derive(&active.events);
                ActiveReport {
                    scenario: active.scenario_name.clone(),
                    step: active.current_step,
                    total_steps: active.steps.len(),
                    progress_percent: progress_percent(active.current_step, active.steps.len()),
                    paused: snapshot.simulation.paused,
                    speed: snapshot.simulation.speed,
                    latest_attack: live.latest_attack.map(|e| e.description.clone()),
                    latest_defense: live.latest_defense.map(|e| e.description.clone()),
                }
            }),
            _ => None,
        };
        let results = match state {
            PageState::Completed => {
                snapshot
                    .simulation
                    .report
                    .as_ref()
                    .map(|report| ResultsReport {
                        blocked_attacks: report.blocked_attacks,
                        detected_attacks: report.detected_attacks,
                        successful_attacks: report.successful_attacks,
                        total_attacks: report.total_attacks,
                        protection_rate: effective_protection_rate(report),
                    })
            }
            _ => None,
        };

        PageReport {
            state: state.to_string(),
            scenario_count: snapshot.simulation.scenarios.len(),
            security_event_count: snapshot.security.events.len(),
            active,
            results,
        }
    }
}

pub fn write_state_overview(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Page state: {}\n",
        PageState::of(&snapshot.simulation)
    ));
    out.push_str(&format!("Paused: {}\n", snapshot.simulation.paused));
    out.push_str(&format!("Speed: {}x\n", snapshot.simulation.speed));

    if snapshot.simulation.scenarios.is_empty() {
        out.push_str("Scenarios: none\n");
    } else {
        out.push_str("Scenarios:\n");
        for scenario in &snapshot.simulation.scenarios {
            out.push_str(&format!(
                "- {} [{}] ({}, {} steps)\n",
                scenario.name,
                scenario.difficulty,
                scenario.attack_type,
                scenario.steps.len()
            ));
        }
    }

    match &snapshot.simulation.active {
        Some(active) => out.push_str(&format!(
            "Active: {} (step {} of {}, {} events)\n",
            active.scenario_name,
            active.current_step,
            active.steps.len(),
            active.events.len()
        )),
        None => out.push_str("Active: none\n"),
    }

    match &snapshot.simulation.report {
        Some(report) => out.push_str(&format!(
            "Results: {} attacks ({} blocked, {} detected, {} successful)\n",
            report.total_attacks,
            report.blocked_attacks,
            report.detected_attacks,
            report.successful_attacks
        )),
        None => out.push_str("Results: none\n"),
    }

    out.push_str(&format!(
        "Security events: {}\n",
        snapshot.security.events.len()
    ));
    out
}
