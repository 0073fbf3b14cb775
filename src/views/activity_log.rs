use crate::models::{EventStatus, SimEvent};

const ICON_BLOCKED: &str = "[ok]";
const ICON_ALERT: &str = "[!!]";
const ICON_DEFENSE: &str = "[df]";
const ICON_SCAN: &str = "[sc]";
const ICON_UPDATE: &str = "[up]";
const ICON_INFO: &str = "[--]";

pub fn event_icon(event: &SimEvent) -> &'static str {
    use crate::models::EventType::*;
    if event.event_type.is_attack_kind() {
        return if event.status == Some(EventStatus::Blocked) {
            ICON_BLOCKED
        } else {
            ICON_ALERT
        };
    }
    match event.event_type {
        Defense => ICON_DEFENSE,
        Scan => ICON_SCAN,
        SystemUpdate => ICON_UPDATE,
        _ => ICON_INFO,
    }
}

pub fn status_badge(status: &EventStatus) -> String {
    status.to_string().to_uppercase()
}

// Events render in the order given; ordering is validated upstream, never
// sorted here.
pub fn render_activity_log(events: &[SimEvent], simulation_active: bool) -> String {
    let mut out = String::from("Activity Log\n");
    if events.is_empty() {
        if simulation_active {
            out.push_str("Waiting for security events...\n");
        } else {
            out.push_str("No events recorded yet. Run a simulation to generate activity.\n");
        }
        return out;
    }

    for event in events {
        out.push_str(&format!(
            "{} t={} {}",
            event_icon(event),
            event.timestamp,
            event.description
        ));
        if let Some(status) = &event.status {
            out.push_str(&format!(" [{}]", status_badge(status)));
        }
        out.push('\n');
    }
    out
}
