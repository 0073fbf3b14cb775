use crate::models::{ActiveSimulation, EventType, SimEvent};
use crate::views::ViewMode;

// Recomputed from the events snapshot on every render.
pub struct LiveStatus<'a> {
    pub latest_attack: Option<&'a SimEvent>,
    pub latest_defense: Option<&'a SimEvent>,
}

impl<'a> LiveStatus<'a> {
    pub fn derive(events: &'a [SimEvent]) -> Self {
        Self {
            latest_attack: events
                .iter()
                .filter(|e| e.event_type == EventType::Attack)
                .last(),
            latest_defense: events
                .iter()
                .filter(|e| e.event_type == EventType::Defense)
                .last(),
        }
    }
}

pub fn render_monitor(active: &ActiveSimulation, mode: ViewMode) -> String {
    let status = LiveStatus::derive(&active.events);
    let attack_active = status.latest_attack.is_some();
    let attack_blocked = status.latest_attack.map(SimEvent::is_blocked).unwrap_or(false);
    let defense_active = status.latest_defense.is_some();

    let inbound = if attack_active { "==!=>" } else { "-----" };
    let outbound = if attack_active && !attack_blocked {
        "==!=>"
    } else {
        "-----"
    };

    let attacker_state = if attack_active { "attacking" } else { "idle" };
    let shield_state = if attack_active && attack_blocked {
        "blocking"
    } else if defense_active {
        "defending"
    } else {
        "standing by"
    };
    let system_state = if attack_active && !attack_blocked {
        "breached"
    } else {
        "secure"
    };

    let mode_label = match mode {
        ViewMode::Overview => "overview",
        ViewMode::Detailed => "detailed",
    };

    let mut out = String::new();
    out.push_str(&format!("Attack Monitor [{}]\n", mode_label));
    out.push_str(&format!(
        "[attacker] {} [shield] {} [system]\n",
        inbound, outbound
    ));
    out.push_str(&format!("attacker: {}\n", attacker_state));
    out.push_str(&format!("shield: {}\n", shield_state));
    out.push_str(&format!("system: {}\n", system_state));

    if mode == ViewMode::Detailed {
        out.push_str(&format!("Last attack: {}\n", describe(status.latest_attack)));
        out.push_str(&format!(
            "Last defense: {}\n",
            describe(status.latest_defense)
        ));
    }

    out
}

fn describe(event: Option<&SimEvent>) -> String {
    match event {
        None => "none".to_string(),
        Some(event) => {
            let mut line = event.description.clone();
            if event.is_blocked() {
                line.push_str(" [blocked]");
            } else if let Some(status) = &event.status {
                line.push_str(&format!(" [{}]", status));
            }
            line
        }
    }
}
