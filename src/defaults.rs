//! Fallback values used when a field is absent from a `SimulationReport`;
//! rendering must reproduce these verbatim.

use crate::models::{AttackTypeStat, ComponentStat, TimelinePhase};

pub const PROTECTION_RATE: u32 = 93;
pub const AVG_DETECTION_TIME: &str = "0.8s";
pub const AVG_RESPONSE_TIME: &str = "1.2s";

pub const KEY_FINDINGS: [&str; 4] = [
    "Perimeter defenses blocked the majority of attack attempts",
    "Detection coverage held through every simulated phase",
    "Injection payloads were neutralized before reaching data stores",
    "One attack path reached its target before containment completed",
];

pub const RECOMMENDATIONS: [&str; 4] = [
    "Tighten input validation on externally reachable endpoints",
    "Lower alerting thresholds for repeated authentication failures",
    "Add rate limiting in front of authentication services",
    "Schedule a follow-up simulation after remediation",
];

pub fn timeline() -> Vec<TimelinePhase> {
    vec![
        phase("Reconnaissance", 3, 1, 0),
        phase("Initial Access", 4, 2, 1),
        phase("Exploitation", 6, 2, 1),
        phase("Exfiltration", 2, 1, 0),
    ]
}

pub fn component_effectiveness() -> Vec<ComponentStat> {
    vec![
        component("Firewall", 96, 28),
        component("Intrusion Detection", 88, 17),
        component("Web Application Firewall", 92, 24),
        component("Endpoint Protection", 85, 13),
    ]
}

pub fn attack_types() -> Vec<AttackTypeStat> {
    vec![
        attack_type("SQL Injection", 12, "red"),
        attack_type("XSS", 9, "orange"),
        attack_type("LDAP Injection", 5, "yellow"),
        attack_type("Brute Force", 8, "purple"),
        attack_type("Port Scan", 14, "blue"),
    ]
}

fn phase(name: &str, blocked: u32, detected: u32, successful: u32) -> TimelinePhase {
    TimelinePhase {
        phase: name.to_string(),
        blocked,
        detected,
        successful,
    }
}

fn component(name: &str, effectiveness: u32, attacks: u32) -> ComponentStat {
    ComponentStat {
        name: name.to_string(),
        effectiveness,
        attacks,
    }
}

fn attack_type(name: &str, count: u32, color: &str) -> AttackTypeStat {
    AttackTypeStat {
        name: name.to_string(),
        count,
        color: color.to_string(),
    }
}
