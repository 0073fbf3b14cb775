use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other(value),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Other(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum AttackType {
    SqlInjection,
    Xss,
    LdapInjection,
    BruteForce,
    PortScan,
    Other(String),
}

impl From<String> for AttackType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sql_injection" => AttackType::SqlInjection,
            "xss" => AttackType::Xss,
            "ldap_injection" => AttackType::LdapInjection,
            "brute_force" => AttackType::BruteForce,
            "port_scan" => AttackType::PortScan,
            _ => AttackType::Other(value),
        }
    }
}

impl From<AttackType> for String {
    fn from(value: AttackType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackType::SqlInjection => write!(f, "sql_injection"),
            AttackType::Xss => write!(f, "xss"),
            AttackType::LdapInjection => write!(f, "ldap_injection"),
            AttackType::BruteForce => write!(f, "brute_force"),
            AttackType::PortScan => write!(f, "port_scan"),
            AttackType::Other(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    SqlInjection,
    Xss,
    LdapInjection,
    Attack,
    Defense,
    Scan,
    SystemUpdate,
    Other(String),
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sql_injection" => EventType::SqlInjection,
            "xss" => EventType::Xss,
            "ldap_injection" => EventType::LdapInjection,
            "attack" => EventType::Attack,
            "defense" => EventType::Defense,
            "scan" => EventType::Scan,
            "system_update" => EventType::SystemUpdate,
            _ => EventType::Other(value),
        }
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::SqlInjection => write!(f, "sql_injection"),
            EventType::Xss => write!(f, "xss"),
            EventType::LdapInjection => write!(f, "ldap_injection"),
            EventType::Attack => write!(f, "attack"),
            EventType::Defense => write!(f, "defense"),
            EventType::Scan => write!(f, "scan"),
            EventType::SystemUpdate => write!(f, "system_update"),
            EventType::Other(value) => write!(f, "{}", value),
        }
    }
}

impl EventType {
    pub fn is_attack_kind(&self) -> bool {
        matches!(
            self,
            EventType::SqlInjection
                | EventType::Xss
                | EventType::LdapInjection
                | EventType::Attack
        )
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    Blocked,
    Detected,
    Success,
    Info,
    Other(String),
}

impl From<String> for EventStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "blocked" => EventStatus::Blocked,
            "detected" => EventStatus::Detected,
            "success" => EventStatus::Success,
            "info" => EventStatus::Info,
            _ => EventStatus::Other(value),
        }
    }
}

impl From<EventStatus> for String {
    fn from(value: EventStatus) -> Self {
        value.to_string()
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStatus::Blocked => write!(f, "blocked"),
            EventStatus::Detected => write!(f, "detected"),
            EventStatus::Success => write!(f, "success"),
            EventStatus::Info => write!(f, "info"),
            EventStatus::Other(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub difficulty: Difficulty,
    pub attack_type: AttackType,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimEvent {
    pub id: String,
    pub event_type: EventType,
    pub description: String,
    pub timestamp: u64,
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub blocked: Option<bool>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
}

impl SimEvent {
    pub fn is_blocked(&self) -> bool {
        self.blocked == Some(true) || self.status == Some(EventStatus::Blocked)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ActiveSimulation {
    pub scenario_name: String,
    pub current_step: usize,
    #[serde(default)]
    pub steps: Vec<String>,
    pub attack_type: AttackType,
    #[serde(default)]
    pub events: Vec<SimEvent>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SimulationReport {
    #[serde(default)]
    pub blocked_attacks: u32,
    #[serde(default)]
    pub detected_attacks: u32,
    #[serde(default)]
    pub successful_attacks: u32,
    #[serde(default)]
    pub total_attacks: u32,
    #[serde(default)]
    pub protection_rate: Option<u32>,
    #[serde(default)]
    pub avg_detection_time: Option<String>,
    #[serde(default)]
    pub avg_response_time: Option<String>,
    #[serde(default)]
    pub timeline: Option<Vec<TimelinePhase>>,
    #[serde(default)]
    pub component_effectiveness: Option<Vec<ComponentStat>>,
    #[serde(default)]
    pub attack_types: Option<Vec<AttackTypeStat>>,
    #[serde(default)]
    pub key_findings: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TimelinePhase {
    pub phase: String,
    pub blocked: u32,
    pub detected: u32,
    pub successful: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ComponentStat {
    pub name: String,
    pub effectiveness: u32,
    pub attacks: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AttackTypeStat {
    pub name: String,
    pub count: u32,
    pub color: String,
}
