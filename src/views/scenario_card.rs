use crate::models::{AttackType, Difficulty, Scenario};

pub fn difficulty_badge(difficulty: &Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "[*]",
        Difficulty::Medium => "[**]",
        Difficulty::Hard => "[***]",
        Difficulty::Other(_) => "[?]",
    }
}

pub fn attack_type_icon(attack_type: &AttackType) -> &'static str {
    match attack_type {
        AttackType::SqlInjection => "[sql]",
        AttackType::Xss => "[xss]",
        AttackType::LdapInjection => "[ldap]",
        AttackType::BruteForce => "[brute]",
        AttackType::PortScan => "[scan]",
        AttackType::Other(_) => "[atk]",
    }
}

pub fn render_card(scenario: &Scenario, selected: bool) -> String {
    let marker = if selected { ">" } else { "-" };
    let mut out = format!(
        "{} {} {} {}\n",
        marker,
        scenario.name,
        difficulty_badge(&scenario.difficulty),
        attack_type_icon(&scenario.attack_type)
    );
    if !scenario.description.is_empty() {
        out.push_str(&format!("    {}\n", scenario.description));
    }
    out.push_str(&format!(
        "    difficulty: {} | attack: {} | steps: {}\n",
        scenario.difficulty,
        scenario.attack_type,
        scenario.steps.len()
    ));
    out
}
