use crate::defaults;
use crate::models::SimulationReport;

// round(attacks * effectiveness / 100)
pub fn blocked_of(attacks: u32, effectiveness: u32) -> u32 {
    ((attacks as u64 * effectiveness as u64) as f64 / 100.0).round() as u32
}

fn share_percent(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * count as f64 / total as f64).round() as u32
}

pub fn render_results(report: &SimulationReport) -> String {
    let protection_rate = report
        .protection_rate
        .unwrap_or(defaults::PROTECTION_RATE);
    let detection_time = report
        .avg_detection_time
        .clone()
        .unwrap_or_else(|| defaults::AVG_DETECTION_TIME.to_string());
    let response_time = report
        .avg_response_time
        .clone()
        .unwrap_or_else(|| defaults::AVG_RESPONSE_TIME.to_string());
    let timeline = report.timeline.clone().unwrap_or_else(defaults::timeline);
    let components = report
        .component_effectiveness
        .clone()
        .unwrap_or_else(defaults::component_effectiveness);
    let attack_types = report
        .attack_types
        .clone()
        .unwrap_or_else(defaults::attack_types);
    let findings = report.key_findings.clone().unwrap_or_else(|| {
        defaults::KEY_FINDINGS.iter().map(|s| s.to_string()).collect()
    });
    let recommendations = report.recommendations.clone().unwrap_or_else(|| {
        defaults::RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
    });

    let mut out = String::from("Simulation Results\n");
    out.push_str(&format!("Protection rate: {}%\n", protection_rate));
    out.push_str(&format!("Avg detection time: {}\n", detection_time));
    out.push_str(&format!("Avg response time: {}\n", response_time));

    out.push_str("\nOutcome distribution:\n");
    for (label, count) in [
        ("blocked", report.blocked_attacks),
        ("detected", report.detected_attacks),
        ("successful", report.successful_attacks),
    ] {
        out.push_str(&format!(
            "- {}: {} ({}%)\n",
            label,
            count,
            share_percent(count, report.total_attacks)
        ));
    }

    out.push_str("\nPhase progression:\n");
    for phase in &timeline {
        let bar: String = "#".repeat(phase.blocked as usize)
            + &"+".repeat(phase.detected as usize)
            + &"!".repeat(phase.successful as usize);
        out.push_str(&format!(
            "- {} [{}] blocked {}, detected {}, successful {}\n",
            phase.phase, bar, phase.blocked, phase.detected, phase.successful
        ));
    }

    out.push_str("\nComponent effectiveness:\n");
    for component in &components {
        out.push_str(&format!(
            "- {}: {}% effective, Blocked {} of {} attacks\n",
            component.name,
            component.effectiveness,
            blocked_of(component.attacks, component.effectiveness),
            component.attacks
        ));
    }

    out.push_str("\nAttack type distribution:\n");
    for stat in &attack_types {
        out.push_str(&format!(
            "- {} [{}] {} ({})\n",
            stat.name,
            "#".repeat(stat.count as usize),
            stat.count,
            stat.color
        ));
    }

    out.push_str("\nKey findings:\n");
    for finding in &findings {
        out.push_str(&format!("- {}\n", finding));
    }

    out.push_str("\nRecommendations:\n");
    for recommendation in &recommendations {
        out.push_str(&format!("- {}\n", recommendation));
    }

    out.push_str("\nActions: [run new simulation]\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttackTypeStat, ComponentStat, TimelinePhase};

    fn bare_report() -> SimulationReport {
        SimulationReport {
            blocked_attacks: 8,
            detected_attacks: 1,
            successful_attacks: 1,
            total_attacks: 10,
            ..SimulationReport::default()
        }
    }

    #[test]
    fn blocked_of_rounds_to_nearest() {
        assert_eq!(blocked_of(20, 80), 16);
        assert_eq!(blocked_of(28, 96), 27);
        assert_eq!(blocked_of(17, 88), 15);
        assert_eq!(blocked_of(13, 85), 11);
        assert_eq!(blocked_of(0, 100), 0);
    }

    #[test]
    fn blocked_of_survives_large_attack_counts() {
        assert_eq!(blocked_of(50_000_000, 100), 50_000_000);
        assert_eq!(blocked_of(u32::MAX, 100), u32::MAX);
    }

    #[test]
    fn absent_scorecards_use_fallback_values() {
        let out = render_results(&bare_report());
        assert!(out.contains("Protection rate: 93%\n"));
        assert!(out.contains("Avg detection time: 0.8s\n"));
        assert!(out.contains("Avg response time: 1.2s\n"));
    }

    #[test]
    fn provided_scorecards_override_fallbacks() {
        let mut report = bare_report();
        report.protection_rate = Some(80);
        report.avg_detection_time = Some("2.5s".to_string());
        let out = render_results(&report);
        assert!(out.contains("Protection rate: 80%\n"));
        assert!(out.contains("Avg detection time: 2.5s\n"));
        assert!(out.contains("Avg response time: 1.2s\n"));
    }

    #[test]
    fn outcome_distribution_shows_shares_of_total() {
        let out = render_results(&bare_report());
        assert!(out.contains("- blocked: 8 (80%)\n"));
        assert!(out.contains("- detected: 1 (10%)\n"));
        assert!(out.contains("- successful: 1 (10%)\n"));
    }

    #[test]
    fn zero_total_attacks_render_zero_shares() {
        let report = SimulationReport::default();
        let out = render_results(&report);
        assert!(out.contains("- blocked: 0 (0%)\n"));
    }

    #[test]
    fn default_findings_and_recommendations_appear_verbatim() {
        let out = render_results(&bare_report());
        for finding in crate::defaults::KEY_FINDINGS {
            assert!(out.contains(finding));
        }
        for recommendation in crate::defaults::RECOMMENDATIONS {
            assert!(out.contains(recommendation));
        }
    }

    #[test]
    fn provided_tables_replace_defaults() {
        let mut report = bare_report();
        report.timeline = Some(vec![TimelinePhase {
            phase: "Dry Run".to_string(),
            blocked: 1,
            detected: 0,
            successful: 0,
        }]);
        report.component_effectiveness = Some(vec![ComponentStat {
            name: "X".to_string(),
            effectiveness: 80,
            attacks: 20,
        }]);
        report.attack_types = Some(vec![AttackTypeStat {
            name: "Phishing".to_string(),
            count: 3,
            color: "green".to_string(),
        }]);
        let out = render_results(&report);
        assert!(out.contains("- Dry Run [#] blocked 1, detected 0, successful 0\n"));
        assert!(out.contains("- X: 80% effective, Blocked 16 of 20 attacks\n"));
        assert!(out.contains("- Phishing [###] 3 (green)\n"));
        assert!(!out.contains("Reconnaissance"));
        assert!(!out.contains("Firewall"));
    }

    #[test]
    fn results_end_with_reset_action_not_a_reload() {
        let out = render_results(&bare_report());
        assert!(out.ends_with("Actions: [run new simulation]\n"));
    }
}
