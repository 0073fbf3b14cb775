use crate::models::ActiveSimulation;
use crate::state::SPEEDS;

const BAR_WIDTH: usize = 20;

pub fn progress_percent(current_step: usize, total_steps: usize) -> u32 {
    if total_steps == 0 {
        return 0;
    }
    (100.0 * current_step as f64 / total_steps as f64).round() as u32
}

pub fn render_controls(active: &ActiveSimulation, paused: bool, speed: f64) -> String {
    let percent = progress_percent(active.current_step, active.steps.len());
    let filled = (percent as usize * BAR_WIDTH / 100).min(BAR_WIDTH);
    let bar: String = "#".repeat(filled) + &"-".repeat(BAR_WIDTH - filled);
    let toggle = if paused { "[resume]" } else { "[pause]" };

    let speeds = SPEEDS
        .iter()
        .map(|&s| {
            if s == speed {
                format!("{}x*", s)
            } else {
                format!("{}x", s)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str(&format!(
        "Running: {} ({})\n",
        active.scenario_name, active.attack_type
    ));
    out.push_str(&format!(
        "Step {} of {}\n",
        active.current_step,
        active.steps.len()
    ));
    out.push_str(&format!("Progress: [{}] {}%\n", bar, percent));
    out.push_str(&format!("Controls: {} [stop]\n", toggle));
    out.push_str(&format!("Speed: {}\n", speeds));
    out.push_str("Shortcuts: [slow-mo 0.5x] [fast-forward 2x]\n");
    out
}
