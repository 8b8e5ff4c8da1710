use ticketfall_core::{plan_spin, AnimatorConfig};

fn main() {
    // Plan a spin without touching the network or a screen
    let config = AnimatorConfig::default();
    let plans = plan_spin(&config, "example-seed", 1, &[100.0, 0.5, 4.0]);
    for plan in &plans {
        println!(
            "reel={} winner={:?} tickets={} offset {} -> {} after {}ms over {}",
            plan.reel,
            plan.strip.winner().map(|t| t.amount()),
            plan.strip.len(),
            plan.start_offset,
            plan.target_offset,
            plan.start_delay_ms,
            plan.motion.css_transition()
        );
    }
}
