//! Headless simulation runs and the all-families survey

use super::report::RunReport;
use crate::config::Settings;
use crate::control::{Key, RunState};
use crate::game_of_life::RuleFamily;
use crate::world::{Flow, World};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Fix the seed so the run can be reported and repeated
fn resolve_seed(settings: &Settings) -> (Settings, u64) {
    let seed = settings.simulation.seed.unwrap_or_else(rand::random);
    let mut resolved = settings.clone();
    resolved.simulation.seed = Some(seed);
    (resolved, seed)
}

/// Replay `keys`, then run until the generation budget is spent or the world stops.
///
/// A world still waiting after the key script is started automatically. A quit key
/// ends the script and the run: the world is reported as the script left it.
/// `on_frame` sees the starting grid at its current generation, then the world
/// after every tick.
pub fn simulate<F>(settings: &Settings, keys: &[Key], mut on_frame: F) -> Result<RunReport>
where
    F: FnMut(&World),
{
    let (settings, seed) = resolve_seed(settings);
    let start = Instant::now();
    let mut world = World::new(&settings).context("Failed to build world from settings")?;
    let initial_live_count = world.live_count();

    let mut quit = false;
    for key in keys {
        let flow = world
            .handle_key(*key)
            .with_context(|| format!("Key '{}' could not be applied", key))?;
        if flow == Flow::Quit {
            debug!(key = %key, "key script requested quit");
            quit = true;
            break;
        }
    }

    // a dead or full starting grid stops here
    let mut settled_at = world.census().then(|| world.generation());
    on_frame(&world);

    if !quit && world.state() == RunState::Wait {
        world.run();
    }

    let budget = settings.simulation.generations;
    while !quit && world.state() == RunState::Run && world.generation() < budget {
        let outcome = world.tick();
        on_frame(&world);
        if outcome.auto_stopped {
            settled_at = Some(world.generation());
        }
    }

    let report = RunReport::from_world(
        &world,
        seed,
        budget,
        initial_live_count,
        settled_at,
        start.elapsed(),
    );
    info!(
        family = report.family.display_name(),
        generations = report.generations_run,
        live = report.final_live_count,
        "run finished"
    );
    Ok(report)
}

/// Run every rule family from the same seed, in parallel, one world per family
pub fn survey(settings: &Settings) -> Result<Vec<RunReport>> {
    let (settings, seed) = resolve_seed(settings);
    info!(seed, families = RuleFamily::COUNT, "surveying rule families");

    RuleFamily::ALL
        .par_iter()
        .map(|&family| {
            let mut family_settings = settings.clone();
            family_settings.simulation.rule_family = family;
            simulate(&family_settings, &[], |_| {})
                .with_context(|| format!("Survey run failed for {}", family))
        })
        .collect()
}
