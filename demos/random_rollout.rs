use std::error::Error;

use taxi_fuel::{
    env::Environment,
    gym::{
        taxi_fuel::{RenderMode, TaxiFuelConfig},
        TaxiFuel,
    },
};

const NUM_EPISODES: u16 = 3;
const MAX_STEPS: u16 = 200;

fn main() -> Result<(), Box<dyn Error>> {
    let mut env = TaxiFuel::with_config(TaxiFuelConfig { seed: Some(0) });

    for i in 0..NUM_EPISODES {
        env.reset();
        env.render(RenderMode::Human)?;

        for _ in 0..MAX_STEPS {
            let action = env.random_action();
            env.step(action);
            env.render(RenderMode::Human)?;
            if !env.is_active() {
                break;
            }
        }

        let report = env.report.take();
        println!(
            "Episode {}: {} steps, reward {}",
            i + 1,
            report["steps"],
            report["reward"]
        );
    }

    Ok(())
}
