use std::{error::Error, time::Duration};

use taxi_fuel::{env::Environment, gym::TaxiFuel, viz::Replay};

fn main() -> Result<(), Box<dyn Error>> {
    let mut env = TaxiFuel::new();
    let mut replay = Replay::start()?;
    env.reset();

    loop {
        replay.draw(&env)?;
        if replay.quit_requested(Duration::from_millis(250))? {
            break;
        }

        let action = env.random_action();
        if env.step(action).0.is_none() {
            replay.draw(&env)?;
            env.report.take();
            env.reset();
        }
    }

    Ok(())
}
