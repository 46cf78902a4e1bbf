//! Term Bounce entry point
//!
//! Parses flags, sets up the terminal, and drives the fixed-rate
//! clear / update / draw / flush / sleep / poll cycle.

use std::thread;

use anyhow::Result;

use term_bounce::cli::{self, Command};
use term_bounce::consts::TICK;
use term_bounce::sim::{Ball, SimParams, apply_impulse, tick};
use term_bounce::term::{KeyPress, Terminal};

fn main() -> Result<()> {
    env_logger::init();

    let params = match cli::parse(std::env::args().skip(1))? {
        Command::Help => {
            print!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Run(params) => params,
    };

    log::info!(
        "starting: gravity {}, damping {}/{}, push ({}, {})",
        params.gravity,
        params.x_damping,
        params.y_damping,
        params.push_x,
        params.push_y,
    );

    run(&params)?;

    log::info!("quit");
    Ok(())
}

fn run(params: &SimParams) -> Result<()> {
    let mut term = Terminal::new()?;
    let vp = term.viewport();
    let mut ball = Ball::spawn(params);

    loop {
        term.clear()?;
        tick(&mut ball, &vp, params);
        term.draw_ball(&ball)?;
        term.flush()?;
        thread::sleep(TICK);

        match term.poll_key()? {
            Some(KeyPress::Quit) => break,
            Some(KeyPress::Impulse(impulse)) => apply_impulse(&mut ball, impulse, &vp),
            None => {}
        }
    }

    Ok(())
}
