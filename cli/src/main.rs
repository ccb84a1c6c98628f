use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use freecell_core::*;
use web_time::Instant;

use crate::command::{Command, HELP};
use crate::render::TextRenderer;

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Animation length in frames
    #[arg(long, default_value_t = DEFAULT_ANIMATION_STEPS)]
    steps: u16,

    /// How many moves can be taken back
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    undo_limit: usize,

    /// Frame rate of the animation loop
    #[arg(long, default_value_t = STEPS_PER_SECOND, value_parser = clap::value_parser!(u16).range(1..))]
    fps: u16,

    /// Run animations without waiting between frames
    #[arg(long)]
    instant: bool,

    /// Always use ANSI colors
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Never use ANSI colors
    #[arg(long, overrides_with = "color")]
    no_color: bool,
}

impl Args {
    fn use_color(&self) -> bool {
        self.color || (!self.no_color && io::stdout().is_terminal())
    }

    fn frame_interval(&self) -> Option<Duration> {
        (!self.instant).then(|| Duration::from_secs(1) / u32::from(self.fps))
    }
}

enum Flow {
    Continue,
    Quit,
}

struct Session {
    engine: PlayEngine,
    renderer: TextRenderer,
    frame_interval: Option<Duration>,
}

impl Session {
    /// Runs the frame loop until no card is moving, cascades included.
    fn animate(&mut self) {
        while self.engine.is_animating() {
            let started = Instant::now();
            let frame = self.engine.tick(1);
            self.renderer.render(&frame);

            if let Some(interval) = self.frame_interval {
                let elapsed = started.elapsed();
                if elapsed < interval {
                    thread::sleep(interval - elapsed);
                }
            }
        }
    }

    fn redraw(&mut self) {
        let frame = self.engine.frame();
        self.renderer.render(&frame);
    }

    fn report(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Scheduled => self.animate(),
            MoveOutcome::NoChange => println!("That card cannot go there."),
            MoveOutcome::Ignored => println!("The game is over, type r to deal again."),
        }
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<Flow> {
        match command {
            Command::Select(source) => {
                let outcome = self.engine.handle_selection(source)?;
                self.report(outcome);
            }
            Command::Move(from, to) => {
                let outcome = self.engine.try_move(from, to)?;
                self.report(outcome);
            }
            Command::Auto => {
                let outcome = self.engine.auto_promote();
                if outcome == MoveOutcome::NoChange {
                    println!("Nothing to promote.");
                } else {
                    self.report(outcome);
                }
            }
            Command::Undo => match self.engine.undo() {
                UndoOutcome::Restored => self.redraw(),
                UndoOutcome::NoChange => println!("Nothing to undo."),
            },
            Command::Restart => {
                self.engine.restart();
                self.redraw();
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.engine.frame())
                    .context("Could not serialize frame")?;
                println!("{json}");
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let config = GameConfig::new(args.undo_limit, args.steps);
    let mut session = Session {
        engine: PlayEngine::with_config(seed, config, StandardLayout::default()),
        renderer: TextRenderer::new(args.use_color()),
        frame_interval: args.frame_interval(),
    };

    println!("Freecell with {FREE_CELLS} free cells, type h for help.");
    session.redraw();

    let mut stdin = io::stdin().lock();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().context("Could not write prompt")?;

        line.clear();
        if stdin.read_line(&mut line).context("Could not read command")? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let flow = line
            .parse::<Command>()
            .and_then(|command| session.execute(command));
        match flow {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => eprintln!("{err:#}"),
        }
    }

    log::debug!("Leaving after {} moves", session.engine.moves());
    Ok(())
}
