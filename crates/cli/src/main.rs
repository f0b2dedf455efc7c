mod render;

use anyhow::Result;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Term;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use engine::{drive, Presenter, SortRunner};
use events::Frame;
use sortlab_core::{AlgorithmId, RunConfig, RunOutcome, MAX_HEIGHT, MIN_HEIGHT};

const DEFAULT_SIZE: usize = 40;
const DEFAULT_DELAY_MS: u64 = 25;
const BAR_COLUMNS: usize = 60;

#[derive(Parser)]
#[command(name = "sortlab")]
#[command(about = "Animate sorting algorithms in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an array and animate sorting it
    Run {
        /// Algorithm to run (see `sortlab list`)
        #[arg(short, long, default_value = "bubble")]
        algorithm: String,

        /// Number of bars to sort
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,

        /// Delay between steps, in milliseconds
        #[arg(short, long, default_value_t = DEFAULT_DELAY_MS)]
        delay: u64,

        /// Seed for reproducible arrays
        #[arg(long)]
        seed: Option<u64>,

        /// Skip rendering and print a run summary only
        #[arg(long)]
        quiet: bool,
    },
    /// List the available algorithms
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            algorithm,
            size,
            delay,
            seed,
            quiet,
        } => run(&algorithm, size, delay, seed, quiet).await,
        Commands::List => {
            for id in AlgorithmId::ALL {
                println!("{}", id.as_str());
            }
            Ok(())
        }
    }
}

async fn run(algorithm: &str, size: usize, delay: u64, seed: Option<u64>, quiet: bool) -> Result<()> {
    let algorithm: AlgorithmId = algorithm.parse()?;
    let values = generate(size, seed);
    debug!(algorithm = %algorithm, size, delay_ms = delay, seed = ?seed, "Generated array");
    let config = RunConfig::new(algorithm, delay);

    let runner = SortRunner::new();
    let handle = runner.start(values, config)?;

    // ctrl-c requests cooperative cancellation; the run winds down at
    // its next suspension point
    let cancel = handle.cancellation();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let outcome = if quiet {
        let mut presenter = SummaryPresenter::default();
        let (_, outcome, run) = drive(handle, &mut presenter).await?;
        presenter.print(&run);
        outcome
    } else {
        let mut presenter = TermPresenter::new(size);
        let (_, outcome, _) = drive(handle, &mut presenter).await?;
        outcome
    };

    match outcome {
        RunOutcome::Completed => println!("{}", format!("{algorithm}: sorted {size} values").green()),
        RunOutcome::Cancelled => println!("{}", format!("{algorithm}: cancelled").yellow()),
    }
    Ok(())
}

/// Generate `size` bar heights uniformly within the configured bounds.
fn generate(size: usize, seed: Option<u64>) -> Vec<u32> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    (0..size)
        .map(|_| rng.gen_range(MIN_HEIGHT..=MAX_HEIGHT))
        .collect()
}

/// Full-screen bar renderer: one horizontal bar per value, recolored
/// from scratch on every frame.
struct TermPresenter {
    term: Term,
    lines: usize,
    drawn: bool,
}

impl TermPresenter {
    fn new(lines: usize) -> Self {
        Self {
            term: Term::stdout(),
            lines,
            drawn: false,
        }
    }
}

#[async_trait]
impl Presenter for TermPresenter {
    async fn frame(&mut self, frame: &Frame) {
        if self.drawn {
            let _ = self.term.clear_last_lines(self.lines);
        }
        for (index, value) in frame.values.iter().enumerate() {
            let bar = "\u{2588}".repeat(render::bar_width(*value, BAR_COLUMNS));
            let painted = render::paint(&bar, render::role_of(index, &frame.step));
            let _ = self.term.write_line(&format!("{value:>3} {painted}"));
        }
        self.drawn = true;
    }

    async fn finished(&mut self, _outcome: RunOutcome) {
        let _ = self.term.write_line("");
    }
}

/// Counts frames instead of rendering them.
#[derive(Default)]
struct SummaryPresenter {
    frames: u64,
    comparisons: u64,
    writes: u64,
}

#[async_trait]
impl Presenter for SummaryPresenter {
    async fn frame(&mut self, frame: &Frame) {
        self.frames += 1;
        if !frame.step.comparing.is_empty() {
            self.comparisons += 1;
        }
        if !frame.step.swapping.is_empty() {
            self.writes += 1;
        }
    }

    async fn finished(&mut self, _outcome: RunOutcome) {}
}

impl SummaryPresenter {
    fn print(&self, run: &sortlab_core::Run) {
        println!("run:         {}", run.id);
        println!("algorithm:   {}", run.algorithm);
        println!("size:        {}", run.size);
        println!("frames:      {}", self.frames);
        println!("comparisons: {}", self.comparisons);
        println!("writes:      {}", self.writes);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortlab=info,engine=info".into()),
        )
        .init();
}
