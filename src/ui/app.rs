//! Main TUI application state and logic

use crate::config::Config;
use crate::dataset::Dataset;
use crate::sort::{Algorithm, Direction, Highlights, SortRun, Step, StepGenerator};
use crate::ui::panes::{self, FrameView, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Frame, Terminal, backend::Backend};
use std::io;
use std::time::Instant;
use tracing::{debug, info};

/// What the status bar reports about the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing started since the last reset or setting change
    Idle,
    /// A step generator is being resumed every tick
    Sorting,
    /// The last run finished and the data is ordered
    Sorted,
}

/// The main application state
pub struct App {
    /// Startup constants
    pub config: Config,

    /// The array being visualized
    pub dataset: Dataset,

    /// Algorithm used by the next start command
    pub algorithm: Algorithm,

    /// Direction used by the next start command
    pub direction: Direction,

    /// In-flight generator; `Some` exactly while sorting
    pub active_run: Option<SortRun>,

    /// Indices touched by the last step, for the next frame only
    pub highlights: Highlights,

    /// Steps performed by the current or last run
    pub steps: usize,

    /// Whether the last run completed
    pub sorted: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    rng: StdRng,
}

impl App {
    /// Create a new app with a freshly generated dataset
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an app whose datasets are reproducible from `seed`
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Create an app over a given dataset; resets still draw from `seed`
    pub fn with_dataset(config: Config, dataset: Dataset, seed: u64) -> Self {
        let mut app = Self::with_seed(config, seed);
        app.dataset = dataset;
        app
    }

    fn with_rng(config: Config, mut rng: StdRng) -> Self {
        let dataset = Dataset::generate(config.count, config.min_value, config.max_value, &mut rng);
        App {
            config,
            dataset,
            algorithm: Algorithm::default(),
            direction: Direction::default(),
            active_run: None,
            highlights: Highlights::new(),
            steps: 0,
            sorted: false,
            should_quit: false,
            status_message: String::from("Ready!"),
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active_run.is_some()
    }

    pub fn state(&self) -> RunState {
        if self.is_running() {
            RunState::Sorting
        } else if self.sorted {
            RunState::Sorted
        } else {
            RunState::Idle
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let tick = self.config.tick_interval();
        info!(tick_ms = tick.as_millis() as u64, "starting interaction loop");

        while !self.should_quit {
            let frame_start = Instant::now();

            self.tick();
            terminal.draw(|f| self.render(f))?;

            // Drain input until the next tick is due
            loop {
                let timeout = tick.saturating_sub(frame_start.elapsed());
                if !event::poll(timeout)? {
                    break;
                }
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
                if self.should_quit {
                    break;
                }
            }
        }

        info!("interaction loop finished");
        Ok(())
    }

    /// Advance the active sort by one step, or drop stale highlights when idle
    pub fn tick(&mut self) {
        let Some(run) = self.active_run.as_mut() else {
            self.highlights.clear();
            return;
        };

        match run.advance(self.dataset.values_mut()) {
            Step::Moved(highlights) => {
                self.highlights = highlights;
                self.steps = run.steps_taken();
            }
            Step::Done => {
                self.steps = run.steps_taken();
                self.active_run = None;
                self.sorted = true;
                self.highlights.clear();
                self.status_message = format!("Sorted in {} step(s)", self.steps);
                info!(steps = self.steps, "sort finished");
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // While sorting, the header repeats what the run was started with
        let (algorithm, direction) = match &self.active_run {
            Some(run) => (run.algorithm(), run.direction()),
            None => (self.algorithm, self.direction),
        };

        let view = FrameView {
            config: &self.config,
            dataset: &self.dataset,
            highlights: &self.highlights,
            algorithm,
            direction,
            status: StatusRenderData {
                message: &self.status_message,
                steps: self.steps,
                algorithm,
                direction,
                state: self.state(),
            },
        };

        if self.is_running() {
            panes::render_sorting_frame(frame, view);
        } else {
            panes::render_idle_frame(frame, view);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset();
            }
            KeyCode::Char(' ') => {
                self.start();
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.set_direction(Direction::Ascending);
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.set_direction(Direction::Descending);
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                self.select_algorithm(Algorithm::Bubble);
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.select_algorithm(Algorithm::Insertion);
            }
            _ => {}
        }
    }

    /// Regenerate the dataset. Ignored while sorting.
    pub fn reset(&mut self) -> bool {
        if self.ignore_while_running("reset") {
            return false;
        }

        self.dataset = Dataset::generate(
            self.config.count,
            self.config.min_value,
            self.config.max_value,
            &mut self.rng,
        );
        self.active_run = None;
        self.steps = 0;
        self.sorted = false;
        self.highlights.clear();
        self.status_message = "Dataset regenerated".to_string();
        debug!(len = self.dataset.len(), "dataset regenerated");
        true
    }

    /// Start a fresh run of the selected algorithm. Ignored while sorting.
    pub fn start(&mut self) -> bool {
        if self.ignore_while_running("start") {
            return false;
        }

        self.active_run = Some(self.algorithm.start(self.dataset.values(), self.direction));
        self.steps = 0;
        self.sorted = false;
        self.status_message = "Sorting...".to_string();
        info!(
            algorithm = self.algorithm.name(),
            direction = self.direction.label(),
            len = self.dataset.len(),
            "sort started"
        );
        true
    }

    /// Choose the ordering for the next run. Ignored while sorting.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.ignore_while_running("direction change") {
            return false;
        }

        if self.direction != direction {
            self.direction = direction;
            self.sorted = false;
            self.steps = 0;
        }
        self.status_message = format!("{} selected", direction.label());
        true
    }

    /// Choose the algorithm for the next run. Ignored while sorting.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> bool {
        if self.ignore_while_running("algorithm change") {
            return false;
        }

        self.algorithm = algorithm;
        self.status_message = format!("{} selected", algorithm.name());
        true
    }

    fn ignore_while_running(&self, command: &str) -> bool {
        if self.is_running() {
            debug!(command, "ignored while sorting");
            true
        } else {
            false
        }
    }
}
