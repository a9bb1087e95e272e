// main.rs - Windowed Conway's Game of Life driven by the `conway` core

use std::time::{Duration, Instant};

use conway::{Grid, History, LifeConfig, PATTERNS, apply_pattern};
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;
mod ui;

use render::Palette;

// Room above the grid for the status bar
const STATUS_BAR_HEIGHT: f32 = 32.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = LifeConfig::from_env()?;
    info!(
        window_width = config.window_width,
        window_height = config.window_height,
        cell_size = config.cell_size,
        fps = config.fps,
        grid_width = config.grid_width(),
        grid_height = config.grid_height(),
        "configuration loaded"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.window_width as f32,
                config.window_height as f32 + STATUS_BAR_HEIGHT,
            ])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(config))),
    )?;

    info!("window closed");
    Ok(())
}

/// The simulation driver: owns the grid and decides when it advances.
pub struct GameOfLife {
    grid: Grid,
    history: History,
    config: LifeConfig,
    palette: Palette,

    pub generation: u64,
    pub settled: bool,
    pub selected_pattern: usize,

    reseed_pending: bool,
    last_update: Instant,
    update_interval: Duration,
}

impl GameOfLife {
    /// Builds a driver around a freshly randomised grid.
    pub fn new(config: LifeConfig) -> Self {
        let mut grid = Grid::new(config.grid_width(), config.grid_height());
        grid.reseed();

        let mut history = History::new();
        history.record(&grid);

        Self {
            grid,
            history,
            config,
            palette: Palette::default(),
            generation: 0,
            settled: false,
            selected_pattern: 0,
            reseed_pending: false,
            last_update: Instant::now(),
            update_interval: config.frame_interval(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Asks for a reseed before the next generation.
    ///
    /// Several requests before the next step collapse into one reseed.
    pub fn request_reseed(&mut self) {
        self.reseed_pending = true;
    }

    /// Whether the next generation is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now.duration_since(self.last_update) >= self.update_interval
    }

    /// One pass of the frame loop: apply a pending reseed, then advance one
    /// generation.
    pub fn step(&mut self, now: Instant) {
        if std::mem::take(&mut self.reseed_pending) {
            self.reseed();
        }

        self.grid.tick();
        self.generation += 1;
        self.last_update = now;

        let repeated = self.history.record(&self.grid);
        if repeated && !self.settled {
            info!(
                generation = self.generation,
                population = self.grid.population(),
                "grid has settled into a repeating state"
            );
        }
        self.settled = repeated;
    }

    pub fn reseed(&mut self) {
        self.grid.reseed();
        self.restart();
        info!(population = self.grid.population(), "grid reseeded");
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            apply_pattern(&mut self.grid, pattern);
            self.restart();
            info!(pattern = pattern.name, "pattern applied");
        }
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if self.grid.contains(x, y) {
            self.grid.toggle(x, y);
            self.history.clear();
            self.history.record(&self.grid);
            self.settled = false;
        }
    }

    // Generation count and repeat detection start over for a new seed
    fn restart(&mut self) {
        self.generation = 0;
        self.settled = false;
        self.history.clear();
        self.history.record(&self.grid);
    }
}
