// main.rs - egui front-end for Conway's Game of Life

use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};

use life::{Grid, patterns};

mod ui;

const GRID_SIZE: usize = 50;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(GameOfLife::default())),
    )
}

pub struct GameOfLife {
    pub grid: Grid,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    grid_history: [u64; 10],
    history_count: usize,
}

impl Default for GameOfLife {
    fn default() -> Self {
        Self {
            grid: Grid::dead(GRID_SIZE, GRID_SIZE),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            generation: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            grid_history: [0; 10],
            history_count: 0,
        }
    }
}

impl GameOfLife {
    fn update_generation(&mut self) {
        // The 50x50 grid is never empty, so stepping cannot fail
        if let Ok(next) = self.grid.next_generation() {
            self.grid = next;
            self.generation += 1;
        }

        // Pause when the board starts repeating itself
        if self.check_for_cycle() {
            self.is_running = false;
        }
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.grid.content_hash();
        if self.grid_history.contains(&current_hash) {
            return true;
        }
        self.grid_history[self.history_count % 10] = current_hash; // Circular buffer
        self.history_count += 1;
        false
    }

    fn reset_history(&mut self) {
        self.generation = 0;
        self.grid_history = [0; 10];
        self.history_count = 0;
    }

    fn clear_grid(&mut self) {
        self.grid.clear();
        self.reset_history();
    }

    fn random_pattern(&mut self) {
        patterns::apply_random_pattern(&mut self.grid, self.generation);
        self.reset_history();
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            patterns::apply_pattern(&mut self.grid, pattern);
            self.reset_history();
        }
    }

    fn toggle_cell(&mut self, row: usize, col: usize) {
        if row < self.grid.rows() && col < self.grid.cols() {
            self.grid.toggle(row, col);
        }
    }
}
