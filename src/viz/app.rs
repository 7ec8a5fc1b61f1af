use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::warn;
use rand::Rng;
use ratatui::{prelude::*, widgets::*};

use super::{
    components::{help::render_help, Arena, Component, Logs, Plots, Stats},
    tui,
};
use crate::{
    error,
    game::{EpisodeController, EpisodeEnd, FrameResult, Key, KeyState, Mode, Phase},
};

const TABS: [&str; 3] = ["Arena", "Plots", "Logs"];
const PLOTS: [&str; 3] = ["Score", "Epsilon", "Q-table size"];

/// Time between two simulation ticks
const FRAME: Duration = Duration::from_millis(16);

/// The root TUI component which owns the controller and runs the frame loop
pub struct App<R: Rng> {
    controller: EpisodeController<R>,
    keys: KeyState,
    release_events: bool,
    frame: FrameResult,
    new_record: bool,
    selected_tab: usize,
    show_help: bool,
    plots: Plots,
    logs: Logs,
    quit: bool,
}

impl<R: Rng> App<R> {
    pub fn new(mut controller: EpisodeController<R>) -> Self {
        let keys = KeyState::new();
        let frame = controller.step(&keys);
        Self {
            controller,
            keys,
            release_events: false,
            frame,
            new_record: false,
            selected_tab: 0,
            show_help: false,
            plots: Plots::new(PLOTS.to_vec()),
            logs: Logs::new(),
            quit: false,
        }
    }

    /// Initialize the terminal and run the frame loop
    ///
    /// Input is drained between frames; exactly one tick runs per frame.
    /// Restores the terminal on exit
    pub fn run(&mut self) -> io::Result<()> {
        let (mut terminal, release_events) = tui::init()?;
        self.release_events = release_events;

        let mut deadline = Instant::now();
        while !self.quit {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                let event = event::read()?;
                self.handle_event(&event);
                continue;
            }

            deadline = Instant::now() + FRAME;
            self.tick();
            tui_logger::move_events();
            terminal.draw(|frame| frame.render_widget(&*self, frame.size()))?;
        }

        tui::restore()
    }

    fn tick(&mut self) {
        let previous_high = self.controller.telemetry().high_score;
        self.frame = self.controller.step(&self.keys);

        match self.frame.meta.ended {
            Some(EpisodeEnd {
                mode: Mode::Ai,
                generation: Some(generation),
                score,
            }) => {
                let t = &self.frame.meta.telemetry;
                self.plots.update(
                    generation,
                    &[score as f64, t.epsilon as f64, t.q_table_size as f64],
                );
            }
            Some(EpisodeEnd {
                mode: Mode::Manual,
                score,
                ..
            }) => self.new_record = score > previous_high,
            _ => {}
        }

        // Without release events a press holds its key for a single tick
        if !self.release_events {
            self.keys.clear();
        }
    }

    fn command(&mut self, result: error::Result<()>) {
        if let Err(err) = result {
            warn!("{err}");
        }
        self.frame = self.controller.step(&KeyState::new());
    }

    fn handle_event(&mut self, event: &Event) {
        let Event::Key(key) = event else {
            return;
        };

        if let KeyCode::Up | KeyCode::Down = key.code {
            if self.selected_tab == 0 {
                let arrow = if key.code == KeyCode::Up {
                    Key::Up
                } else {
                    Key::Down
                };
                match key.kind {
                    KeyEventKind::Release => self.keys.release(arrow),
                    _ => self.keys.press(arrow),
                }
                return;
            }
        }

        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('h') => self.show_help = !self.show_help,
            KeyCode::Tab => self.selected_tab = (self.selected_tab + 1) % TABS.len(),
            KeyCode::Char('m') => {
                self.new_record = false;
                let result = self.controller.start_episode(Mode::Manual);
                self.command(result);
            }
            KeyCode::Char('t') => {
                let result = self.controller.start_episode(Mode::Ai);
                self.command(result);
            }
            KeyCode::Char('s') => {
                let result = self.controller.stop_training();
                self.command(result);
            }
            KeyCode::Char('r') => {
                self.controller.reset_learning();
                self.plots.clear();
                self.command(Ok(()));
            }
            KeyCode::Enter => {
                let result = self.controller.acknowledge();
                self.command(result);
            }
            _ => match self.selected_tab {
                1 if key.code == KeyCode::Left => self.plots.prev_plot(),
                1 if key.code == KeyCode::Right => self.plots.next_plot(),
                2 => {
                    self.logs.handle_ui_event(event);
                }
                _ => {}
            },
        }
    }

    /// Message shown on top of the arena outside a running game
    fn overlay(&self) -> Option<Text<'static>> {
        let t = &self.frame.meta.telemetry;
        match t.phase {
            Phase::Idle => Some(Text::from(vec![
                Line::from("Dodge").bold(),
                Line::default(),
                Line::from("m : play manually with ⬆ / ⬇"),
                Line::from("t : train the Q-learning agent"),
                Line::from("h : help"),
                Line::default(),
                Line::from(format!(
                    "High score {}   Best AI {}   Generation {}",
                    t.high_score, t.best_ai_score, t.generation
                ))
                .dark_gray(),
            ])),
            Phase::Over => {
                let mut lines = vec![
                    Line::from("Game over!").light_red().bold(),
                    Line::from(format!("Final score {}", self.frame.score)),
                ];
                if self.new_record {
                    lines.push(Line::from("New record!").light_yellow().bold());
                }
                lines.push(Line::default());
                lines.push(Line::from("Enter : back to the menu"));
                Some(Text::from(lines))
            }
            Phase::RunningManual | Phase::RunningAi => None,
        }
    }
}

impl<R: Rng> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Layout
        let [menu_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);

        // Menu
        Tabs::new(TABS)
            .block(Block::default().padding(Padding::uniform(1)))
            .white()
            .bold()
            .highlight_style(Style::default().light_green())
            .select(self.selected_tab)
            .render(menu_area, buf);

        // Main
        match self.selected_tab {
            0 => {
                let [arena_area, stats_area] =
                    Layout::horizontal([Constraint::Fill(1), Constraint::Length(30)])
                        .areas(main_area);
                let field = self.controller.field();
                let arena = Arena::new(&self.frame, field.config());
                match self.overlay() {
                    Some(text) => arena.overlay(text).render(arena_area, buf),
                    None => arena.render(arena_area, buf),
                }
                Stats::new(&self.frame.meta.telemetry, field.obstacle_speed())
                    .render(stats_area, buf);
            }
            1 => self.plots.render(main_area, buf),
            2 => self.logs.render_ref(main_area, buf),
            _ => {}
        }

        // Exploration gauge
        let epsilon = self.frame.meta.telemetry.epsilon;
        Gauge::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("Exploration (epsilon)"),
            )
            .gauge_style(Color::Cyan)
            .label(format!("{epsilon:.3}"))
            .ratio(epsilon.clamp(0.0, 1.0) as f64)
            .render(status_area, buf);

        if self.show_help {
            render_help(area, buf, self.selected_tab);
        }
    }
}
