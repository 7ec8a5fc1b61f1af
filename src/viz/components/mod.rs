pub mod arena;
pub mod help;
pub mod log;
pub mod plot;
pub mod stats;

use crossterm::event::Event;
pub use arena::Arena;
pub use log::Logs;
pub use plot::Plots;
use ratatui::widgets::WidgetRef;
pub use stats::Stats;

pub trait Component: WidgetRef {
    /// Handle a terminal event, **returns** whether it was consumed
    fn handle_ui_event(&mut self, event: &Event) -> bool;
}
