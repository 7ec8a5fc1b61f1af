use std::{
    io::{self, stdout, Stdout},
    panic,
    sync::atomic::{AtomicBool, Ordering},
};

use crossterm as ct;
use ct::{
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// A type alias for the terminal type used in this application
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Set when key release reporting was pushed and must be popped on restore
static RELEASE_EVENTS: AtomicBool = AtomicBool::new(false);

/// Initialize the tui
///
/// **Returns** the terminal and whether it reports key releases, which lets held
/// arrow keys be tracked precisely
pub fn init() -> io::Result<(Tui, bool)> {
    init_panic_hook();
    enable_raw_mode()?;
    ct::execute!(stdout(), EnterAlternateScreen, Hide)?;

    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        ct::execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    RELEASE_EVENTS.store(release_events, Ordering::SeqCst);

    Ok((Terminal::new(CrosstermBackend::new(stdout()))?, release_events))
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    if RELEASE_EVENTS.swap(false, Ordering::SeqCst) {
        ct::execute!(stdout(), PopKeyboardEnhancementFlags)?;
    }
    ct::execute!(stdout(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    Ok(())
}

/// Setup panic hook
fn init_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
