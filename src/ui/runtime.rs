use crate::component::MainScheduler;
use crate::config::UiConfig;
use crate::navigation::AppHost;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::map_key;
use crate::ui::layout::WindowSizeClass;
use crate::ui::render::draw;
use crate::ui::shell::Shell;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::view;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

/// Drive the component tree until the user quits.
///
/// This thread owns the tree: it runs queued main-thread tasks, feeds key
/// presses to the shell and redraws whenever something may have changed.
/// The window class is recomputed from the terminal width on every frame.
pub fn run(host: &mut AppHost, scheduler: &mut MainScheduler, config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let result = event_loop(&mut terminal, host, scheduler, config);
    host.destroy();
    drop(guard);
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    host: &mut AppHost,
    scheduler: &mut MainScheduler,
    config: &UiConfig,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut shell = Shell::new();
    let mut dirty = true;

    loop {
        if scheduler.run_pending() > 0 {
            dirty = true;
        }

        let width = terminal.size()?.width;
        let class = WindowSizeClass::classify(width, config);
        let current = view::build(host.root(), class);
        shell.sync(&current);

        if dirty {
            terminal.draw(|frame| draw(frame, &current, &shell))?;
            dirty = false;
        }
        if shell.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let Some(action) = map_key(key, shell.prompt_open()) {
                    shell.handle(host, &current, action);
                    dirty = true;
                }
            }
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "resize");
                dirty = true;
            }
            Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                return Err(io::Error::other("input thread stopped"));
            }
        }
    }
}
