use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use donut_counter::constants::{INPUT_POLL_MS, TICK_INTERVAL_MS};
use donut_counter::game_logic::{add_donut, reset_counter, update_notifications};
use donut_counter::game_state::GameState;
use donut_counter::ui::draw_ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut state = GameState::new();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, &state))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') | KeyCode::Char('+') | KeyCode::Enter => {
                        add_donut(&mut state);
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        reset_counter(&mut state);
                    }
                    _ => {}
                }
            }
        }

        // Age unlock popups every 100ms
        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            let delta = last_tick.elapsed().as_secs_f64();
            update_notifications(&mut state, delta);
            last_tick = Instant::now();
        }
    }

    // Cleanup terminal; dropping the state cancels any pending popups
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Donuts eaten this session: {}", state.donut_count);

    Ok(())
}
