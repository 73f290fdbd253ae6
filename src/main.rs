//! Box Dash entry point
//!
//! Terminal front-end over the deterministic core: crossterm alternate
//! screen, arrow keys to move, a fixed 100 ms collision cadence. One surface
//! unit grid cell is 20x20 units, so one keypress moves the player one cell.

use std::io::{self, Stdout, Write};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use box_dash::sim::{BoundingBox, Direction, GameSession, SurfaceBounds};
use box_dash::stage::MemoryStage;
use box_dash::tuning::Tuning;

/// Surface units per terminal cell.
const UNITS_PER_CELL: f32 = 20.0;
/// Rows reserved for the score line.
const HUD_ROWS: u16 = 1;

fn main() -> io::Result<()> {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(Path::new(&path))?,
        None => Tuning::default(),
    };
    let seed = tuning.seed.unwrap_or_else(time_seed);
    log::info!("box-dash starting (seed {seed})");

    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, cursor::Hide)?;
    let result = run(&mut out, tuning, seed);
    execute!(out, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn run(out: &mut Stdout, tuning: Tuning, seed: u64) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    if rows <= HUD_ROWS || cols < 4 {
        execute!(
            out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print("Terminal too small.")
        )?;
        return Ok(());
    }

    let surface = SurfaceBounds::new(
        cols as f32 * UNITS_PER_CELL,
        (rows - HUD_ROWS) as f32 * UNITS_PER_CELL,
    );
    let mut stage =
        MemoryStage::with_element_sizes(surface, tuning.player_size, tuning.target_size);

    let poll_interval = Duration::from_millis(tuning.poll_interval_ms);
    let mut session = GameSession::new(seed, tuning);
    session.setup(&mut stage);

    let mut next_poll = Instant::now() + poll_interval;
    loop {
        draw(out, &session, cols, rows)?;

        // Single-threaded cooperative loop: block until the next key or the
        // next poll deadline, whichever comes first. Each branch runs to
        // completion before the other can fire.
        let timeout = next_poll.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(k) if k.kind == KeyEventKind::Press => match k.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Up => session.handle_move(&mut stage, Direction::Up),
                    KeyCode::Down => session.handle_move(&mut stage, Direction::Down),
                    KeyCode::Left => session.handle_move(&mut stage, Direction::Left),
                    KeyCode::Right => session.handle_move(&mut stage, Direction::Right),
                    _ => {}
                },
                _ => {}
            }
        }

        if Instant::now() >= next_poll {
            let outcome = session.poll(&mut stage);
            if outcome.hits > 0 {
                log::debug!("poll: {} hit(s), score {}", outcome.hits, session.score());
            }
            next_poll += poll_interval;
        }
    }
}

fn draw(out: &mut Stdout, session: &GameSession, cols: u16, rows: u16) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        Print(format!("Score: {}  (arrows move, q quits)", session.score()))
    )?;

    for target_box in session.targets().boxes() {
        draw_box(out, target_box, cols, rows, '▒')?;
    }
    if let Some(player_box) = session.player().and_then(|p| p.bounding_box()) {
        draw_box(out, &player_box, cols, rows, '█')?;
    }

    out.flush()
}

/// Paint the cells a box covers, clipped to the visible grid.
fn draw_box(out: &mut Stdout, b: &BoundingBox, cols: u16, rows: u16, glyph: char) -> io::Result<()> {
    let col0 = (b.left / UNITS_PER_CELL).floor() as i32;
    let col1 = (b.right / UNITS_PER_CELL).ceil() as i32 - 1;
    let row0 = (b.top / UNITS_PER_CELL).floor() as i32;
    let row1 = (b.bottom / UNITS_PER_CELL).ceil() as i32 - 1;

    for row in row0.max(0)..=row1.min(rows as i32 - 1 - HUD_ROWS as i32) {
        for col in col0.max(0)..=col1.min(cols as i32 - 1) {
            queue!(
                out,
                cursor::MoveTo(col as u16, row as u16 + HUD_ROWS),
                Print(glyph)
            )?;
        }
    }
    Ok(())
}
