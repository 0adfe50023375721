// Gridmark: mouse-driven tic-tac-toe marking board for the terminal

use std::io;
use std::process;

use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridmark::surface::BoundaryRule;
use gridmark::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--legacy-edges]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --legacy-edges   A release on a shared cell edge marks every");
    eprintln!("                   adjacent cell instead of exactly one");
    eprintln!("  -h, --help       Print this help");
    eprintln!();
    eprintln!("Left-click a cell to place the next mark; q or Esc quits.");
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never fight the TUI for stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("gridmark");

    let mut edges = BoundaryRule::HalfOpen;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--legacy-edges" => edges = BoundaryRule::InclusiveEdges,
            "-h" | "--help" => {
                print_usage(program_name);
                return Ok(());
            }
            unknown => {
                eprintln!("Error: Unknown argument '{}'", unknown);
                eprintln!();
                print_usage(program_name);
                process::exit(2);
            }
        }
    }

    info!(?edges, "starting gridmark");

    // Set up terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter the alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(edges);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("terminal restored");

    Ok(res?)
}
