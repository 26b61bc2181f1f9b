mod app;
mod config;
mod constants;
mod fragment_view;
mod handlers;
mod interpreter;
mod logger;
mod oneshot;
mod outbound;
mod types;
mod ui;

use std::sync::Arc;
use std::{io, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;

use orchestrator_core::SubmissionCore;

use app::App;
use handlers::InputHandler;
use interpreter::HttpInterpreter;
use outbound::UiOutbound;
use ui::layout::LayoutManager;
use ui::UI;

#[derive(Debug, Default)]
struct CliArgs {
    dream: Option<String>,
    html: bool,
    endpoint: Option<String>,
    help: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let endpoint = args.endpoint.clone().unwrap_or_else(config::endpoint);

    if let Some(dream) = &args.dream {
        return oneshot::run(dream, args.html, endpoint).await;
    }

    logger::init_logging()?;
    logger::log_event("BOOT", &format!("endpoint: {}", endpoint));

    let (core_tx, mut core_rx) = mpsc::channel(16);
    let (ui_tx, ui_rx) = mpsc::channel(64);

    let core = Arc::new(SubmissionCore::new(
        HttpInterpreter::new(client::Client::new(endpoint)?),
        UiOutbound(ui_tx),
    ));

    // One task per inbound message so a pending request never blocks the
    // next submission (the token guard settles who wins).
    tokio::spawn(async move {
        while let Some(msg) = core_rx.recv().await {
            let core = core.clone();
            tokio::spawn(async move {
                if let Err(e) = core.handle(msg).await {
                    logger::log_error("core", &e.to_string());
                }
            });
        }
    });

    let mut terminal = setup_terminal()?;
    let result = run_application(&mut terminal, core_tx, ui_rx).await;
    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dream" => out.dream = Some(args.next().context("--dream needs a value")?),
            "--html" => out.html = true,
            "--endpoint" => out.endpoint = Some(args.next().context("--endpoint needs a value")?),
            "--help" | "-h" => out.help = true,
            other => anyhow::bail!("unknown argument: {}", other),
        }
    }
    if out.html && out.dream.is_none() {
        anyhow::bail!("--html only applies to one-shot mode (--dream)");
    }
    Ok(out)
}

fn print_usage() {
    println!("dreamwalk — terminal client for the dream interpreter");
    println!();
    println!("  dreamwalk                     interactive TUI");
    println!("  dreamwalk --dream \"text\"      one-shot interpretation to stdout");
    println!("  dreamwalk --dream \"text\" --html   emit nested HTML instead");
    println!("  dreamwalk --endpoint URL      override {}", client::ENDPOINT_ENV);
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_application<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    core_tx: mpsc::Sender<protocol::Message>,
    mut ui_rx: mpsc::Receiver<protocol::Message>,
) -> Result<()> {
    let mut app = App::new(core_tx);

    loop {
        app.tick();

        while let Ok(msg) = ui_rx.try_recv() {
            app.apply_message(msg);
        }

        let size = terminal.size()?;
        let panes = LayoutManager::split(Rect::new(0, 0, size.width, size.height), &app.input);
        app.update_scroll_bounds(panes.output.height);

        terminal.draw(|frame| UI::draw(frame, &app))?;

        if should_quit(&mut app).await? {
            break;
        }
    }
    Ok(())
}

async fn should_quit(app: &mut App) -> Result<bool> {
    if event::poll(Duration::from_millis(constants::POLL_INTERVAL_MS))? {
        if let Event::Key(key) = event::read()? {
            return InputHandler::handle_key(app, key).await;
        }
    }
    Ok(false)
}
