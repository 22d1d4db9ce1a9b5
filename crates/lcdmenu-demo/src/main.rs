#![forbid(unsafe_code)]

//! Terminal preview of the icon menu.
//!
//! Renders the menu into a 128x64 framebuffer and prints it with
//! half-block characters. Arrow keys and Enter drive the menu; digits
//! switch the layout style live.

mod cli;
mod preview;
mod session;

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, queue, style, terminal};
use lcdmenu::prelude::*;
use lcdmenu::{FramebufferCanvas, PLUGINS_14};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::session::TerminalSession;

const POLL_INTERVAL: Duration = Duration::from_millis(30);

const SAMPLE_ITEMS: &[&str] = &[
    "Snake Game",
    "[NFC] Tag Reader",
    "[SubGHz] Remote Control Emulator",
    "Tetris",
    "Bluetooth Remote",
    "[GPIO] Logic Analyzer",
    "Music Player",
    "DTMF Dolphin",
    "[U2F] Security Key",
    "Barcode Generator",
];

fn main() -> ExitCode {
    let opts = cli::Opts::parse();
    if let Err(err) = init_tracing(&opts.log_file) {
        eprintln!("lcdmenu-demo: cannot open log file {}: {err}", opts.log_file);
        return ExitCode::FAILURE;
    }
    tracing::info!(style = %opts.style, position = opts.position, "demo starting");

    match run(&opts) {
        Ok(()) => {
            tracing::info!("demo finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "demo failed");
            eprintln!("lcdmenu-demo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(path: &str) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    Ok(())
}

fn run(opts: &cli::Opts) -> Result<()> {
    let style = SharedStyle::new(opts.style);
    let menu = Menu::with_style(opts.position, style.clone());
    let last_activation = Arc::new(AtomicI64::new(-1));
    for (index, label) in SAMPLE_ITEMS.iter().enumerate() {
        let last = Arc::clone(&last_activation);
        let icon = (index % 3 == 0).then_some(&PLUGINS_14);
        menu.add_action(*label, icon, index as u32 * 10, move |external| {
            tracing::info!(external, "item activated");
            last.store(i64::from(external), Ordering::SeqCst);
        });
    }

    let dirty = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&dirty);
    menu.set_redraw_hook(move || flag.store(true, Ordering::SeqCst));

    let view = menu.view();
    let mut session = TerminalSession::new()?;
    view.enter();
    let outcome = event_loop(&view, &style, &dirty, &last_activation);
    view.exit();
    session.restore();
    outcome
}

fn event_loop(
    view: &MenuView,
    style: &SharedStyle,
    dirty: &AtomicBool,
    last_activation: &AtomicI64,
) -> Result<()> {
    let mut stdout = io::stdout();
    loop {
        if dirty.swap(false, Ordering::SeqCst) {
            draw(&mut stdout, view, style.get(), last_activation.load(Ordering::SeqCst))?;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let raw = event::read()?;
        if let Event::Key(key) = &raw
            && key.kind != KeyEventKind::Release
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(c) => {
                    if let Some(next) = cli::style_for_digit(c) {
                        tracing::info!(style = %next, "style switched");
                        style.set(next);
                        dirty.store(true, Ordering::SeqCst);
                        continue;
                    }
                }
                _ => {}
            }
        }
        if matches!(raw, Event::Resize(..)) {
            dirty.store(true, Ordering::SeqCst);
        }
        if let Some(input) = InputEvent::from_crossterm(&raw)
            && !view.input(input)
        {
            tracing::trace!(?input, "input not consumed");
        }
    }
}

fn draw(out: &mut impl Write, view: &MenuView, current: MenuStyle, last: i64) -> Result<()> {
    let mut canvas = FramebufferCanvas::new();
    view.draw(&mut canvas);
    let rows = preview::half_block_rows(canvas.framebuffer());

    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    for (row, line) in rows.iter().enumerate() {
        queue!(out, cursor::MoveTo(0, row as u16), style::Print(line))?;
    }
    let status = if last >= 0 {
        format!("style: {current}  last activated: {last}")
    } else {
        format!("style: {current}")
    };
    queue!(
        out,
        cursor::MoveTo(0, rows.len() as u16 + 1),
        style::Print(status),
        cursor::MoveTo(0, rows.len() as u16 + 2),
        style::Print("arrows move, enter selects, 1-4 switch style, q quits"),
    )?;
    out.flush()?;
    Ok(())
}
