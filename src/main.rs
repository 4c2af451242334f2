// SPDX-License-Identifier: MIT
//
// blockprint — text as a row of colored blocks, updated in place.
//
// The binary wires the two library crates to stdin and stdout:
//
//   blockprint-core → normalize, reorder, diff, per-character colors
//   blockprint-term → block list, layout, differential ANSI rendering
//
// Each stdin line is one signal. Plain lines replace the text; `:` lines
// are commands. After every signal the patch is applied to the block list
// and only the changed cells are written out:
//
//   stdin → parse_line → App::handle → DisplayState → Patch
//         → BlockList::apply → paint → DiffRenderer → stdout
//
// Diagnostics (reports, errors, log output) go to stderr so stdout carries
// nothing but the frame.

mod app;
mod command;
mod settings;

use std::env;
use std::io::{self, BufRead};
use std::process;

use blockprint_term::terminal::{self, CursorGuard};

use crate::app::{App, Flow};
use crate::command::{Command, parse_line};
use crate::settings::{Settings, USAGE};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = match Settings::from_args(env::args().skip(1)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("blockprint: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if settings.help {
        println!("{USAGE}");
        return;
    }

    if let Err(e) = run(&settings) {
        eprintln!("blockprint: {e}");
        process::exit(1);
    }
}

fn run(settings: &Settings) -> io::Result<()> {
    let size = settings.frame_size();
    log::debug!(
        "frame {}x{}, order {}, layout {}",
        size.cols,
        size.rows,
        settings.order,
        settings.layout.map_or("(unset)", |m| m.name())
    );

    let mut guard = if terminal::stdout_is_tty() {
        Some(CursorGuard::hide()?)
    } else {
        None
    };

    let mut app = App::new(settings, size);
    let mut out = io::stdout().lock();
    let mut diag = io::stderr().lock();

    match &settings.text {
        Some(text) => {
            app.handle(Command::Text(text.clone()), &mut out, &mut diag)?;
        }
        None => app.redraw(&mut out)?,
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = parse_line(line.trim_end_matches('\r'));
        if app.handle(command, &mut out, &mut diag)? == Flow::Quit {
            break;
        }
    }

    if let Some(guard) = guard.as_mut() {
        guard.park_at(app.rows_used());
    }
    Ok(())
}
