// SPDX-License-Identifier: MIT
//
// App — wires the engine to the screen.
//
// Every command ends in the same place: whatever patch the engine produced
// is applied to the block list, the blocks are painted into the frame, and
// the renderer writes the difference to the output. Reports and errors go
// to a separate diagnostic stream so they never interleave with escapes.

use std::io::{self, Write};

use blockprint_core::{DisplayState, Patch};
use blockprint_term::terminal::Size;
use blockprint_term::{BlockList, DiffRenderer, FrameBuffer, paint};

use crate::command::{Assignment, Command, SetDirective, SettingName};
use crate::settings::Settings;

/// What the input loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    state: DisplayState,
    blocks: BlockList,
    frame: FrameBuffer,
    renderer: DiffRenderer,
}

impl App {
    #[must_use]
    pub fn new(settings: &Settings, size: Size) -> Self {
        Self {
            state: DisplayState::new(Some(settings.order), settings.layout),
            blocks: BlockList::new(),
            frame: FrameBuffer::new(size.cols, size.rows),
            renderer: DiffRenderer::new(),
        }
    }

    #[cfg(test)]
    const fn state(&self) -> &DisplayState {
        &self.state
    }

    #[cfg(test)]
    const fn blocks(&self) -> &BlockList {
        &self.blocks
    }

    /// Rows the painted blocks occupy, for parking the cursor on exit.
    #[must_use]
    pub fn rows_used(&self) -> u16 {
        (0..self.frame.height())
            .rev()
            .find(|&y| {
                self.frame
                    .row(y)
                    .is_some_and(|row| row.iter().any(|c| !c.bg.is_default()))
            })
            .map_or(0, |y| y + 1)
    }

    /// Paint the current blocks and write the frame to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn redraw(&mut self, out: &mut impl Write) -> io::Result<()> {
        let layout = self.state.layout().unwrap_or_default();
        let painted = paint(&self.blocks, layout, &mut self.frame);
        let stats = self.renderer.render(&self.frame);
        log::debug!(
            "frame: {} tiles ({} clipped), {} cells in {} bytes",
            painted.painted,
            painted.clipped,
            stats.cells_rendered,
            stats.bytes_written
        );
        self.renderer.flush_to(out)
    }

    /// Run one command.
    ///
    /// Engine errors and reports are written to `diag`; the loop keeps
    /// going after them.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` or `diag` fails.
    pub fn handle(
        &mut self,
        command: Command,
        out: &mut impl Write,
        diag: &mut impl Write,
    ) -> io::Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Text(text) => {
                let result = self.state.set_text(&text);
                self.apply(result, out, diag)?;
            }
            Command::Clear => {
                let result = self.state.set_text("");
                self.apply(result, out, diag)?;
            }
            Command::Set(directives) => {
                for directive in directives {
                    self.run_set(directive, out, diag)?;
                }
            }
            Command::Unknown(cmd) => {
                writeln!(diag, "blockprint: not a command: :{cmd}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn run_set(
        &mut self,
        directive: SetDirective,
        out: &mut impl Write,
        diag: &mut impl Write,
    ) -> io::Result<()> {
        match directive {
            SetDirective::ShowAll => {
                writeln!(diag, "  {}", self.describe(SettingName::Order))?;
                writeln!(diag, "  {}", self.describe(SettingName::Layout))?;
            }
            SetDirective::Query(name) => match SettingName::lookup(&name) {
                Some(setting) => writeln!(diag, "  {}", self.describe(setting))?,
                None => writeln!(diag, "blockprint: unknown setting `{name}`")?,
            },
            SetDirective::Assign(name, value) => match Assignment::resolve(&name, &value) {
                Ok(Assignment::Order(mode)) => {
                    if let Some(result) = self.state.set_order(mode).transpose() {
                        self.apply(result, out, diag)?;
                    }
                }
                Ok(Assignment::Layout(mode)) => {
                    if self.state.set_layout(mode) {
                        self.redraw(out)?;
                    }
                }
                Err(msg) => writeln!(diag, "blockprint: {msg}")?,
            },
        }
        Ok(())
    }

    fn describe(&self, setting: SettingName) -> String {
        let value = match setting {
            SettingName::Order => self.state.order().map(|m| m.name()),
            SettingName::Layout => self.state.layout().map(|m| m.name()),
        };
        format!("{}={}", setting.name(), value.unwrap_or("(unset)"))
    }

    fn apply(
        &mut self,
        result: blockprint_core::Result<Patch>,
        out: &mut impl Write,
        diag: &mut impl Write,
    ) -> io::Result<()> {
        let outcome = result.and_then(|patch| self.blocks.apply(&patch));
        match outcome {
            Ok(stats) => {
                debug_assert_eq!(self.blocks.symbols(), self.state.sequence().to_string());
                if stats.is_empty() {
                    Ok(())
                } else {
                    self.redraw(out)
                }
            }
            Err(e) => {
                log::error!("{e}");
                writeln!(diag, "blockprint: {e}")
            }
        }
    }
}
