//! The console session: every piece of console state in one owned value.
//!
//! The kernel builds exactly one over the VGA hardware; tests build as many
//! as they like over memory buffers.

use crate::config::ConsoleConfig;
use crate::editor::LineEditor;
use crate::grid::TextGrid;
use crate::history::HistoryStore;
use crate::keymap::{self, KeyAction};
use crate::line::{CursorMove, Line};
use crate::repeat::RepeatGovernor;
use dexis_common::{scancode, ModifierState};
use dexis_hal::{CellBuffer, CursorRegisters, IoDelay, ScancodeSource};

/// Grid, modifier flags, line editor, history and repeat timer.
pub struct ConsoleSession<B, C> {
    grid: TextGrid<B, C>,
    modifiers: ModifierState,
    governor: RepeatGovernor,
    editor: LineEditor,
    history: HistoryStore,
    config: ConsoleConfig,
}

impl<B: CellBuffer, C: CursorRegisters> ConsoleSession<B, C> {
    /// Creates a session. Hardware is untouched until [`Self::initialize`].
    pub fn new(buffer: B, cursor: C, config: ConsoleConfig) -> Self {
        Self {
            grid: TextGrid::new(buffer, cursor),
            modifiers: ModifierState::default(),
            governor: RepeatGovernor::new(config.repeat),
            editor: LineEditor::new(),
            history: HistoryStore::new(),
            config,
        }
    }

    /// Clears the screen and enables the hardware cursor.
    pub fn initialize(&mut self) {
        self.grid.initialize();
    }

    /// Writes the configured prompt.
    pub fn prompt(&mut self) {
        self.grid.write(self.config.prompt);
    }

    /// Polls `source` until a line is committed with Enter.
    ///
    /// Blocks for as long as it takes; there is nothing else to run. The line
    /// is recorded in history before it is returned.
    pub fn read_line<S, D>(&mut self, source: &mut S, delay: &mut D) -> Line
    where
        S: ScancodeSource,
        D: IoDelay,
    {
        self.editor.begin(&self.grid);
        self.governor.reset();
        let mut enter_down = false;

        loop {
            let raw = source.read_raw();

            if scancode::is_release(raw) {
                self.governor.step(raw);
                let code = scancode::make_code(raw);
                if scancode::is_shift(code) {
                    keymap::translate(raw, &mut self.modifiers);
                } else if code == scancode::ENTER && enter_down {
                    break;
                }
                continue;
            }

            let Some(code) = self.governor.step(raw) else {
                continue;
            };
            let Some(action) = keymap::action(code, &mut self.modifiers) else {
                continue;
            };

            match action {
                KeyAction::Left => self.editor.move_cursor(CursorMove::Left, &mut self.grid),
                KeyAction::Right => self.editor.move_cursor(CursorMove::Right, &mut self.grid),
                KeyAction::Home => self.editor.move_cursor(CursorMove::Home, &mut self.grid),
                KeyAction::End => self.editor.move_cursor(CursorMove::End, &mut self.grid),
                KeyAction::Up => {
                    if let Some(entry) = self.history.recall_older() {
                        self.editor.replace_all(entry, &mut self.grid);
                    }
                }
                KeyAction::Down => {
                    if let Some(entry) = self.history.recall_newer() {
                        self.editor.replace_all(entry, &mut self.grid);
                    }
                }
                KeyAction::EnterPressed => enter_down = true,
                KeyAction::Backspace => {
                    self.editor.backspace(&mut self.grid);
                    self.throttle(delay);
                }
                KeyAction::Char(byte) => {
                    self.editor.insert(byte, &mut self.grid);
                    self.throttle(delay);
                }
            }
        }

        let line = self.editor.commit(&mut self.grid);
        self.history.commit(line.as_str());
        log::debug!("line committed: {:?}", line.as_str());
        line
    }

    /// Spends the configured post-edit delay.
    fn throttle<D: IoDelay>(&self, delay: &mut D) {
        for _ in 0..self.config.edit_delay {
            delay.wait();
        }
    }

    /// The text grid.
    pub fn grid(&self) -> &TextGrid<B, C> {
        &self.grid
    }

    /// The text grid, for output between lines.
    pub fn grid_mut(&mut self) -> &mut TextGrid<B, C> {
        &mut self.grid
    }

    /// Committed line history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Current modifier flags.
    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

}
