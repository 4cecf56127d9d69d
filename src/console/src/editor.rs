//! Line editor: a [`LineBuffer`] bound to its place on the grid.
//!
//! Every call repaints the whole input region. The line is short and the grid
//! is 80 columns, so there is no incremental redraw.

use crate::config::LINE_CAPACITY;
use crate::grid::TextGrid;
use crate::line::{CursorMove, Line, LineBuffer};
use dexis_hal::{CellBuffer, CursorRegisters};

/// Edits one command line that starts right after the prompt.
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: LineBuffer,
    /// Grid row the input starts on.
    row: usize,
    /// Grid column the input starts at (the prompt width).
    column: usize,
}

impl LineEditor {
    /// An empty editor anchored at the grid origin.
    pub const fn new() -> Self {
        Self {
            buffer: LineBuffer::new(),
            row: 0,
            column: 0,
        }
    }

    /// Starts a new line at the grid's current write position.
    pub fn begin<B: CellBuffer, C: CursorRegisters>(&mut self, grid: &TextGrid<B, C>) {
        self.buffer = LineBuffer::new();
        (self.row, self.column) = grid.position();
    }

    /// Inserts at the cursor. No-op when the buffer is full.
    pub fn insert<B: CellBuffer, C: CursorRegisters>(
        &mut self,
        byte: u8,
        grid: &mut TextGrid<B, C>,
    ) {
        self.buffer.insert(byte);
        self.repaint(grid);
    }

    /// Deletes before the cursor. No-op at the line start.
    pub fn backspace<B: CellBuffer, C: CursorRegisters>(&mut self, grid: &mut TextGrid<B, C>) {
        self.buffer.backspace();
        self.repaint(grid);
    }

    /// Moves the cursor within `[0, len]`.
    pub fn move_cursor<B: CellBuffer, C: CursorRegisters>(
        &mut self,
        movement: CursorMove,
        grid: &mut TextGrid<B, C>,
    ) {
        self.buffer.move_cursor(movement);
        self.repaint(grid);
    }

    /// Replaces the line (history recall), cursor at the end.
    pub fn replace_all<B: CellBuffer, C: CursorRegisters>(
        &mut self,
        content: &str,
        grid: &mut TextGrid<B, C>,
    ) {
        self.buffer.replace_all(content);
        self.repaint(grid);
    }

    /// Finishes the line: parks the grid cursor after the text, moves to a
    /// fresh row and hands back the content. The editor is left empty.
    pub fn commit<B: CellBuffer, C: CursorRegisters>(&mut self, grid: &mut TextGrid<B, C>) -> Line {
        self.buffer.move_cursor(CursorMove::End);
        self.repaint(grid);
        grid.put_char(b'\n');
        self.buffer.commit()
    }

    /// The line being edited.
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Clears the input region, redraws the content and places the hardware
    /// cursor at `prompt width + cursor`. Follows the line up if the grid
    /// scrolled to fit it.
    fn repaint<B: CellBuffer, C: CursorRegisters>(&mut self, grid: &mut TextGrid<B, C>) {
        self.row = grid.paint_span(
            self.row,
            self.column,
            self.buffer.as_bytes(),
            self.buffer.cursor(),
            LINE_CAPACITY - 1,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BUFFER_HEIGHT;
    use crate::testutil::{memory_grid, row_text};

    #[test]
    fn test_insert_repaints_after_prompt() {
        let mut grid = memory_grid();
        grid.write("dsh> ");
        let mut editor = LineEditor::new();
        editor.begin(&grid);

        for &b in b"helo" {
            editor.insert(b, &mut grid);
        }
        editor.move_cursor(CursorMove::Left, &mut grid);
        editor.insert(b'l', &mut grid);

        assert_eq!(row_text(&grid, 0), "dsh> hello");
        assert_eq!(editor.buffer().cursor(), 4);
        assert_eq!(grid.position(), (0, 9));
        assert_eq!(grid.cursor_registers().last_position(), Some(9));
    }

    #[test]
    fn test_backspace_mid_line_repaints() {
        let mut grid = memory_grid();
        grid.write("> ");
        let mut editor = LineEditor::new();
        editor.begin(&grid);
        editor.replace_all("abcd", &mut grid);
        editor.move_cursor(CursorMove::Left, &mut grid);
        editor.backspace(&mut grid);

        assert_eq!(row_text(&grid, 0), "> abd");
        assert_eq!(grid.position(), (0, 4));
    }

    #[test]
    fn test_replace_all_clears_longer_previous_line() {
        let mut grid = memory_grid();
        grid.write("> ");
        let mut editor = LineEditor::new();
        editor.begin(&grid);
        editor.replace_all("a much longer line", &mut grid);
        editor.replace_all("ls", &mut grid);

        assert_eq!(row_text(&grid, 0), "> ls");
        assert_eq!(grid.position(), (0, 4));
    }

    #[test]
    fn test_home_end_move_hardware_cursor() {
        let mut grid = memory_grid();
        grid.set_position(2, 0);
        grid.write("dsh> ");
        let mut editor = LineEditor::new();
        editor.begin(&grid);
        editor.replace_all("echo", &mut grid);

        editor.move_cursor(CursorMove::Home, &mut grid);
        assert_eq!(grid.cursor_registers().last_position(), Some(2 * 80 + 5));
        editor.move_cursor(CursorMove::End, &mut grid);
        assert_eq!(grid.cursor_registers().last_position(), Some(2 * 80 + 9));
    }

    #[test]
    fn test_long_line_wraps_onto_next_row() {
        let mut grid = memory_grid();
        grid.write("dsh> ");
        let mut editor = LineEditor::new();
        editor.begin(&grid);
        for _ in 0..80 {
            editor.insert(b'x', &mut grid);
        }
        assert_eq!(row_text(&grid, 1), "xxxxx");
        assert_eq!(grid.position(), (1, 5));
    }

    #[test]
    fn test_long_line_on_bottom_row_scrolls_into_view() {
        let mut grid = memory_grid();
        grid.set_position(BUFFER_HEIGHT - 1, 0);
        grid.write("dsh> ");
        let mut editor = LineEditor::new();
        editor.begin(&grid);
        for _ in 0..100 {
            editor.insert(b'x', &mut grid);
        }
        // later edits repaint the moved line, not the row it started on
        editor.move_cursor(CursorMove::Home, &mut grid);
        editor.insert(b'y', &mut grid);

        assert_eq!(row_text(&grid, BUFFER_HEIGHT - 2), format!("dsh> y{}", "x".repeat(74)));
        assert_eq!(row_text(&grid, BUFFER_HEIGHT - 1), "x".repeat(26));
        assert_eq!(grid.position(), (BUFFER_HEIGHT - 2, 6));

        let line = editor.commit(&mut grid);
        assert_eq!(line.len(), 101);
        assert_eq!(grid.position(), (BUFFER_HEIGHT - 1, 0));
        assert_eq!(row_text(&grid, BUFFER_HEIGHT - 3), format!("dsh> y{}", "x".repeat(74)));
    }

    #[test]
    fn test_commit_moves_to_next_row() {
        let mut grid = memory_grid();
        grid.write("dsh> ");
        let mut editor = LineEditor::new();
        editor.begin(&grid);
        editor.replace_all("ls -l", &mut grid);
        editor.move_cursor(CursorMove::Home, &mut grid);

        let line = editor.commit(&mut grid);
        assert_eq!(line.as_str(), "ls -l");
        assert_eq!(grid.position(), (1, 0));
        assert!(editor.buffer().is_empty());
    }
}
