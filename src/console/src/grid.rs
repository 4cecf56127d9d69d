//! Text grid renderer.
//!
//! Owns the character/color cell matrix and keeps the hardware cursor in sync
//! with the logical write position.

use core::fmt;
use dexis_common::{Color, ColorCode, ScreenChar};
use dexis_hal::{CellBuffer, Console, CursorRegisters};

/// Number of rows in VGA text mode.
pub const BUFFER_HEIGHT: usize = 25;

/// Number of columns in VGA text mode.
pub const BUFFER_WIDTH: usize = 80;

/// CRTC register: cursor start scan line.
const CRTC_CURSOR_START: u8 = 0x0A;
/// CRTC register: cursor end scan line.
const CRTC_CURSOR_END: u8 = 0x0B;
/// CRTC register: cursor location high byte.
const CRTC_CURSOR_HIGH: u8 = 0x0E;
/// CRTC register: cursor location low byte.
const CRTC_CURSOR_LOW: u8 = 0x0F;

/// Visible cursor shape: a full-height block, scan lines 0 through 15.
const CURSOR_SCANLINES: (u8, u8) = (0x00, 0x0F);

/// Glyph shown in place of bytes the grid cannot render.
const PLACEHOLDER: u8 = 0xFE;

/// An off-screen cell buffer held in ordinary memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBuffer {
    chars: [[ScreenChar; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

impl MemoryBuffer {
    /// Creates a buffer of default-colored blanks.
    pub fn new() -> Self {
        Self {
            chars: [[ScreenChar::blank(ColorCode::default()); BUFFER_WIDTH]; BUFFER_HEIGHT],
        }
    }

    /// Glyphs of one row, for inspection.
    pub fn row_bytes(&self, row: usize) -> [u8; BUFFER_WIDTH] {
        let mut out = [0u8; BUFFER_WIDTH];
        for (dst, cell) in out.iter_mut().zip(self.chars[row].iter()) {
            *dst = cell.ascii_character;
        }
        out
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellBuffer for MemoryBuffer {
    fn read(&self, row: usize, col: usize) -> ScreenChar {
        self.chars[row][col]
    }

    fn write(&mut self, row: usize, col: usize, cell: ScreenChar) {
        self.chars[row][col] = cell;
    }
}

/// A fixed 80x25 text grid.
///
/// Writes go straight to the backing [`CellBuffer`]; on memory-mapped
/// hardware they are visible immediately.
pub struct TextGrid<B, C> {
    buffer: B,
    cursor: C,
    /// Current row (0 to BUFFER_HEIGHT-1).
    row: usize,
    /// Current column (0 to BUFFER_WIDTH-1 after every public operation).
    column: usize,
    /// Current color code for new characters.
    color_code: ColorCode,
}

impl<B: CellBuffer, C: CursorRegisters> TextGrid<B, C> {
    /// Wraps a cell buffer and cursor register pair.
    ///
    /// Does not touch either device; call [`TextGrid::initialize`] for that.
    pub fn new(buffer: B, cursor: C) -> Self {
        Self {
            buffer,
            cursor,
            row: 0,
            column: 0,
            color_code: ColorCode::default(),
        }
    }

    /// Blanks the whole grid in the default color, homes the write position
    /// and turns the hardware cursor on.
    pub fn initialize(&mut self) {
        self.color_code = ColorCode::default();
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }
        self.row = 0;
        self.column = 0;
        self.update_hardware_cursor();
        self.enable_cursor();
    }

    /// Sets the foreground and background colors for subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color_code = ColorCode::new(foreground, background);
    }

    /// Current `(row, column)` write position.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Moves the write position, clamping it into the grid.
    pub fn set_position(&mut self, row: usize, column: usize) {
        self.row = row.min(BUFFER_HEIGHT - 1);
        self.column = column.min(BUFFER_WIDTH - 1);
        self.update_hardware_cursor();
    }

    /// Reads back a cell.
    pub fn cell(&self, row: usize, col: usize) -> ScreenChar {
        self.buffer.read(row, col)
    }

    /// The backing buffer.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// The cursor register pair.
    pub fn cursor_registers(&self) -> &C {
        &self.cursor
    }

    /// Writes a single byte.
    ///
    /// `\n` starts a new line, `\b` erases the previous cell (wrapping to the
    /// end of the previous row), everything else is drawn and advances the
    /// column. Running off the bottom scrolls.
    pub fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => self.new_line(),
            b'\x08' => {
                if self.column > 0 {
                    self.column -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.column = BUFFER_WIDTH - 1;
                }
                self.buffer
                    .write(self.row, self.column, ScreenChar::blank(self.color_code));
            }
            byte => {
                self.buffer.write(
                    self.row,
                    self.column,
                    ScreenChar {
                        ascii_character: byte,
                        color_code: self.color_code,
                    },
                );
                self.column += 1;
                if self.column == BUFFER_WIDTH {
                    self.new_line();
                }
            }
        }
        self.update_hardware_cursor();
    }

    /// Writes each byte of `s` in order. No word wrapping.
    pub fn write(&mut self, s: &str) {
        for byte in s.bytes() {
            self.put_char(byte);
        }
    }

    /// Moves every row up by one, blanks the last row and pins the write
    /// position to it.
    pub fn scroll(&mut self) {
        for row in 1..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                let character = self.buffer.read(row, col);
                self.buffer.write(row - 1, col, character);
            }
        }
        self.clear_row(BUFFER_HEIGHT - 1);
        self.row = BUFFER_HEIGHT - 1;
    }

    /// Pushes the write position to the CRTC cursor location registers.
    pub fn update_hardware_cursor(&mut self) {
        let pos = (self.row * BUFFER_WIDTH + self.column) as u16;
        self.cursor.write(CRTC_CURSOR_LOW, (pos & 0xFF) as u8);
        self.cursor.write(CRTC_CURSOR_HIGH, ((pos >> 8) & 0xFF) as u8);
    }

    /// Programs the visible cursor scan-line range.
    pub fn enable_cursor(&mut self) {
        let (start, end) = CURSOR_SCANLINES;
        self.cursor.write(CRTC_CURSOR_START, start);
        self.cursor.write(CRTC_CURSOR_END, end);
    }

    /// Repaints an input line in place.
    ///
    /// Blanks `clear_len` cells (at least to the right edge) starting at
    /// `(row, column)`, draws `text` from there, and parks the cursor `cursor`
    /// cells past the start. Text running past the right edge continues on
    /// the following rows. When the text or cursor would run off the bottom,
    /// the grid scrolls first and the span moves up with it; the row the span
    /// now starts on is returned.
    pub fn paint_span(
        &mut self,
        mut row: usize,
        column: usize,
        text: &[u8],
        cursor: usize,
        clear_len: usize,
    ) -> usize {
        const CELLS: usize = BUFFER_WIDTH * BUFFER_HEIGHT;
        let extent = text.len().max(cursor + 1);
        while row > 0 && row * BUFFER_WIDTH + column + extent > CELLS {
            self.scroll();
            row -= 1;
        }

        let origin = row * BUFFER_WIDTH + column;
        let blank = ScreenChar::blank(self.color_code);

        let clear_end = (origin + clear_len.max(BUFFER_WIDTH - column)).min(CELLS);
        for offset in origin..clear_end {
            self.buffer
                .write(offset / BUFFER_WIDTH, offset % BUFFER_WIDTH, blank);
        }

        for (i, &byte) in text.iter().enumerate() {
            let offset = origin + i;
            if offset >= CELLS {
                break;
            }
            self.buffer.write(
                offset / BUFFER_WIDTH,
                offset % BUFFER_WIDTH,
                ScreenChar {
                    ascii_character: byte,
                    color_code: self.color_code,
                },
            );
        }

        let offset = (origin + cursor).min(CELLS - 1);
        self.row = offset / BUFFER_WIDTH;
        self.column = offset % BUFFER_WIDTH;
        self.update_hardware_cursor();
        row
    }

    fn new_line(&mut self) {
        self.column = 0;
        self.row += 1;
        if self.row >= BUFFER_HEIGHT {
            self.scroll();
        }
    }

    /// Clears a single row by filling it with spaces.
    fn clear_row(&mut self, row: usize) {
        debug_assert!(row < BUFFER_HEIGHT, "row index out of bounds");

        let blank = ScreenChar::blank(self.color_code);
        for col in 0..BUFFER_WIDTH {
            self.buffer.write(row, col, blank);
        }
    }
}

impl<B: CellBuffer, C: CursorRegisters> fmt::Write for TextGrid<B, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            match byte {
                // Printable ASCII, newline or backspace
                0x20..=0x7e | b'\n' | b'\x08' => self.put_char(byte),
                // Non-printable: show placeholder
                _ => self.put_char(PLACEHOLDER),
            }
        }
        Ok(())
    }
}

impl<B: CellBuffer, C: CursorRegisters> Console for TextGrid<B, C> {
    fn write_str(&mut self, s: &str) {
        let _ = <Self as fmt::Write>::write_str(self, s);
    }

    fn clear(&mut self) {
        self.initialize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{memory_grid, row_text, RecordingCrtc};
    use core::fmt::Write;

    #[test]
    fn test_initialize_blanks_and_enables_cursor() {
        let mut buffer = MemoryBuffer::new();
        buffer.write(4, 4, ScreenChar::blank(ColorCode::new(Color::Red, Color::Blue)));
        buffer.write(0, 0, ScreenChar { ascii_character: b'j', color_code: ColorCode::default() });
        let mut grid = TextGrid::new(buffer, RecordingCrtc::default());
        grid.initialize();

        assert_eq!(grid.position(), (0, 0));
        assert_eq!(row_text(&grid, 0), "");
        assert_eq!(grid.cell(4, 4), ScreenChar::blank(ColorCode::default()));
        assert_eq!(
            grid.cursor_registers().writes(),
            &[(0x0F, 0), (0x0E, 0), (0x0A, 0x00), (0x0B, 0x0F)]
        );
    }

    #[test]
    fn test_initialize_restores_default_color() {
        let mut grid = memory_grid();
        grid.set_color(Color::Red, Color::Blue);
        grid.write("colored");
        grid.initialize();

        for row in 0..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                assert_eq!(grid.cell(row, col), ScreenChar::blank(ColorCode::default()));
            }
        }
        grid.put_char(b'x');
        assert_eq!(grid.cell(0, 0).color_code, ColorCode::default());
    }

    #[test]
    fn test_put_char_advances_and_wraps() {
        let mut grid = memory_grid();
        for _ in 0..BUFFER_WIDTH {
            grid.put_char(b'x');
        }
        assert_eq!(grid.position(), (1, 0));
        grid.put_char(b'y');
        assert_eq!(grid.cell(1, 0).ascii_character, b'y');
        assert_eq!(grid.position(), (1, 1));
    }

    #[test]
    fn test_backspace_wraps_to_previous_row() {
        let mut grid = memory_grid();
        grid.write("ab\n");
        grid.put_char(b'\x08');
        assert_eq!(grid.position(), (0, BUFFER_WIDTH - 1));

        let mut grid = memory_grid();
        grid.write("ab");
        grid.put_char(b'\x08');
        assert_eq!(grid.position(), (0, 1));
        assert_eq!(row_text(&grid, 0), "a");
    }

    #[test]
    fn test_backspace_at_origin_stays_put() {
        let mut grid = memory_grid();
        grid.put_char(b'q');
        grid.set_position(0, 0);
        grid.put_char(b'\x08');
        assert_eq!(grid.position(), (0, 0));
        assert_eq!(grid.cell(0, 0).ascii_character, b' ');
    }

    #[test]
    fn test_newline_on_last_row_scrolls() {
        let mut grid = memory_grid();
        for row in 0..BUFFER_HEIGHT {
            grid.set_position(row, 0);
            grid.put_char(b'a' + (row % 26) as u8);
        }
        grid.set_position(BUFFER_HEIGHT - 1, 5);
        grid.put_char(b'\n');

        assert_eq!(grid.position(), (BUFFER_HEIGHT - 1, 0));
        for row in 0..BUFFER_HEIGHT - 1 {
            let expected = [b'a' + ((row + 1) % 26) as u8];
            assert_eq!(row_text(&grid, row).as_bytes(), &expected);
        }
        assert_eq!(row_text(&grid, BUFFER_HEIGHT - 1), "");
    }

    #[test]
    fn test_hardware_cursor_tracks_position() {
        let mut grid = memory_grid();
        grid.set_position(3, 7);
        grid.put_char(b'z');

        // 3 * 80 + 8 = 248 = 0x00F8
        let writes = grid.cursor_registers().writes();
        assert_eq!(&writes[writes.len() - 2..], &[(0x0F, 0xF8), (0x0E, 0x00)]);
    }

    #[test]
    fn test_cursor_high_byte() {
        let mut grid = memory_grid();
        grid.set_position(BUFFER_HEIGHT - 1, BUFFER_WIDTH - 1);
        // 24 * 80 + 79 = 1999 = 0x07CF
        assert_eq!(grid.cursor_registers().last_position(), Some(1999));
    }

    #[test]
    fn test_color_applies_to_new_cells() {
        let mut grid = memory_grid();
        grid.set_color(Color::LightGreen, Color::Black);
        grid.put_char(b'g');
        assert_eq!(
            grid.cell(0, 0).color_code,
            ColorCode::new(Color::LightGreen, Color::Black)
        );
    }

    #[test]
    fn test_fmt_write_substitutes_placeholder() {
        let mut grid = memory_grid();
        write!(grid, "a\tb").expect("grid writes never fail");
        assert_eq!(grid.cell(0, 1).ascii_character, PLACEHOLDER);
        assert_eq!(grid.cell(0, 2).ascii_character, b'b');
    }

    #[test]
    fn test_paint_span_clears_stale_tail() {
        let mut grid = memory_grid();
        grid.write("dsh> hello world");
        grid.paint_span(0, 5, b"hi", 1, 10);

        assert_eq!(row_text(&grid, 0), "dsh> hi");
        assert_eq!(grid.position(), (0, 6));
    }

    #[test]
    fn test_paint_span_scrolls_instead_of_dropping() {
        let mut grid = memory_grid();
        grid.set_position(BUFFER_HEIGHT - 1, 0);
        grid.write("dsh> ");
        let text = [b'x'; 100];
        let row = grid.paint_span(BUFFER_HEIGHT - 1, 5, &text, 100, 127);

        assert_eq!(row, BUFFER_HEIGHT - 2);
        assert_eq!(row_text(&grid, BUFFER_HEIGHT - 2), format!("dsh> {}", "x".repeat(75)));
        assert_eq!(row_text(&grid, BUFFER_HEIGHT - 1), "x".repeat(25));
        assert_eq!(grid.position(), (BUFFER_HEIGHT - 1, 25));
    }

    #[test]
    fn test_paint_span_short_line_on_bottom_row_stays_put() {
        let mut grid = memory_grid();
        grid.set_position(BUFFER_HEIGHT - 1, 0);
        grid.write("dsh> ");
        let row = grid.paint_span(BUFFER_HEIGHT - 1, 5, b"ls", 2, 127);

        assert_eq!(row, BUFFER_HEIGHT - 1);
        assert_eq!(row_text(&grid, BUFFER_HEIGHT - 1), "dsh> ls");
        assert_eq!(row_text(&grid, BUFFER_HEIGHT - 2), "");
    }

    #[test]
    fn test_paint_span_cursor_at_grid_end_scrolls() {
        let mut grid = memory_grid();
        let text = [b'y'; BUFFER_WIDTH - 5];
        let row = grid.paint_span(BUFFER_HEIGHT - 1, 5, &text, text.len(), 127);

        // the cursor parks one past the text, which is the next row
        assert_eq!(row, BUFFER_HEIGHT - 2);
        assert_eq!(grid.position(), (BUFFER_HEIGHT - 1, 0));
    }

    #[test]
    fn test_console_clear_reinitializes() {
        let mut grid: TextGrid<MemoryBuffer, RecordingCrtc> = memory_grid();
        Console::write_str(&mut grid, "abc");
        Console::clear(&mut grid);
        assert_eq!(grid.position(), (0, 0));
        assert_eq!(row_text(&grid, 0), "");
    }
}
