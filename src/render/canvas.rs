//! Offscreen drawing surface.
//!
//! A [`Canvas`] is a grid of styled character cells backed by a
//! `ratatui` [`Buffer`]. Drawing happens at a cursor position; anything that
//! lands outside the grid is clipped. A rectangular region can be captured as
//! an immutable [`Snapshot`] and blitted back later.

use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::Style,
};

/// A cell coordinate. Signed so geometry can run off the edge before clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by another one.
    pub const fn offset(self, by: Point) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
        }
    }
}

/// A single character with its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledChar {
    pub ch: char,
    pub style: Style,
}

impl StyledChar {
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

/// An immutable capture of a canvas region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    buffer: Buffer,
}

impl Snapshot {
    pub fn width(&self) -> u16 {
        self.buffer.area.width
    }

    pub fn height(&self) -> u16 {
        self.buffer.area.height
    }

    /// The cell at `(x, y)` relative to the snapshot's top-left corner.
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.buffer.cell((x, y))
    }
}

/// A rectangular character-cell drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: Buffer,
    cursor: Point,
}

impl Canvas {
    /// Allocate a blank canvas of `width` x `height` cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, width, height)),
            cursor: Point::default(),
        }
    }

    pub fn width(&self) -> u16 {
        self.buffer.area.width
    }

    pub fn height(&self) -> u16 {
        self.buffer.area.height
    }

    /// The underlying cell buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn set_cursor(&mut self, pos: Point) {
        self.cursor = pos;
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.buffer.reset();
    }

    fn cell_mut(&mut self, pos: Point) -> Option<&mut Cell> {
        let x = u16::try_from(pos.x).ok()?;
        let y = u16::try_from(pos.y).ok()?;
        self.buffer.cell_mut((x, y))
    }

    /// The cell at `pos`, or `None` when it lies outside the canvas.
    pub fn cell(&self, pos: Point) -> Option<&Cell> {
        let x = u16::try_from(pos.x).ok()?;
        let y = u16::try_from(pos.y).ok()?;
        self.buffer.cell((x, y))
    }

    fn plot(&mut self, pos: Point, ch: StyledChar) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.set_char(ch.ch).set_style(ch.style);
        }
    }

    /// Write one styled character at the cursor. The cursor does not move.
    pub fn put_char(&mut self, ch: StyledChar) {
        self.plot(self.cursor, ch);
    }

    /// Write `text` left to right starting at the cursor, one cell per char.
    ///
    /// The cursor is left just past the last character.
    pub fn print(&mut self, text: &str, style: Style) {
        for ch in text.chars() {
            self.plot(self.cursor, StyledChar::new(ch, style));
            self.cursor.x += 1;
        }
    }

    /// Draw a straight line of `ch` from `from` to `to`, both ends inclusive.
    pub fn draw_line(&mut self, ch: StyledChar, from: Point, to: Point) {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx - dy;

        let mut x = from.x;
        let mut y = from.y;

        loop {
            self.plot(Point::new(x, y), ch);

            if x == to.x && y == to.y {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Capture `area` (clamped to the canvas) as an immutable snapshot.
    pub fn snapshot(&self, area: Rect) -> Snapshot {
        let area = area.intersection(self.buffer.area);
        let mut buffer = Buffer::empty(Rect::new(0, 0, area.width, area.height));

        for y in 0..area.height {
            for x in 0..area.width {
                if let (Some(src), Some(dst)) = (
                    self.buffer.cell((area.x + x, area.y + y)),
                    buffer.cell_mut((x, y)),
                ) {
                    *dst = src.clone();
                }
            }
        }

        Snapshot { buffer }
    }

    /// Capture the whole canvas.
    pub fn snapshot_all(&self) -> Snapshot {
        self.snapshot(self.buffer.area)
    }

    /// Copy `snapshot` onto the canvas with its top-left corner at `origin`.
    pub fn blit(&mut self, snapshot: &Snapshot, origin: Point) {
        for y in 0..snapshot.height() {
            for x in 0..snapshot.width() {
                let target = origin.offset(Point::new(i32::from(x), i32::from(y)));
                if let (Some(src), Some(dst)) = (snapshot.cell(x, y), self.cell_mut(target)) {
                    *dst = src.clone();
                }
            }
        }
    }

    /// Copy every cell into `target`, clipped to the overlap of both areas.
    pub fn render_into(&self, target: &mut Buffer) {
        let area = self.buffer.area.intersection(target.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let (Some(src), Some(dst)) = (self.buffer.cell((x, y)), target.cell_mut((x, y)))
                {
                    *dst = src.clone();
                }
            }
        }
    }

    /// The symbols of row `y` with trailing blanks removed.
    pub fn row_text(&self, y: u16) -> String {
        let mut line = String::with_capacity(self.width() as usize);
        for x in 0..self.width() {
            if let Some(cell) = self.buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        line.trim_end().to_string()
    }

    /// All rows joined with newlines, without styles.
    pub fn to_text(&self) -> String {
        (0..self.height())
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
