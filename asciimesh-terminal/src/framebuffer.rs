/// Character grid with a parallel depth grid
use asciimesh_core::shading::BLANK;
use asciimesh_core::Viewport;

/// Depth every cell starts each frame with; any positive depth beats it
pub const DEPTH_SENTINEL: f32 = 0.0;

#[derive(Debug, Clone)]
pub struct FrameBuffer {
    viewport: Viewport,
    chars: Vec<char>,
    depth: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(viewport: Viewport) -> Self {
        let size = viewport.cell_count();
        Self {
            viewport,
            chars: vec![BLANK; size],
            depth: vec![DEPTH_SENTINEL; size],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn width(&self) -> usize {
        self.viewport.width
    }

    pub fn height(&self) -> usize {
        self.viewport.height
    }

    pub fn clear(&mut self) {
        self.chars.fill(BLANK);
        self.depth.fill(DEPTH_SENTINEL);
    }

    /// Reallocate for a new viewport. Contents are cleared.
    pub fn resize(&mut self, viewport: Viewport) {
        let size = viewport.cell_count();
        self.viewport = viewport;
        self.chars.clear();
        self.chars.resize(size, BLANK);
        self.depth.clear();
        self.depth.resize(size, DEPTH_SENTINEL);
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width() && y < self.height()).then(|| y * self.width() + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.index(x, y).map(|i| self.chars[i])
    }

    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    /// Write `glyph` at the cell if `depth` beats the stored depth.
    /// Returns whether the cell was written.
    pub fn plot(&mut self, x: usize, y: usize, depth: f32, glyph: char) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        if depth > self.depth[i] {
            self.depth[i] = depth;
            self.chars[i] = glyph;
            true
        } else {
            false
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks() rejects a zero chunk size
        self.chars.chunks(self.width().max(1))
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Rows joined with a newline leading every row after the first, so the
    /// text never ends in an extra blank line
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.chars.len() + self.height());
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                text.push('\n');
            }
            text.extend(row.iter());
        }
        text
    }

    pub fn covered_cells(&self) -> usize {
        self.chars.iter().filter(|&&c| c != BLANK).count()
    }
}
