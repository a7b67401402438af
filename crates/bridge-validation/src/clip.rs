use serde::{Deserialize, Serialize};

/// Axis aligned rectangle with a non-negative extent.
#[derive(Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Source and destination regions of a blit after clipping.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ClippedBlit {
    pub source: Rectangle,
    pub dest: Rectangle,
    /// `true` if either region does not cover its entire buffer.
    pub partial_copy: bool,
}

/// Half open interval along one axis.
#[derive(Debug, Copy, Clone)]
struct Span {
    start: i64,
    end: i64,
}

impl Rectangle {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from two corners given in any order.
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x, width) = normalize(x0, x1);
        let (y, height) = normalize(y0, y1);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// `true` if the rectangle is exactly the buffer `(0, 0, width, height)`.
    #[inline]
    pub fn covers(&self, (width, height): (i32, i32)) -> bool {
        self.x == 0 && self.y == 0 && self.width == width && self.height == height
    }

    #[inline]
    fn x_span(&self) -> Span {
        Span::new(self.x as i64, self.width as i64)
    }

    #[inline]
    fn y_span(&self) -> Span {
        Span::new(self.y as i64, self.height as i64)
    }

    #[inline]
    fn from_spans(x: Span, y: Span) -> Self {
        Self {
            x: saturate(x.start),
            y: saturate(y.start),
            width: saturate(x.len()),
            height: saturate(y.len()),
        }
    }
}

impl Span {
    #[inline]
    fn new(start: i64, len: i64) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    #[inline]
    fn len(&self) -> i64 {
        (self.end - self.start).max(0)
    }

    /// Clamps the span to `[0, limit)`.
    #[inline]
    fn intersect(self, limit: i64) -> Self {
        let start = self.start.clamp(0, limit);
        let end = self.end.clamp(start, limit);
        Self { start, end }
    }
}

/// Clips the corners of a blit against the read and draw buffer extents.
///
/// Unscaled blits keep a one to one mapping between texels, so a cut on one side is mirrored on
/// the other. Scaled blits clip each region against its own buffer. Returns `None` if either
/// buffer is empty.
pub fn clip_blit_rectangles(
    [src_x0, src_y0, src_x1, src_y1]: [i32; 4],
    [dst_x0, dst_y0, dst_x1, dst_y1]: [i32; 4],
    read_size: (i32, i32),
    draw_size: (i32, i32),
) -> Option<ClippedBlit> {
    if read_size.0 <= 0 || read_size.1 <= 0 || draw_size.0 <= 0 || draw_size.1 <= 0 {
        return None;
    }

    let source = Rectangle::from_corners(src_x0, src_y0, src_x1, src_y1);
    let dest = Rectangle::from_corners(dst_x0, dst_y0, dst_x1, dst_y1);

    let (src_x, dst_x) = clip_axis(
        source.x_span(),
        dest.x_span(),
        read_size.0 as i64,
        draw_size.0 as i64,
    );
    let (src_y, dst_y) = clip_axis(
        source.y_span(),
        dest.y_span(),
        read_size.1 as i64,
        draw_size.1 as i64,
    );

    let source = Rectangle::from_spans(src_x, src_y);
    let dest = Rectangle::from_spans(dst_x, dst_y);

    Some(ClippedBlit {
        source,
        dest,
        partial_copy: !source.covers(read_size) || !dest.covers(draw_size),
    })
}

fn clip_axis(src: Span, dst: Span, read_limit: i64, draw_limit: i64) -> (Span, Span) {
    if src.len() != dst.len() {
        return (src.intersect(read_limit), dst.intersect(draw_limit));
    }

    // Lockstep
    let front = (-src.start).max(-dst.start).max(0);
    let back = (src.end - read_limit).max(dst.end - draw_limit).max(0);
    let len = (src.len() - front - back).max(0);

    (
        Span::new(src.start + front, len),
        Span::new(dst.start + front, len),
    )
}

#[inline]
fn normalize(a: i32, b: i32) -> (i32, i32) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    (lo, saturate(hi as i64 - lo as i64))
}

#[inline]
fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
