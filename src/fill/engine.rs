//! Breadth-first region traversal.
//!
//! The region is scanned against the seed colour captured before anything
//! is written, so repainting cannot make the region grow or drift.

use std::collections::VecDeque;

use crate::buffer::PixelBuffer;
use crate::types::{Colour, Point};

use super::FillPolicy;

/// Inclusive pixel bounds of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    fn single(p: Point) -> Self {
        Self { min: p, max: p }
    }

    fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn width(&self) -> u32 {
        self.max.x - self.min.x + 1
    }

    pub fn height(&self) -> u32 {
        self.max.y - self.min.y + 1
    }
}

/// The connected pixels reachable from a seed.
#[derive(Debug, Clone)]
pub struct Region {
    /// Seed colour every member was matched against.
    pub reference: Colour,

    /// One flag per pixel, row-major, set for region members.
    mask: Vec<bool>,

    /// Number of set flags in `mask`.
    count: usize,

    /// Bounding box of the members, if any.
    bounds: Option<Bounds>,

    width: u32,
}

impl Region {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Whether a point belongs to the region.
    pub fn contains(&self, p: Point) -> bool {
        let i = p.y as usize * self.width as usize + p.x as usize;
        self.mask.get(i).copied().unwrap_or(false)
    }

    /// Iterate over member points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width;
        self.bounds.into_iter().flat_map(move |b| {
            (b.min.y..=b.max.y).flat_map(move |y| {
                (b.min.x..=b.max.x)
                    .map(move |x| Point::new(x, y))
                    .filter(move |&p| self.mask[p.y as usize * width as usize + p.x as usize])
            })
        })
    }
}

/// Find the 4-connected region around `seed` whose pixels match the seed's
/// colour under `policy`.
///
/// Neighbours are queued without a visited check; the check happens when
/// they are popped. Only matching pixels are marked visited, so a pixel is
/// queued at most once per neighbour and accepted at most once.
pub fn scan_region(buffer: &PixelBuffer<'_>, seed: Point, policy: &FillPolicy) -> Region {
    let width = buffer.width();
    let height = buffer.height();
    let reference = buffer.get(seed);

    let mut visited = vec![false; buffer.len()];
    let mut queue = VecDeque::new();
    let mut count = 0;
    let mut bounds: Option<Bounds> = None;

    queue.push_back(seed);

    while let Some(p) = queue.pop_front() {
        let i = buffer.index(p);
        if visited[i] {
            continue;
        }

        if !policy.matches(buffer.get(p), reference) {
            continue;
        }

        visited[i] = true;
        count += 1;
        match bounds.as_mut() {
            Some(b) => b.include(p),
            None => bounds = Some(Bounds::single(p)),
        }

        if p.x > 0 {
            queue.push_back(Point::new(p.x - 1, p.y));
        }
        if p.x + 1 < width {
            queue.push_back(Point::new(p.x + 1, p.y));
        }
        if p.y > 0 {
            queue.push_back(Point::new(p.x, p.y - 1));
        }
        if p.y + 1 < height {
            queue.push_back(Point::new(p.x, p.y + 1));
        }
    }

    Region {
        reference,
        mask: visited,
        count,
        bounds,
        width,
    }
}

/// Write `colour` at full opacity over every member of `region`.
pub fn paint_region(buffer: &mut PixelBuffer<'_>, region: &Region, colour: Colour) {
    let colour = colour.with_alpha(255);
    for p in region.points() {
        buffer.set(p, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(width: u32, height: u32) -> Vec<u8> {
        [255u8; 4].repeat((width * height) as usize)
    }

    #[test]
    fn test_scan_whole_canvas() {
        let mut data = white(5, 3);
        let buf = PixelBuffer::new(&mut data, 5, 3).unwrap();
        let region = scan_region(&buf, Point::new(2, 1), &FillPolicy::default());

        assert_eq!(region.len(), 15);
        assert_eq!(region.reference, Colour::WHITE);
        let b = region.bounds().unwrap();
        assert_eq!((b.min, b.max), (Point::new(0, 0), Point::new(4, 2)));
        assert_eq!((b.width(), b.height()), (5, 3));
    }

    #[test]
    fn test_scan_stops_at_non_matching() {
        // Vertical black line at x = 1
        let mut data = white(3, 3);
        {
            let mut buf = PixelBuffer::new(&mut data, 3, 3).unwrap();
            for y in 0..3 {
                buf.set(Point::new(1, y), Colour::BLACK);
            }
        }
        let buf = PixelBuffer::new(&mut data, 3, 3).unwrap();
        let region = scan_region(&buf, Point::new(0, 0), &FillPolicy::default());

        assert_eq!(region.len(), 3);
        assert!(region.contains(Point::new(0, 2)));
        assert!(!region.contains(Point::new(1, 0)));
        assert!(!region.contains(Point::new(2, 0)));
    }

    #[test]
    fn test_scan_is_four_connected() {
        // Diagonal neighbours do not join: only (0,0) and (1,1) are white.
        let mut data = [0u8, 0, 0, 255].repeat(4);
        {
            let mut buf = PixelBuffer::new(&mut data, 2, 2).unwrap();
            buf.set(Point::new(0, 0), Colour::WHITE);
            buf.set(Point::new(1, 1), Colour::WHITE);
        }
        let buf = PixelBuffer::new(&mut data, 2, 2).unwrap();
        let region = scan_region(&buf, Point::new(0, 0), &FillPolicy::default());

        assert_eq!(region.len(), 1);
        assert!(!region.contains(Point::new(1, 1)));
    }

    #[test]
    fn test_points_row_major() {
        let mut data = white(2, 2);
        let buf = PixelBuffer::new(&mut data, 2, 2).unwrap();
        let region = scan_region(&buf, Point::new(1, 1), &FillPolicy::default());

        let points: Vec<Point> = region.points().collect();
        assert_eq!(
            points,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn test_paint_forces_opaque() {
        let mut data = white(2, 1);
        let region = {
            let buf = PixelBuffer::new(&mut data, 2, 1).unwrap();
            scan_region(&buf, Point::new(0, 0), &FillPolicy::default())
        };
        let mut buf = PixelBuffer::new(&mut data, 2, 1).unwrap();
        paint_region(&mut buf, &region, Colour::new(1, 2, 3, 0));

        assert_eq!(buf.as_bytes(), &[1, 2, 3, 255, 1, 2, 3, 255]);
    }
}
