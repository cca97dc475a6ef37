//! The [`Board`]: endpoint and obstacle state for one grid.
//!
//! A board answers, for any coordinate, whether it is an obstacle, the start,
//! or the end. It holds no search state and no rendering state; the search
//! engine consumes it through a plain obstacle predicate.

use log::info;
use rand::Rng;
use rand::RngExt;

use crate::geom::{Point, Range};

/// Endpoint and obstacle state for a `width × height` grid.
///
/// Start, end, and obstacle are mutually exclusive roles per cell:
/// designating an endpoint clears any other role the cell held, and obstacle
/// edits never overwrite an endpoint.
#[derive(Debug, Clone)]
pub struct Board {
    size: Point,
    obstacles: Vec<bool>,
    start: Option<Point>,
    end: Option<Point>,
}

impl Board {
    /// Create an empty board of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            size: Point::new(w, h),
            obstacles: vec![false; (w as usize) * (h as usize)],
            start: None,
            end: None,
        }
    }

    /// Board dimensions as (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    /// Width of the board.
    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    /// Height of the board.
    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// The bounding range of the board.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size.x, self.size.y)
    }

    /// Total number of cells.
    #[inline]
    pub fn total_cells(&self) -> usize {
        (self.size.x as usize) * (self.size.y as usize)
    }

    /// Whether `p` is inside the board.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.in_bounds(p) {
            return None;
        }
        Some((p.y as usize) * (self.size.x as usize) + (p.x as usize))
    }

    // -----------------------------------------------------------------------
    // Endpoints
    // -----------------------------------------------------------------------

    /// The start cell, if one is set.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The end cell, if one is set.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Whether both endpoints are set.
    #[inline]
    pub fn has_endpoints(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Whether `p` is the start cell.
    #[inline]
    pub fn is_start(&self, p: Point) -> bool {
        self.start == Some(p)
    }

    /// Whether `p` is the end cell.
    #[inline]
    pub fn is_end(&self, p: Point) -> bool {
        self.end == Some(p)
    }

    /// Designate `p` as the start cell, clearing any other role it held.
    ///
    /// Designating the current start again removes it instead (toggle).
    /// Returns whether `p` is the start afterwards.
    pub fn set_start(&mut self, p: Point) -> bool {
        if !self.in_bounds(p) {
            return false;
        }
        if self.start == Some(p) {
            self.start = None;
            return false;
        }
        self.remove_obstacle(p);
        if self.end == Some(p) {
            self.end = None;
        }
        self.start = Some(p);
        info!("start cell set at {p}");
        true
    }

    /// Designate `p` as the end cell, clearing any other role it held.
    ///
    /// Designating the current end again removes it instead (toggle).
    /// Returns whether `p` is the end afterwards.
    pub fn set_end(&mut self, p: Point) -> bool {
        if !self.in_bounds(p) {
            return false;
        }
        if self.end == Some(p) {
            self.end = None;
            return false;
        }
        self.remove_obstacle(p);
        if self.start == Some(p) {
            self.start = None;
        }
        self.end = Some(p);
        info!("end cell set at {p}");
        true
    }

    // -----------------------------------------------------------------------
    // Obstacles
    // -----------------------------------------------------------------------

    /// Whether `p` is an obstacle. Out-of-bounds coordinates are not.
    ///
    /// Pure and stable between mutations; this is the obstacle predicate the
    /// search engine consumes.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.idx(p).map(|i| self.obstacles[i]).unwrap_or(false)
    }

    /// Flip the obstacle state of `p`. Endpoint cells are left untouched.
    ///
    /// Returns whether `p` is an obstacle afterwards.
    pub fn toggle_obstacle(&mut self, p: Point) -> bool {
        if self.is_obstacle(p) {
            self.remove_obstacle(p);
            false
        } else {
            self.add_obstacle(p)
        }
    }

    /// Place an obstacle at `p`. Endpoint cells and existing obstacles are
    /// left untouched. Returns whether the board changed.
    pub fn add_obstacle(&mut self, p: Point) -> bool {
        if self.start == Some(p) || self.end == Some(p) {
            return false;
        }
        let Some(i) = self.idx(p) else {
            return false;
        };
        if self.obstacles[i] {
            return false;
        }
        self.obstacles[i] = true;
        info!("obstacle added at {p}");
        true
    }

    /// Remove the obstacle at `p`. Returns whether the board changed.
    pub fn remove_obstacle(&mut self, p: Point) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        if !self.obstacles[i] {
            return false;
        }
        self.obstacles[i] = false;
        info!("obstacle removed at {p}");
        true
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.iter().filter(|&&b| b).count()
    }

    /// Number of cells that are neither an endpoint nor an obstacle.
    pub fn free_cells(&self) -> usize {
        self.bounds()
            .iter()
            .filter(|&p| !self.is_obstacle(p) && self.start != Some(p) && self.end != Some(p))
            .count()
    }

    /// Place obstacles on `percent`% of the currently free cells, at
    /// uniformly random coordinates.
    ///
    /// Placement retries on occupied cells, bounded by twice the free-cell
    /// count in attempts. Returns the number of obstacles placed.
    pub fn scatter_obstacles<R: Rng>(&mut self, rng: &mut R, percent: u32) -> usize {
        let free = self.free_cells();
        let target = free * (percent as usize) / 100;
        let max_attempts = free * 2;

        let mut placed = 0;
        let mut attempts = 0;
        while placed < target && attempts < max_attempts {
            let p = Point::new(
                rng.random_range(0..self.size.x.max(1)),
                rng.random_range(0..self.size.y.max(1)),
            );
            if self.add_obstacle(p) {
                placed += 1;
            }
            attempts += 1;
        }
        info!("placed {placed} random obstacles ({percent}% of {free} free cells)");
        placed
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Remove both endpoints and every obstacle.
    pub fn clear_all(&mut self) {
        self.start = None;
        self.end = None;
        self.obstacles.fill(false);
        info!("all cells cleared");
    }

    /// Resize the board. Endpoints and obstacles are reset; positions from
    /// the old dimensions do not carry over.
    pub fn resize(&mut self, width: i32, height: i32) {
        let w = width.max(0);
        let h = height.max(0);
        self.size = Point::new(w, h);
        self.obstacles = vec![false; (w as usize) * (h as usize)];
        self.start = None;
        self.end = None;
        info!("board resized to {w}x{h}");
    }
}
