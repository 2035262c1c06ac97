// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;

use super::policy::{Light, Transform};

/// An inclusive, axis-aligned rectangle of grid coordinates.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Region {
    pub from_x: usize,
    pub from_y: usize,
    pub to_x: usize,
    pub to_y: usize,
}
impl Region {
    pub fn new(from: (usize, usize), to: (usize, usize)) -> Self {
        Region {
            from_x: from.0,
            from_y: from.1,
            to_x: to.0,
            to_y: to.1,
        }
    }
    pub fn is_reversed(&self) -> bool {
        self.to_x < self.from_x || self.to_y < self.from_y
    }
    pub fn fits_within(&self, size: usize) -> bool {
        self.from_x < size && self.from_y < size && self.to_x < size && self.to_y < size
    }
    /// Number of cells covered; zero for a reversed region, `None` if the
    /// count doesn't fit in a `usize`.
    pub fn area(&self) -> Option<usize> {
        if self.is_reversed() {
            return Some(0);
        }
        let width  = (self.to_x - self.from_x).checked_add(1)?;
        let height = (self.to_y - self.from_y).checked_add(1)?;
        width.checked_mul(height)
    }
}
impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{} through {},{}", self.from_x, self.from_y, self.to_x, self.to_y)
    }
}

// ------------------------------------------------

#[derive(PartialEq, Debug, Clone)]
pub enum RegionError {
    OutOfBounds(Region, usize), // some corner lies outside a grid of the given size
    Reversed(Region),           // a "to" coordinate is smaller than its "from" coordinate
}
impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegionError::OutOfBounds(region, size) =>
                write!(f, "region {} lies outside the {}x{} grid", region, size, size),
            RegionError::Reversed(region) =>
                write!(f, "region {} has reversed bounds", region),
        }
    }
}

// ------------------------------------------------

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Summary {
    LightsOn(u64),
    TotalBrightness(u64),
}
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Summary::LightsOn(n)        => write!(f, "Lights on: {}", n),
            Summary::TotalBrightness(n) => write!(f, "Total brightness: {}", n),
        }
    }
}

// ------------------------------------------------

#[derive(Clone)]
pub struct Grid<L: Light> {
    cells: Vec<Vec<L>>,
}
impl<L: Light> Grid<L> {
    pub fn new(size: usize)
        -> Self
    {
        Grid {
            cells: vec![vec![L::default(); size]; size],
        }
    }

    pub fn size(&self) -> usize { self.cells.len() }
    pub fn get(&self, x: usize, y: usize) -> Option<L> {
        self.cells.get(y)?.get(x).copied()
    }

    /// Replaces every cell inside `region` with `transform(cell)`.
    ///
    /// The region is checked before anything is written, so a rejected region
    /// leaves the grid exactly as it was.
    pub fn apply(&mut self, region: &Region, transform: Transform<L>)
        -> Result<(), RegionError>
    {
        if !region.fits_within(self.size()) {
            return Err(RegionError::OutOfBounds(*region, self.size()));
        }
        if region.is_reversed() {
            return Err(RegionError::Reversed(*region));
        }
        for row in &mut self.cells[region.from_y..=region.to_y] {
            for cell in &mut row[region.from_x..=region.to_x] {
                *cell = transform(*cell);
            }
        }
        Ok(())
    }

    pub fn summarize(&self) -> Summary {
        L::summarize(self.cells.iter().flatten())
    }
}

impl<L: Light> fmt::Debug for Grid<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(size={}, policy={})", self.size(), L::POLICY)
    }
}
