//! Static catalog of named patterns that can be stamped onto the grid.
//!
//! Offsets are expressed as `(dx, dy)` pairs relative to an implicit anchor,
//! with `dx` growing to the right and `dy` growing downward. The catalog is
//! immutable and shared by every world instance.

/// Signed offset of a single live cell relative to a shape's anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellOffset {
    dx: i32,
    dy: i32,
}

impl CellOffset {
    /// Creates a new offset.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Horizontal component.
    #[must_use]
    pub const fn dx(&self) -> i32 {
        self.dx
    }

    /// Vertical component.
    #[must_use]
    pub const fn dy(&self) -> i32 {
        self.dy
    }

    /// Rotates the offset about the origin and snaps it to the nearest cell.
    ///
    /// Uses the standard rotation matrix, so with `dy` pointing down a
    /// positive angle turns the pattern clockwise on screen. Components are
    /// rounded half away from zero.
    #[must_use]
    pub fn rotated(self, angle_degrees: f64) -> Self {
        let radians = angle_degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        let dx = f64::from(self.dx);
        let dy = f64::from(self.dy);
        let rx = dx * cos - dy * sin;
        let ry = dx * sin + dy * cos;
        Self {
            dx: rx.round() as i32,
            dy: ry.round() as i32,
        }
    }
}

/// Named, fixed list of live-cell offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    name: &'static str,
    offsets: &'static [CellOffset],
}

impl Shape {
    const fn new(name: &'static str, offsets: &'static [CellOffset]) -> Self {
        Self { name, offsets }
    }

    /// Catalog name of the shape.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Offsets in catalog order.
    #[must_use]
    pub const fn offsets(&self) -> &'static [CellOffset] {
        self.offsets
    }

    /// Offsets rotated by `angle_degrees`, in catalog order.
    pub fn rotated_offsets(&self, angle_degrees: f64) -> impl Iterator<Item = CellOffset> + '_ {
        self.offsets
            .iter()
            .map(move |offset| offset.rotated(angle_degrees))
    }
}

const fn at(dx: i32, dy: i32) -> CellOffset {
    CellOffset::new(dx, dy)
}

/// Name of the single-cell shape.
pub const CELL: &str = "Cell";
/// Name of the five-cell glider.
pub const GLIDER: &str = "Glider";
/// Name of Gosper's glider gun.
pub const GOSPER_GLIDER_GUN: &str = "Gosper Glider Gun";

const CATALOG: &[Shape] = &[
    Shape::new(CELL, &[at(0, 0)]),
    Shape::new(
        GLIDER,
        &[at(0, 1), at(1, 2), at(2, 0), at(2, 1), at(2, 2)],
    ),
    Shape::new(
        GOSPER_GLIDER_GUN,
        &[
            at(1, 5),
            at(1, 6),
            at(2, 5),
            at(2, 6),
            at(11, 5),
            at(11, 6),
            at(11, 7),
            at(12, 4),
            at(12, 8),
            at(13, 3),
            at(13, 9),
            at(14, 3),
            at(14, 9),
            at(15, 6),
            at(16, 4),
            at(16, 8),
            at(17, 5),
            at(17, 6),
            at(17, 7),
            at(18, 6),
            at(21, 3),
            at(21, 4),
            at(21, 5),
            at(22, 3),
            at(22, 4),
            at(22, 5),
            at(23, 2),
            at(23, 6),
            at(25, 1),
            at(25, 2),
            at(25, 6),
            at(25, 7),
            at(35, 3),
            at(35, 4),
            at(36, 3),
            at(36, 4),
        ],
    ),
    Shape::new("Blinker", &[at(0, 0), at(1, 0), at(2, 0)]),
    Shape::new(
        "Toad",
        &[at(1, 0), at(2, 0), at(3, 0), at(0, 1), at(1, 1), at(2, 1)],
    ),
    Shape::new(
        "Beacon",
        &[
            at(0, 0),
            at(1, 0),
            at(0, 1),
            at(1, 1),
            at(2, 2),
            at(3, 2),
            at(2, 3),
            at(3, 3),
        ],
    ),
    Shape::new(
        "R-pentomino",
        &[at(1, 0), at(2, 0), at(0, 1), at(1, 1), at(1, 2)],
    ),
];

/// Every shape in catalog order, suitable for populating a selection control.
#[must_use]
pub fn catalog() -> &'static [Shape] {
    CATALOG
}

/// Looks up a shape by its exact catalog name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Shape> {
    CATALOG.iter().find(|shape| shape.name == name)
}
