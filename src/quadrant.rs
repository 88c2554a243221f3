///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Imports
//
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::Data;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Quadrant
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// One of the four regions around the pod's center, numbered counter-clockwise
/// starting from +x/+y. Coordinates are center-relative with y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Data)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// Points on an axis belong to the quadrant on the non-negative side:
    /// `x = 0` counts as right of center and `y = 0` as above it.
    pub fn of(x: f64, y: f64) -> Self {
        if x >= 0.0 {
            if y >= 0.0 {
                Quadrant::First
            } else {
                Quadrant::Fourth
            }
        } else if y >= 0.0 {
            Quadrant::Second
        } else {
            Quadrant::Third
        }
    }

    pub fn number(self) -> usize {
        match self {
            Quadrant::First => 1,
            Quadrant::Second => 2,
            Quadrant::Third => 3,
            Quadrant::Fourth => 4,
        }
    }

    fn index(self) -> usize {
        self.number() - 1
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// QuadrantFlags
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// The quadrants the pointer passed through during the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuadrantFlags {
    touched: [bool; 4],
}

impl QuadrantFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.touched = [false; 4];
    }

    pub fn mark(&mut self, quadrant: Quadrant) {
        self.touched[quadrant.index()] = true;
    }

    pub fn is_touched(&self, quadrant: Quadrant) -> bool {
        self.touched[quadrant.index()]
    }
}
