//! Solved node positions.

use gw_core::{NodeId, Point};

/// Axis-aligned rectangle positions are confined to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Nearest point inside the rectangle. Inverted bounds pin to `max`.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.max(self.min.x).min(self.max.x),
            p.y.max(self.min.y).min(self.max.y),
        )
    }
}

/// Node id -> position, indexed by node slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub(crate) positions: Vec<Point>,
    pub(crate) bounds: Bounds,
}

impl Layout {
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.positions.get(id.slot()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &p)| (NodeId::from_usize(i), p))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_within_bounds(&self) -> bool {
        self.positions.iter().all(|&p| self.bounds.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_points_inside() {
        let b = Bounds {
            min: Point::new(30.0, 30.0),
            max: Point::new(470.0, 320.0),
        };
        assert_eq!(b.clamp(Point::new(-5.0, 400.0)), Point::new(30.0, 320.0));
        assert_eq!(b.clamp(Point::new(100.0, 100.0)), Point::new(100.0, 100.0));
    }

    #[test]
    fn inverted_bounds_do_not_panic() {
        let b = Bounds {
            min: Point::new(300.0, 300.0),
            max: Point::new(200.0, 50.0),
        };
        assert_eq!(b.clamp(Point::new(0.0, 0.0)), Point::new(200.0, 50.0));
    }
}
