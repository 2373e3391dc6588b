use super::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// Keep the current heading. Never a physical direction.
    Continue,
}

impl Direction {
    pub const ALL_PHYSICAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub fn is_continue(&self) -> bool {
        matches!(self, Direction::Continue)
    }

    /// Unit offset `(dx, dy)` with `y` growing downwards.
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            Direction::Up => Some((0, -1)),
            Direction::Down => Some((0, 1)),
            Direction::Left => Some((-1, 0)),
            Direction::Right => Some((1, 0)),
            Direction::Continue => None,
        }
    }

    pub fn opposite(&self) -> Option<Direction> {
        match self {
            Direction::Up => Some(Direction::Down),
            Direction::Down => Some(Direction::Up),
            Direction::Left => Some(Direction::Right),
            Direction::Right => Some(Direction::Left),
            Direction::Continue => None,
        }
    }

    /// Index of the bond slot this direction addresses.
    pub(crate) fn slot(&self) -> Option<usize> {
        match self {
            Direction::Up => Some(0),
            Direction::Down => Some(1),
            Direction::Left => Some(2),
            Direction::Right => Some(3),
            Direction::Continue => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Left => write!(f, "Left"),
            Direction::Right => write!(f, "Right"),
            Direction::Continue => write!(f, "Continue"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn project(&self, direction: Direction) -> Result<Point, Error> {
        let (dx, dy) = direction.delta().ok_or(Error::ContinueProjection)?;
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(Error::CoordinateOverflow {
                from: *self,
                direction,
            }),
        }
    }

    /// Rotates this point a quarter turn about `origin`.
    pub fn rotate(&self, origin: Point, clockwise: bool) -> Point {
        if clockwise {
            Point::new(origin.x - origin.y + self.y, origin.x + origin.y - self.x)
        } else {
            Point::new(origin.x + origin.y - self.y, origin.y - origin.x + self.x)
        }
    }

    /// Saturates at `i64::MAX` for points at opposite ends of the `i32` range.
    #[inline]
    pub fn distance_squared(&self, other: Point) -> i64 {
        let (dx, dy) = self.offset_to(other);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    pub fn direction_to(&self, target: Point) -> Result<Direction, Error> {
        match self.offset_to(target) {
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            _ => Err(Error::NotAdjacent {
                from: *self,
                to: target,
            }),
        }
    }

    #[inline]
    fn offset_to(&self, target: Point) -> (i64, i64) {
        (
            i64::from(target.x) - i64::from(self.x),
            i64::from(target.y) - i64::from(self.y),
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, Error> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidRectangle { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        let span = |start: i32, len: i32, v: i32| {
            let (start, v) = (i64::from(start), i64::from(v));
            (start..start + i64::from(len)).contains(&v)
        };
        span(self.x, self.width, point.x) && span(self.y, self.height, point.y)
    }

    pub fn contains_all<I>(&self, points: I) -> bool
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().all(|p| self.contains(p))
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{} {}x{}]",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_moves_one_cell() {
        let p = Point::new(1, 1);
        assert_eq!(p.project(Direction::Down).unwrap(), Point::new(1, 2));
        assert_eq!(p.project(Direction::Up).unwrap(), Point::new(1, 0));
        assert_eq!(p.project(Direction::Right).unwrap(), Point::new(2, 1));
        assert_eq!(p.project(Direction::Left).unwrap(), Point::new(0, 1));
    }

    #[test]
    fn project_rejects_continue() {
        let err = Point::new(1, 1).project(Direction::Continue).unwrap_err();
        assert_eq!(err, Error::ContinueProjection);
    }

    #[test]
    fn rotate_about_origin() {
        let origin = Point::new(2, 1);
        assert_eq!(Point::new(2, 0).rotate(origin, true), Point::new(1, 1));
        assert_eq!(Point::new(1, 0).rotate(origin, true), Point::new(1, 2));
        assert_eq!(Point::new(0, 0).rotate(origin, true), Point::new(1, 3));
        assert_eq!(Point::new(5, 0).rotate(origin, false), Point::new(3, 4));
    }

    #[test]
    fn rotate_four_times_is_identity() {
        let origin = Point::new(3, -2);
        let start = Point::new(7, 5);
        let mut p = start;
        for _ in 0..4 {
            p = p.rotate(origin, true);
        }
        assert_eq!(p, start);
        assert_eq!(start.rotate(origin, true).rotate(origin, false), start);
    }

    #[test]
    fn direction_to_adjacent_points() {
        let p = Point::new(4, 4);
        assert_eq!(p.direction_to(Point::new(4, 3)).unwrap(), Direction::Up);
        assert_eq!(p.direction_to(Point::new(4, 5)).unwrap(), Direction::Down);
        assert_eq!(p.direction_to(Point::new(3, 4)).unwrap(), Direction::Left);
        assert_eq!(p.direction_to(Point::new(5, 4)).unwrap(), Direction::Right);
    }

    #[test]
    fn direction_to_agrees_with_project() {
        let p = Point::new(-3, 8);
        for dir in Direction::ALL_PHYSICAL {
            let q = p.project(dir).unwrap();
            assert_eq!(p.direction_to(q).unwrap(), dir);
        }
    }

    #[test]
    fn direction_to_rejects_non_adjacent() {
        let p = Point::new(0, 0);
        assert!(p.direction_to(Point::new(1, 1)).is_err());
        assert!(p.direction_to(Point::new(2, 0)).is_err());
        assert!(p.direction_to(p).is_err());
    }

    #[test]
    fn distance_squared_is_euclidean() {
        assert_eq!(Point::new(0, 0).distance_squared(Point::new(1, 0)), 1);
        assert_eq!(Point::new(0, 0).distance_squared(Point::new(1, 1)), 2);
        assert_eq!(Point::new(2, 3).distance_squared(Point::new(-1, -1)), 25);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let low = Point::new(i32::MIN, 0);
        let high = Point::new(i32::MAX, 0);
        assert_eq!(low.distance_squared(high), i64::MAX);
        assert_eq!(
            Point::new(0, i32::MIN).distance_squared(Point::new(0, 0)),
            1i64 << 62
        );
        assert_eq!(
            low.direction_to(high).unwrap_err(),
            Error::NotAdjacent { from: low, to: high }
        );
        assert_eq!(
            high.project(Direction::Right).unwrap_err(),
            Error::CoordinateOverflow {
                from: high,
                direction: Direction::Right,
            }
        );
        assert!(low.project(Direction::Left).is_err());

        let edge = Rectangle::new(i32::MAX - 1, i32::MAX - 1, i32::MAX, i32::MAX).unwrap();
        assert!(edge.contains(Point::new(i32::MAX, i32::MAX)));
        assert!(!edge.contains(low));
    }

    #[test]
    fn opposite_directions() {
        for dir in Direction::ALL_PHYSICAL {
            let opp = dir.opposite().unwrap();
            assert_eq!(opp.opposite().unwrap(), dir);
            assert_ne!(opp, dir);
        }
        assert!(Direction::Continue.opposite().is_none());
    }

    #[test]
    fn rectangle_contains_all() {
        let points = [Point::new(0, 0), Point::new(0, 3), Point::new(3, 3)];

        assert!(Rectangle::new(0, 0, 4, 4).unwrap().contains_all(points));
        assert!(!Rectangle::new(0, 0, 3, 3).unwrap().contains_all(points));
        assert!(!Rectangle::new(0, 0, 3, 4).unwrap().contains_all(points));
        assert!(
            Rectangle::new(0, 0, 3, 4)
                .unwrap()
                .contains_all(std::iter::empty())
        );
    }

    #[test]
    fn rectangle_bounds_are_inclusive_of_origin_exclusive_of_extent() {
        let rect = Rectangle::new(6, 4, 4, 4).unwrap();
        assert!(rect.contains(Point::new(6, 4)));
        assert!(rect.contains(Point::new(9, 7)));
        assert!(!rect.contains(Point::new(10, 7)));
        assert!(!rect.contains(Point::new(5, 4)));
    }

    #[test]
    fn rectangle_rejects_non_positive_dimensions() {
        assert_eq!(
            Rectangle::new(0, 0, 0, 3).unwrap_err(),
            Error::InvalidRectangle {
                width: 0,
                height: 3
            }
        );
        assert!(Rectangle::new(0, 0, 3, -1).is_err());
    }
}
