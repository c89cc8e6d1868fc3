use std::f64::consts::{FRAC_PI_2, PI};

use crate::foundation::{
    core::{BezPath, Orientation, Point, Rect},
    error::{GoldenError, GoldenResult},
};

/// Upper bound on decomposition steps.
pub const MAX_STEPS: usize = 10;

/// A remainder with either side below this floor ends the decomposition.
pub const MIN_SIDE: f64 = 2.0;

/// Gaps between consecutive arcs below this are treated as joined when building the spiral path.
const JOIN_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn of(self, rect: Rect) -> Point {
        match self {
            Self::TopLeft => Point::new(rect.x0, rect.y0),
            Self::TopRight => Point::new(rect.x1, rect.y0),
            Self::BottomLeft => Point::new(rect.x0, rect.y1),
            Self::BottomRight => Point::new(rect.x1, rect.y1),
        }
    }
}

/// How one step places its square, what it keeps, and where its arc sits.
///
/// A rule is fully determined by the side of the rectangle the square is cut from; the other
/// fields are derived from that and kept explicit so the table reads as data.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StepRule {
    /// Side of the current rectangle the square occupies.
    pub square_side: Side,
    /// Corner of the current rectangle the square is anchored to.
    pub square_corner: Corner,
    /// Slice of the current rectangle that becomes the next rectangle.
    pub remains: Side,
    /// Corner of the square used as the arc center.
    pub arc_center: Corner,
    /// Arc start angle in radians (clockwise from +x, y down). Every arc sweeps +π/2.
    pub arc_start: f64,
}

const LEFT: StepRule = StepRule {
    square_side: Side::Left,
    square_corner: Corner::TopLeft,
    remains: Side::Right,
    arc_center: Corner::BottomRight,
    arc_start: PI,
};

const TOP: StepRule = StepRule {
    square_side: Side::Top,
    square_corner: Corner::TopLeft,
    remains: Side::Bottom,
    arc_center: Corner::BottomLeft,
    arc_start: 3.0 * FRAC_PI_2,
};

const RIGHT: StepRule = StepRule {
    square_side: Side::Right,
    square_corner: Corner::TopRight,
    remains: Side::Left,
    arc_center: Corner::TopLeft,
    arc_start: 0.0,
};

const BOTTOM: StepRule = StepRule {
    square_side: Side::Bottom,
    square_corner: Corner::BottomLeft,
    remains: Side::Top,
    arc_center: Corner::TopRight,
    arc_start: FRAC_PI_2,
};

// Rows: landscape, portrait. The portrait row is the landscape cycle entered one quarter turn
// earlier, so a portrait golden box spirals inward with the same tangency.
const STEP_RULES: [[StepRule; 4]; 2] = [[LEFT, TOP, RIGHT, BOTTOM], [BOTTOM, LEFT, TOP, RIGHT]];

/// The rule for step `index`; periodic in `index` with period 4.
pub fn step_rule(orientation: Orientation, index: usize) -> StepRule {
    let row = usize::from(orientation.is_portrait());
    STEP_RULES[row][index % 4]
}

impl StepRule {
    pub fn square(&self, rect: Rect) -> Square {
        let side = rect.width().min(rect.height());
        let origin = match self.square_corner {
            Corner::TopLeft => Point::new(rect.x0, rect.y0),
            Corner::TopRight => Point::new(rect.x1 - side, rect.y0),
            Corner::BottomLeft => Point::new(rect.x0, rect.y1 - side),
            Corner::BottomRight => Point::new(rect.x1 - side, rect.y1 - side),
        };
        Square { origin, side }
    }

    /// `rect` with a `min(width, height)` slice removed, keeping the `remains` side.
    pub fn remainder(&self, rect: Rect) -> Rect {
        let s = rect.width().min(rect.height());
        match self.remains {
            Side::Right => Rect::new(rect.x0 + s, rect.y0, rect.x1, rect.y1),
            Side::Bottom => Rect::new(rect.x0, rect.y0 + s, rect.x1, rect.y1),
            Side::Left => Rect::new(rect.x0, rect.y0, rect.x1 - s, rect.y1),
            Side::Top => Rect::new(rect.x0, rect.y0, rect.x1, rect.y1 - s),
        }
    }

    pub fn arc(&self, square: Square) -> SpiralArc {
        let start_angle = self.arc_start;
        SpiralArc {
            center: self.arc_center.of(square.to_rect()),
            radius: square.side,
            start_angle,
            end_angle: start_angle + FRAC_PI_2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Square {
    pub origin: Point,
    pub side: f64,
}

impl Square {
    pub fn to_rect(self) -> Rect {
        Rect::from_origin_size(self.origin, (self.side, self.side))
    }
}

/// A clockwise quarter circle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SpiralArc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl SpiralArc {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn point_at(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    pub fn to_kurbo(&self) -> kurbo::Arc {
        kurbo::Arc {
            center: self.center,
            radii: kurbo::Vec2::new(self.radius, self.radius),
            start_angle: self.start_angle,
            sweep_angle: self.sweep(),
            x_rotation: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DecompositionStep {
    pub index: usize,
    pub rule: StepRule,
    pub rect: Rect,
    pub square: Square,
    pub arc: SpiralArc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The next remainder would have a side below [`MIN_SIDE`].
    Floor,
    /// [`MAX_STEPS`] steps were produced with a usable remainder left over.
    Cap,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Decomposition {
    pub orientation: Orientation,
    pub bounds: Rect,
    pub stop: StopReason,
    pub steps: Vec<DecompositionStep>,
}

impl Decomposition {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.steps.iter().map(|s| s.rect)
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.steps.iter().map(|s| s.square)
    }

    pub fn arcs(&self) -> impl Iterator<Item = SpiralArc> + '_ {
        self.steps.iter().map(|s| s.arc)
    }

    /// Largest distance between the end of one arc and the start of the next.
    pub fn max_arc_gap(&self) -> f64 {
        self.steps
            .windows(2)
            .map(|w| w[0].arc.end_point().distance(w[1].arc.start_point()))
            .fold(0.0, f64::max)
    }

    /// All arcs as one path: a single move-to followed by the arcs' curve segments.
    pub fn spiral_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        let mut cursor: Option<Point> = None;
        for arc in self.arcs() {
            let start = arc.start_point();
            match cursor {
                None => path.move_to(start),
                Some(p) if p.distance(start) > JOIN_EPSILON => path.line_to(start),
                Some(_) => {}
            }
            path.extend(arc.to_kurbo().append_iter(tolerance));
            cursor = Some(arc.end_point());
        }
        path
    }
}

/// Partition `rect` into golden sub-rectangles, one square and one quarter arc per step.
///
/// Fails only for rectangles with non-finite or non-positive sides. A rectangle whose short
/// side is already below [`MIN_SIDE`] yields a single step.
pub fn decompose(rect: Rect, orientation: Orientation) -> GoldenResult<Decomposition> {
    if !(rect.is_finite() && rect.width() > 0.0 && rect.height() > 0.0) {
        return Err(GoldenError::validation(format!(
            "decomposition needs a finite rectangle with positive sides, got {rect:?}"
        )));
    }

    let mut steps = Vec::with_capacity(MAX_STEPS);
    let mut current = rect;
    let mut stop = StopReason::Cap;
    for index in 0..MAX_STEPS {
        let rule = step_rule(orientation, index);
        let square = rule.square(current);
        steps.push(DecompositionStep {
            index,
            rule,
            rect: current,
            square,
            arc: rule.arc(square),
        });

        let next = rule.remainder(current);
        if next.width() < MIN_SIDE || next.height() < MIN_SIDE {
            stop = StopReason::Floor;
            break;
        }
        current = next;
    }

    tracing::debug!(
        steps = steps.len(),
        ?stop,
        ?orientation,
        "golden decomposition"
    );

    Ok(Decomposition {
        orientation,
        bounds: rect,
        stop,
        steps,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/decompose.rs"]
mod tests;
