// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The track module contains types and functions for building test tracks:
//! ordered sequences of points in a flat local tangent plane, generated by
//! composable geometric figures.
//!
//! Every generator anchors its geometry to the pole, the last point already
//! in the track, and appends its points in order; the figures compose into
//! arbitrary paths by chaining calls. Angles are tilt angles, measured
//! clockwise from the vertical axis of the plane in radians.

#![allow(clippy::cast_precision_loss)]

use crate::{Metres, Radians};
use core::f64::consts::PI;

/// A point in the local tangent plane, in metres East and North of the
/// plane origin.
///
/// The flat plane is only a valid approximation of the Earth's surface
/// near its origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarPoint {
    /// The East offset in metres.
    x: f64,
    /// The North offset in metres.
    y: f64,
}

impl PlanarPoint {
    /// Constructor.
    /// * `x`, `y` - the East and North offsets in metres.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The East offset in metres.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The North offset in metres.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

/// An ordered, append-only sequence of `PlanarPoint`s.
///
/// A `Track` is created with a seed point and grown by the generator
/// methods, each of which reads the pole - the last point already in the
/// track - as the anchor for its figure. Generators only ever append;
/// points are never removed or reordered.
///
/// # Examples
/// ```
/// use usv_tracks::track::{PlanarPoint, Track};
/// use usv_tracks::{Metres, Radians};
///
/// let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
/// track.square(Metres(100.0), Radians(0.0), 4);
/// assert_eq!(17, track.len());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    /// The points of the track, in insertion order.
    points: Vec<PlanarPoint>,
}

impl Track {
    /// Construct a `Track` seeded with its initial pole.
    #[must_use]
    pub fn new(seed: PlanarPoint) -> Self {
        Self { points: vec![seed] }
    }

    /// The points of the track, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[PlanarPoint] {
        &self.points
    }

    /// The number of points in the track, including the seed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the track has no points.
    /// Always false: a `Track` is seeded on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The pole: the most recently appended point, the anchor for the next
    /// figure.
    #[must_use]
    pub fn pole(&self) -> PlanarPoint {
        self.points[self.points.len() - 1]
    }

    /// Append the points of a straight line.
    ///
    /// Interpolates from the pole to the point `length` metres away along
    /// `angle`, appending the point at `i / points_per_segment` of the way
    /// for each `i` in `1..=points_per_segment`.
    /// * `length` - the length of the line in metres.
    /// * `angle` - the tilt angle of the line in radians.
    /// * `points_per_segment` - the number of points per elementary figure.
    ///
    /// # Panics
    ///
    /// If `points_per_segment` is zero.
    pub fn line(&mut self, length: Metres, angle: Radians, points_per_segment: usize) {
        assert!(
            0 < points_per_segment,
            "points_per_segment should be positive"
        );

        let pole = self.pole();
        let x_length = length.0 * libm::sin(angle.0);
        let y_length = length.0 * libm::cos(angle.0);

        for i in 1..=points_per_segment {
            let cut = i as f64 / points_per_segment as f64;
            self.points.push(PlanarPoint::new(
                pole.x + cut * x_length,
                pole.y + cut * y_length,
            ));
        }
    }

    /// Append the points of a rectangle.
    ///
    /// Four lines, turning a quarter turn clockwise after each: the first
    /// and third sides are `width` long, the second and fourth `height`.
    /// The figure closes back on the pole.
    /// * `width` - the length of the first side in metres.
    /// * `height` - the length of the second side in metres.
    /// * `angle` - the tilt angle of the first side in radians.
    /// * `points_per_segment` - the number of points per elementary figure.
    ///
    /// # Panics
    ///
    /// If `points_per_segment` is zero.
    pub fn rectangle(
        &mut self,
        width: Metres,
        height: Metres,
        angle: Radians,
        points_per_segment: usize,
    ) {
        let mut angle = angle;
        let mut length = width;

        for side in 0..4 {
            self.line(length, angle, points_per_segment);
            angle.0 += 0.5 * PI;
            length = if side % 2 == 0 { height } else { width };
        }
    }

    /// Append the points of a square: a rectangle with equal sides.
    /// * `side` - the length of each side in metres.
    /// * `angle` - the tilt angle of the first side in radians.
    /// * `points_per_segment` - the number of points per elementary figure.
    ///
    /// # Panics
    ///
    /// If `points_per_segment` is zero.
    pub fn square(&mut self, side: Metres, angle: Radians, points_per_segment: usize) {
        self.rectangle(side, side, angle, points_per_segment);
    }

    /// Append the points of a spiral.
    ///
    /// The centre of the spiral is offset from the pole so that the pole
    /// lies on the spiral at `initial_radius` and `initial_angle`. The
    /// radius and angle are both interpolated linearly to `finish_radius`
    /// and `finish_angle`.
    /// * `initial_radius` - the radius at the pole in metres.
    /// * `initial_angle` - the angle at the pole in radians.
    /// * `finish_radius` - the radius at the last point in metres.
    /// * `finish_angle` - the angle at the last point in radians.
    /// * `points_per_segment` - the number of points per elementary figure.
    ///
    /// # Panics
    ///
    /// If `points_per_segment` is zero.
    pub fn spiral(
        &mut self,
        initial_radius: Metres,
        initial_angle: Radians,
        finish_radius: Metres,
        finish_angle: Radians,
        points_per_segment: usize,
    ) {
        assert!(
            0 < points_per_segment,
            "points_per_segment should be positive"
        );

        let pole = self.pole();
        let x_centre = pole.x - initial_radius.0 * libm::sin(initial_angle.0);
        let y_centre = pole.y - initial_radius.0 * libm::cos(initial_angle.0);

        for i in 1..=points_per_segment {
            let cut = i as f64 / points_per_segment as f64;
            let radius = initial_radius.0 + cut * (finish_radius.0 - initial_radius.0);
            let angle = initial_angle.0 + cut * (finish_angle.0 - initial_angle.0);

            self.points.push(PlanarPoint::new(
                x_centre + radius * libm::sin(angle),
                y_centre + radius * libm::cos(angle),
            ));
        }
    }

    /// Append the points of a sector: a circular arc, a spiral with
    /// constant radius.
    /// * `radius` - the radius of the arc in metres.
    /// * `initial_angle` - the angle at the pole in radians.
    /// * `finish_angle` - the angle at the last point in radians.
    /// * `points_per_segment` - the number of points per elementary figure.
    ///
    /// # Panics
    ///
    /// If `points_per_segment` is zero.
    pub fn sector(
        &mut self,
        radius: Metres,
        initial_angle: Radians,
        finish_angle: Radians,
        points_per_segment: usize,
    ) {
        self.spiral(
            radius,
            initial_angle,
            radius,
            finish_angle,
            points_per_segment,
        );
    }

    /// Append the points of a circle through the pole.
    ///
    /// A sector sweeping a whole turn: the last point returns to the pole
    /// within numerical precision.
    /// * `radius` - the radius of the circle in metres.
    /// * `initial_angle` - the angle at the pole in radians.
    /// * `points_per_segment` - the number of points per elementary figure.
    ///
    /// # Panics
    ///
    /// If `points_per_segment` is zero.
    pub fn circle(&mut self, radius: Metres, initial_angle: Radians, points_per_segment: usize) {
        self.sector(
            radius,
            initial_angle,
            Radians(initial_angle.0 + 2.0 * PI),
            points_per_segment,
        );
    }

    /// Append the points of a squiggle: straight lines joined by turn arcs.
    ///
    /// The target heading alternates adding and subtracting
    /// `rotation_angle` and the turn arcs alternate direction, biased a
    /// quarter turn so each arc joins its lines tangentially. A
    /// `rotation_angle` of π/2 produces the conventional zig-zag; other
    /// values produce irregular but well defined paths.
    ///
    /// Appends `number_of_lines` lines and `number_of_lines - 1` turns.
    /// * `length` - the length of the straight lines between turns in metres.
    /// * `radius` - the radius of the turns in metres.
    /// * `angle` - the tilt angle of the first line in radians.
    /// * `rotation_angle` - the heading change at each turn in radians.
    /// * `number_of_lines` - the number of straight lines between turns.
    /// * `points_per_segment` - the number of points per elementary figure.
    ///
    /// # Panics
    ///
    /// If `points_per_segment` is zero.
    pub fn squiggle(
        &mut self,
        length: Metres,
        radius: Metres,
        angle: Radians,
        rotation_angle: Radians,
        number_of_lines: usize,
        points_per_segment: usize,
    ) {
        self.line(length, angle, points_per_segment);

        let mut angle = angle;
        let mut next_angle = Radians(angle.0 + rotation_angle.0);
        let mut turn_bias = -0.5 * PI;

        for i in 1..number_of_lines {
            self.sector(
                radius,
                Radians(angle.0 + turn_bias),
                Radians(next_angle.0 + turn_bias),
                points_per_segment,
            );

            angle = next_angle;
            turn_bias = -turn_bias;

            self.line(length, angle, points_per_segment);

            if i % 2 == 0 {
                next_angle.0 += rotation_angle.0;
            } else {
                next_angle.0 -= rotation_angle.0;
            }
        }
    }

    /// Append the points of a path shaped like the letter π.
    ///
    /// A fixed composition of four sectors and three lines; a worked
    /// example of combining the other figures into a compound shape.
    /// * `vertical_length` - the length of the vertical strokes in metres.
    /// * `horizontal_length` - the length of the horizontal stroke in metres.
    /// * `radius` - the radius of the joining arcs in metres.
    /// * `angle` - the tilt angle of the letter in radians.
    /// * `points_per_segment` - the number of points per elementary figure.
    ///
    /// # Panics
    ///
    /// If `points_per_segment` is zero.
    pub fn letter_pi(
        &mut self,
        vertical_length: Metres,
        horizontal_length: Metres,
        radius: Metres,
        angle: Radians,
        points_per_segment: usize,
    ) {
        let mut angle = Radians(angle.0 + PI);
        let mut rotation_angle = -0.5 * PI;

        self.sector(
            radius,
            angle,
            Radians(angle.0 + rotation_angle),
            points_per_segment,
        );
        angle.0 += 2.0 * rotation_angle;

        self.line(vertical_length, angle, points_per_segment);

        angle.0 -= rotation_angle;
        rotation_angle *= 3.0;
        self.sector(
            radius,
            angle,
            Radians(angle.0 + rotation_angle),
            points_per_segment,
        );

        self.line(horizontal_length, angle, points_per_segment);

        angle.0 += -rotation_angle / 3.0;
        self.sector(
            radius,
            angle,
            Radians(angle.0 + rotation_angle),
            points_per_segment,
        );

        self.line(vertical_length, angle, points_per_segment);

        rotation_angle /= 3.0;
        angle.0 -= rotation_angle;
        self.sector(
            radius,
            angle,
            Radians(angle.0 + rotation_angle),
            points_per_segment,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_track_seed_and_pole() {
        let track = Track::new(PlanarPoint::new(3.0, -4.0));
        assert_eq!(1, track.len());
        assert!(!track.is_empty());
        assert_eq!(PlanarPoint::new(3.0, -4.0), track.pole());
        assert_eq!(3.0, track.pole().x());
        assert_eq!(-4.0, track.pole().y());
    }

    #[test]
    fn test_line_interpolates_to_the_far_end() {
        let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
        track.line(Metres(100.0), Radians(0.0), 4);

        // a vertical line: 4 points every 25 metres North
        assert_eq!(5, track.len());
        for (i, point) in track.points().iter().enumerate() {
            assert!(is_within_tolerance(0.0, point.x(), 1e-9));
            assert!(is_within_tolerance(25.0 * i as f64, point.y(), 1e-9));
        }

        // a second line continues from the new pole, due East
        track.line(Metres(50.0), Radians(0.5 * PI), 2);
        assert_eq!(7, track.len());
        assert!(is_within_tolerance(50.0, track.pole().x(), 1e-9));
        assert!(is_within_tolerance(100.0, track.pole().y(), 1e-9));
    }

    #[test]
    #[should_panic(expected = "points_per_segment should be positive")]
    fn test_line_with_zero_points_panics() {
        let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
        track.line(Metres(100.0), Radians(0.0), 0);
    }

    #[test]
    fn test_square_closes_with_orthogonal_sides() {
        let points_per_segment = 8;
        let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
        track.square(Metres(200.0), Radians(0.25 * PI), points_per_segment);

        assert_eq!(4 * points_per_segment + 1, track.len());

        // the figure closes back on the pole
        assert!(is_within_tolerance(0.0, track.pole().x(), 1e-9));
        assert!(is_within_tolerance(0.0, track.pole().y(), 1e-9));

        // consecutive side vectors are orthogonal
        let points = track.points();
        for side in 0..3 {
            let start0 = points[side * points_per_segment];
            let end0 = points[(side + 1) * points_per_segment];
            let end1 = points[(side + 2) * points_per_segment];

            let dot = (end0.x() - start0.x()) * (end1.x() - end0.x())
                + (end0.y() - start0.y()) * (end1.y() - end0.y());
            assert!(is_within_tolerance(0.0, dot, 1e-6));
        }
    }

    #[test]
    fn test_rectangle_sides_alternate_width_and_height() {
        let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
        track.rectangle(Metres(100.0), Metres(40.0), Radians(0.0), 1);

        // corner points: North 100, then East 40, South 100, West 40
        let points = track.points();
        assert_eq!(5, points.len());
        assert!(is_within_tolerance(100.0, points[1].y(), 1e-9));
        assert!(is_within_tolerance(40.0, points[2].x(), 1e-9));
        assert!(is_within_tolerance(0.0, points[3].y(), 1e-9));
        assert!(is_within_tolerance(0.0, points[4].x(), 1e-9));
        assert!(is_within_tolerance(0.0, points[4].y(), 1e-9));
    }

    #[test]
    fn test_spiral_starts_at_the_pole_radius() {
        let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
        track.spiral(Metres(100.0), Radians(0.0), Metres(200.0), Radians(PI), 100);

        assert_eq!(101, track.len());

        // every point lies between the two radii of the spiral centre
        let x_centre = 0.0;
        let y_centre = -100.0;
        for point in &track.points()[1..] {
            let radius = libm::hypot(point.x() - x_centre, point.y() - y_centre);
            assert!(100.0 - 1e-9 <= radius && radius <= 200.0 + 1e-9);
        }

        // the finish point is at the finish radius and angle
        assert!(is_within_tolerance(0.0, track.pole().x(), 1e-9));
        assert!(is_within_tolerance(-300.0, track.pole().y(), 1e-9));
    }

    #[test]
    fn test_sector_keeps_a_constant_radius() {
        let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
        track.sector(Metres(50.0), Radians(0.0), Radians(0.5 * PI), 16);

        let x_centre = 0.0;
        let y_centre = -50.0;
        for point in track.points() {
            assert!(is_within_tolerance(
                50.0,
                libm::hypot(point.x() - x_centre, point.y() - y_centre),
                1e-9
            ));
        }
    }

    #[test]
    fn test_circle_returns_to_the_pole() {
        let mut track = Track::new(PlanarPoint::new(25.0, -80.0));
        track.circle(Metres(1000.0), Radians(0.3 * PI), 64);

        assert_eq!(65, track.len());
        assert!(is_within_tolerance(25.0, track.pole().x(), 1e-6));
        assert!(is_within_tolerance(-80.0, track.pole().y(), 1e-6));
    }

    #[test]
    fn test_squiggle_point_count() {
        // the reference scenario: 8 lines, 7 turns, 16 points each
        let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
        track.squiggle(
            Metres(1000.0),
            Metres(1000.0),
            Radians(0.5 * PI),
            Radians(PI),
            8,
            16,
        );
        assert_eq!(8 * 16 + 7 * 16 + 1, track.len());
    }

    #[test]
    fn test_squiggle_single_line_has_no_turns() {
        let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
        track.squiggle(
            Metres(100.0),
            Metres(10.0),
            Radians(0.0),
            Radians(0.5 * PI),
            1,
            4,
        );
        assert_eq!(5, track.len());
        assert!(is_within_tolerance(100.0, track.pole().y(), 1e-9));
    }

    #[test]
    fn test_squiggle_zig_zag_lines_are_parallel() {
        // with a half turn rotation the odd lines head back parallel to
        // the even ones
        let points_per_segment = 16;
        let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
        track.squiggle(
            Metres(1000.0),
            Metres(1000.0),
            Radians(0.5 * PI),
            Radians(PI),
            3,
            points_per_segment,
        );

        let points = track.points();

        // first line: due East from the seed
        let first_start = points[0];
        let first_end = points[points_per_segment];
        assert!(is_within_tolerance(1000.0, first_end.x() - first_start.x(), 1e-9));
        assert!(is_within_tolerance(0.0, first_end.y() - first_start.y(), 1e-9));

        // second line: due West, after a half turn
        let second_start = points[2 * points_per_segment];
        let second_end = points[3 * points_per_segment];
        assert!(is_within_tolerance(
            -1000.0,
            second_end.x() - second_start.x(),
            1e-9
        ));
        assert!(is_within_tolerance(0.0, second_end.y() - second_start.y(), 1e-9));
    }

    #[test]
    fn test_letter_pi_point_count() {
        // four sectors and three lines
        let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
        track.letter_pi(Metres(50.0), Metres(40.0), Metres(10.0), Radians(0.3 * PI), 16);
        assert_eq!(7 * 16 + 1, track.len());
    }
}
