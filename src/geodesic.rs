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

//! The geodesic module contains functions for calculating the great-circle
//! distance between a pair of positions and the destination of a distance
//! and bearing from a position, on a sphere whose radius is supplied by the
//! Earth model.
//!
//! Both calculations are short-range approximations: the sphere radius is
//! chosen once per call and is not refined along the path. Long, polar or
//! antipodal ranges need a proper geodesic solver and are out of scope.

#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

use crate::coordinate::{radians_from_degrees, GpsPoint};
use crate::{Degrees, Ellipsoid, LatLong, Metres};
use angle_sc::{trig, Angle};

/// The Earth radius to use for a spherical calculation.
///
/// `Local` estimates the ellipsoidal radius at the latitude of the
/// calculation: the midpoint latitude for [`distance`], the origin latitude
/// for [`destination`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RadiusModel {
    /// The fallback mean radius of the ellipsoid.
    #[default]
    Mean,
    /// The ellipsoidal radius at the latitude of the calculation.
    Local,
}

/// Calculate the Haversine distance between a pair of positions in decimal
/// degrees.
///
/// `h = sin²(Δφ/2) + cos φ1·cos φ2·sin²(Δλ/2)`;
/// `distance = R·2·atan2(√h, √(1−h))`.
///
/// The result is symmetric in the two positions and zero for identical
/// positions. Antipodal or coincident-pole pairs sit on the edge of the
/// formula's numerical validity and are not special-cased.
/// * `a`, `b` - the positions.
/// * `radius_model` - the Earth radius to calculate with.
/// * `ellipsoid` - the Earth model parameters.
///
/// returns the distance between the positions in metres.
///
/// # Examples
/// ```
/// use usv_tracks::geodesic::{distance, RadiusModel};
/// use usv_tracks::{Degrees, LatLong, WGS84_ELLIPSOID};
/// use angle_sc::is_within_tolerance;
///
/// let a = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let b = LatLong::new(Degrees(0.0), Degrees(90.0));
///
/// // a quarter of the mean circumference
/// let quarter = distance(&a, &b, RadiusModel::Mean, &WGS84_ELLIPSOID);
/// assert!(is_within_tolerance(
///     6_371_000.0 * core::f64::consts::FRAC_PI_2,
///     quarter.0,
///     1e-8
/// ));
/// ```
#[must_use]
pub fn distance(
    a: &LatLong,
    b: &LatLong,
    radius_model: RadiusModel,
    ellipsoid: &Ellipsoid,
) -> Metres {
    let radius = match radius_model {
        RadiusModel::Mean => ellipsoid.mean_radius(),
        RadiusModel::Local => {
            ellipsoid.calculate_earth_radius(Degrees(0.5 * (a.lat().0 + b.lat().0)))
        }
    };

    let phi1 = radians_from_degrees(a.lat());
    let phi2 = radians_from_degrees(b.lat());
    let delta_phi = radians_from_degrees(Degrees(b.lat().0 - a.lat().0));
    let delta_lambda = radians_from_degrees(Degrees(b.lon().0 - a.lon().0));

    let sin_half_phi = libm::sin(0.5 * delta_phi.0);
    let sin_half_lambda = libm::sin(0.5 * delta_lambda.0);

    let h = sin_half_phi * sin_half_phi
        + libm::cos(phi1.0) * libm::cos(phi2.0) * sin_half_lambda * sin_half_lambda;

    Metres(radius.0 * 2.0 * libm::atan2(libm::sqrt(h), libm::sqrt(1.0 - h)))
}

/// Calculate the Haversine distance between a pair of sexagesimal GPS
/// points, see [`distance`].
/// * `a`, `b` - the GPS points.
/// * `radius_model` - the Earth radius to calculate with.
/// * `ellipsoid` - the Earth model parameters.
///
/// returns the distance between the points in metres.
#[must_use]
pub fn distance_between_gps_points(
    a: &GpsPoint,
    b: &GpsPoint,
    radius_model: RadiusModel,
    ellipsoid: &Ellipsoid,
) -> Metres {
    distance(&a.to_degrees(), &b.to_degrees(), radius_model, ellipsoid)
}

/// Calculate the destination of travelling a distance along a bearing from
/// a start position: the direct problem on a sphere.
///
/// With the angular distance `δ = distance/R`:
/// `sin φ2 = sin φ1·cos δ + cos φ1·sin δ·cos θ`;
/// `λ2 = λ1 + atan2(sin θ·sin δ·cos φ1, cos δ − sin φ1·sin φ2)`.
///
/// The longitude of the result is normalised to (−180°, 180°]. The latitude
/// cannot exceed ±90° for physically valid inputs and is not normalised.
/// * `origin` - the start position.
/// * `distance` - the distance to travel in metres.
/// * `bearing` - the bearing, measured clockwise from North.
/// * `radius_model` - the Earth radius to calculate with.
/// * `ellipsoid` - the Earth model parameters.
///
/// returns the destination position in decimal degrees.
///
/// # Examples
/// ```
/// use usv_tracks::geodesic::{destination, RadiusModel};
/// use usv_tracks::{Degrees, LatLong, Metres, WGS84_ELLIPSOID};
/// use angle_sc::is_within_tolerance;
///
/// let origin = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let one_degree = Metres(6_371_000.0 * core::f64::consts::PI / 180.0);
///
/// let north = destination(&origin, one_degree, Degrees(0.0), RadiusModel::Mean, &WGS84_ELLIPSOID);
/// assert!(is_within_tolerance(1.0, north.lat().0, 1e-12));
/// assert!(is_within_tolerance(0.0, north.lon().0, 1e-12));
/// ```
#[must_use]
pub fn destination(
    origin: &LatLong,
    distance: Metres,
    bearing: Degrees,
    radius_model: RadiusModel,
    ellipsoid: &Ellipsoid,
) -> LatLong {
    let radius = match radius_model {
        RadiusModel::Mean => ellipsoid.mean_radius(),
        RadiusModel::Local => ellipsoid.calculate_earth_radius(origin.lat()),
    };

    // the angular distance on the sphere
    let delta = distance.0 / radius.0;
    let sin_delta = libm::sin(delta);
    let cos_delta = libm::cos(delta);

    let phi1 = Angle::from(origin.lat());
    let theta = Angle::from(bearing);

    let sin_phi2 = trig::UnitNegRange::clamp(
        phi1.sin().0 * cos_delta + phi1.cos().0 * sin_delta * theta.cos().0,
    );
    let phi2 = Angle::new(sin_phi2, trig::swap_sin_cos(sin_phi2));

    let y = theta.sin().0 * sin_delta * phi1.cos().0;
    let x = cos_delta - phi1.sin().0 * sin_phi2.0;
    let lambda2 = Angle::from(origin.lon()) + Angle::from_y_x(y, x);

    LatLong::new(Degrees::from(phi2), Degrees::from(lambda2))
}

/// Calculate the destination of travelling a distance along a bearing from
/// a sexagesimal GPS point, see [`destination`].
/// * `origin` - the start point.
/// * `distance` - the distance to travel in metres.
/// * `bearing` - the bearing, measured clockwise from North.
/// * `radius_model` - the Earth radius to calculate with.
/// * `ellipsoid` - the Earth model parameters.
///
/// returns the destination as a GPS point, truncated to whole seconds.
#[must_use]
pub fn destination_gps_point(
    origin: &GpsPoint,
    distance: Metres,
    bearing: Degrees,
    radius_model: RadiusModel,
    ellipsoid: &Ellipsoid,
) -> GpsPoint {
    GpsPoint::from(destination(
        &origin.to_degrees(),
        distance,
        bearing,
        radius_model,
        ellipsoid,
    ))
}
