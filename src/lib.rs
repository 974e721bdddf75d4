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

//! usv-tracks
//!
//! A library for generating geodetic test tracks for the navigation testing
//! of unmanned surface vehicles.
//!
//! The library covers two tightly coupled concerns:
//!
//! - the **geodesic engine**: conversions between sexagesimal GPS
//!   coordinates, decimal degrees and radians; estimation of the local
//!   Earth radius on a WGS 84 style ellipsoid; and the Haversine distance
//!   and spherical "direct problem" destination calculations;
//! - the **track generator**: composable geometric figures (line,
//!   rectangle, spiral, sector, circle, squiggle and compound shapes) that
//!   build ordered point sequences in a flat local tangent plane.
//!
//! A test track is built around an initial pole in the local plane, then
//! projected onto GPS coordinates by solving the direct problem once per
//! point from a fixed origin, see [`calculate_track_route`].
//!
//! ## Design
//!
//! The spherical formulas follow Chris Veness's
//! [Movable Type scripts](https://www.movable-type.co.uk/scripts/latlong.html).
//! They are deliberately short-range approximations: the Earth radius is
//! chosen once per call, either the mean radius or the ellipsoidal radius
//! at the latitude of the calculation, and is never refined along the
//! path. Long, polar or antipodal ranges need a proper geodesic solver,
//! which is out of scope for test tracks a few kilometres across.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [icao-units](https://crates.io/crates/icao-units) - to define
//!   `Metres`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define
//!   `LatLong`, a position in decimal degrees.
//!
//! ## Example
//!
//! Build the reference squiggle track and project it onto a GPS route:
//!
//! ```
//! use usv_tracks::{
//!     calculate_track_route, GpsCoordinate, GpsPoint, Metres, PlanarPoint, Radians,
//!     RadiusModel, Track, WGS84_ELLIPSOID,
//! };
//! use core::f64::consts::PI;
//!
//! let mut track = Track::new(PlanarPoint::new(0.0, 0.0));
//! track.squiggle(Metres(1000.0), Metres(1000.0), Radians(0.5 * PI), Radians(PI), 8, 16);
//!
//! let origin = GpsPoint::new(
//!     GpsCoordinate::new(41.0, 59.0, 4.0),
//!     GpsCoordinate::new(2.0, 49.0, 16.0),
//! );
//!
//! let route = calculate_track_route(&track, &origin, RadiusModel::Mean, &WGS84_ELLIPSOID);
//! assert_eq!(track.len(), route.len());
//!
//! for point in &route {
//!     println!("{point}");
//! }
//! ```

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod coordinate;
pub mod ellipsoid;
pub mod geodesic;
pub mod track;

pub use angle_sc::{Angle, Degrees, Radians};
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

pub use coordinate::{GpsCoordinate, GpsPoint, ShapeError};
pub use geodesic::RadiusModel;
pub use track::{PlanarPoint, Track};

use once_cell::sync::Lazy;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// The fallback mean radius of the ellipsoid.
    mean_radius: Metres,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `b` - the Semiminor axis of the `Ellipsoid`.
    /// * `mean_radius` - the fallback mean radius of the `Ellipsoid`.
    #[must_use]
    pub fn new(a: Metres, b: Metres, mean_radius: Metres) -> Self {
        Self {
            a,
            b,
            f: (a.0 - b.0) / a.0,
            mean_radius,
        }
    }

    /// Construct an `Ellipsoid` with the WGS 84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(
            ellipsoid::wgs84::A,
            ellipsoid::wgs84::B,
            ellipsoid::wgs84::MEAN_RADIUS,
        )
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The fallback mean radius of the ellipsoid.
    #[must_use]
    pub const fn mean_radius(&self) -> Metres {
        self.mean_radius
    }

    /// Calculate the local radius of the ellipsoid at the given latitude,
    /// see [`ellipsoid::calculate_earth_radius`].
    #[must_use]
    pub fn calculate_earth_radius(&self, latitude: Degrees) -> Metres {
        ellipsoid::calculate_earth_radius(latitude, self.a, self.b)
    }

    /// Calculate the local radius of the ellipsoid at the latitude of a
    /// sexagesimal GPS coordinate.
    #[must_use]
    pub fn radius_at_coordinate(&self, latitude: &GpsCoordinate) -> Metres {
        self.calculate_earth_radius(latitude.to_degrees())
    }

    /// Calculate the local radius of the ellipsoid at the latitude of a
    /// GPS point.
    #[must_use]
    pub fn radius_at_point(&self, point: &GpsPoint) -> Metres {
        self.calculate_earth_radius(point.latitude().to_degrees())
    }
}

/// A static instance of the WGS 84 `Ellipsoid`.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// Project a planar `Track` onto GPS coordinates from a fixed origin.
///
/// For each point after the seed, the planar offset from the track's first
/// point yields a distance (the Euclidean norm) and a bearing (clockwise
/// from the vertical axis), which are applied to the origin with
/// [`geodesic::destination_gps_point`]. The returned route starts with the
/// origin itself, so it is as long as the track.
/// * `track` - the track to project.
/// * `origin` - the GPS point corresponding to the track's first point.
/// * `radius_model` - the Earth radius to calculate with.
/// * `ellipsoid` - the Earth model parameters.
///
/// returns the GPS route of the track.
#[must_use]
pub fn calculate_track_route(
    track: &Track,
    origin: &GpsPoint,
    radius_model: RadiusModel,
    ellipsoid: &Ellipsoid,
) -> Vec<GpsPoint> {
    let points = track.points();
    let start = points[0];

    let mut route = Vec::with_capacity(points.len());
    route.push(*origin);

    for point in &points[1..] {
        let delta_x = point.x() - start.x();
        let delta_y = point.y() - start.y();

        let distance = Metres(libm::hypot(delta_x, delta_y));
        let bearing = Degrees::from(Angle::from_y_x(delta_x, delta_y));

        route.push(geodesic::destination_gps_point(
            origin,
            distance,
            bearing,
            radius_model,
            ellipsoid,
        ));
    }

    route
}
