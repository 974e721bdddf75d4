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

//! The coordinate module contains types and functions for converting between
//! sexagesimal GPS coordinates, decimal degrees and radians.

#![allow(clippy::cast_possible_truncation)]

use crate::{Degrees, LatLong, Radians};
use core::fmt;
use thiserror::Error;

/// The error type for GPS values that do not have the required shape.
///
/// Shape is checked before any numeric work is attempted; the error carries
/// the number of components that were actually found.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ShapeError {
    /// A GPS coordinate should have 3 values: degrees, minutes and seconds.
    #[error("GPS coordinate should have 3 values, found {0}")]
    Coordinate(usize),
    /// A GPS point should have 2 coordinates: latitude and longitude.
    #[error("GPS point should have 2 coordinates, found {0}")]
    Point(usize),
}

/// Convert an angle in `Degrees` to `Radians`.
#[must_use]
pub fn radians_from_degrees(value: Degrees) -> Radians {
    Radians(value.0 * core::f64::consts::PI / 180.0)
}

/// Convert an angle in `Radians` to `Degrees`.
#[must_use]
pub fn degrees_from_radians(value: Radians) -> Degrees {
    Degrees(value.0 * 180.0 / core::f64::consts::PI)
}

/// A sexagesimal GPS coordinate: degrees, minutes and seconds.
///
/// The sign of the `degrees` component encodes the hemisphere: negative
/// values lie South of the Equator or West of the prime meridian.
///
/// # Examples
/// ```
/// use usv_tracks::coordinate::GpsCoordinate;
///
/// let latitude = GpsCoordinate::new(41.0, 59.0, 4.0);
/// assert_eq!(41.0 + 59.0 / 60.0 + 4.0 / 3600.0, latitude.to_degrees().0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GpsCoordinate {
    /// Whole degrees, signed by hemisphere.
    degrees: f64,
    /// Minutes of arc.
    minutes: f64,
    /// Seconds of arc.
    seconds: f64,
}

impl GpsCoordinate {
    /// Constructor.
    /// * `degrees`, `minutes`, `seconds` - the sexagesimal components.
    #[must_use]
    pub const fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Construct a `GpsCoordinate` from a raw slice of values, e.g. from
    /// telemetry that carries coordinates as number sequences.
    ///
    /// # Errors
    ///
    /// `ShapeError::Coordinate` if `values` does not have exactly 3 components.
    ///
    /// # Examples
    /// ```
    /// use usv_tracks::coordinate::{GpsCoordinate, ShapeError};
    ///
    /// assert!(GpsCoordinate::from_components(&[41.0, 59.0, 4.0]).is_ok());
    /// assert_eq!(
    ///     Err(ShapeError::Coordinate(2)),
    ///     GpsCoordinate::from_components(&[1.0, 2.0])
    /// );
    /// ```
    pub fn from_components(values: &[f64]) -> Result<Self, ShapeError> {
        match *values {
            [degrees, minutes, seconds] => Ok(Self::new(degrees, minutes, seconds)),
            _ => Err(ShapeError::Coordinate(values.len())),
        }
    }

    /// The whole degrees component, signed by hemisphere.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The minutes of arc component.
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.minutes
    }

    /// The seconds of arc component.
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Convert to decimal degrees: `degrees + minutes / 60 + seconds / 3600`.
    #[must_use]
    pub fn to_degrees(&self) -> Degrees {
        Degrees(self.degrees + self.minutes / 60.0 + self.seconds / (60.0 * 60.0))
    }

    /// Convert to radians.
    #[must_use]
    pub fn to_radians(&self) -> Radians {
        radians_from_degrees(self.to_degrees())
    }
}

impl From<Degrees> for GpsCoordinate {
    /// Decompose decimal degrees into sexagesimal components by repeated
    /// floor.
    ///
    /// Truncation only: precision below one second of arc is discarded, so
    /// the round-trip through `to_degrees` is lossy.
    fn from(value: Degrees) -> Self {
        let degrees = libm::floor(value.0);
        let minutes = libm::floor((value.0 - degrees) * 60.0);
        let seconds = libm::floor((value.0 - degrees - minutes / 60.0) * 3600.0);

        Self::new(degrees, minutes, seconds)
    }
}

impl From<Radians> for GpsCoordinate {
    /// Decompose an angle in radians into sexagesimal components, see
    /// `From<Degrees>`.
    fn from(value: Radians) -> Self {
        Self::from(degrees_from_radians(value))
    }
}

impl fmt::Display for GpsCoordinate {
    /// Render the whole components as `D° M' S"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\u{b0} {}' {}\"",
            self.degrees as i64, self.minutes as i64, self.seconds as i64
        )
    }
}

/// A GPS position: a latitude and longitude pair of `GpsCoordinate`s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GpsPoint {
    /// The latitude, negative degrees lie South of the Equator.
    latitude: GpsCoordinate,
    /// The longitude, negative degrees lie West of the prime meridian.
    longitude: GpsCoordinate,
}

impl GpsPoint {
    /// Constructor.
    /// * `latitude`, `longitude` - the coordinates of the position.
    #[must_use]
    pub const fn new(latitude: GpsCoordinate, longitude: GpsCoordinate) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Construct a `GpsPoint` from raw coordinate slices.
    ///
    /// # Errors
    ///
    /// `ShapeError::Point` if `values` does not have exactly 2 coordinates,
    /// `ShapeError::Coordinate` if either coordinate is not a valid shape.
    pub fn from_components(values: &[&[f64]]) -> Result<Self, ShapeError> {
        match *values {
            [latitude, longitude] => Ok(Self::new(
                GpsCoordinate::from_components(latitude)?,
                GpsCoordinate::from_components(longitude)?,
            )),
            _ => Err(ShapeError::Point(values.len())),
        }
    }

    /// The latitude of the position.
    #[must_use]
    pub const fn latitude(&self) -> GpsCoordinate {
        self.latitude
    }

    /// The longitude of the position.
    #[must_use]
    pub const fn longitude(&self) -> GpsCoordinate {
        self.longitude
    }

    /// Convert both coordinates to decimal degrees.
    #[must_use]
    pub fn to_degrees(&self) -> LatLong {
        LatLong::new(self.latitude.to_degrees(), self.longitude.to_degrees())
    }

    /// Convert both coordinates to radians.
    #[must_use]
    pub fn to_radians(&self) -> (Radians, Radians) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<LatLong> for GpsPoint {
    /// Decompose a decimal degrees position into sexagesimal coordinates,
    /// see `From<Degrees> for GpsCoordinate`.
    fn from(value: LatLong) -> Self {
        Self::new(
            GpsCoordinate::from(value.lat()),
            GpsCoordinate::from(value.lon()),
        )
    }
}

impl fmt::Display for GpsPoint {
    /// Render both coordinates, each suffixed with its hemisphere letter
    /// chosen by the sign of the degrees component.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let north_south = if self.latitude.degrees() > 0.0 {
            'N'
        } else {
            'S'
        };
        let east_west = if self.longitude.degrees() > 0.0 {
            'E'
        } else {
            'W'
        };
        write!(
            f,
            "{} {} {} {}",
            self.latitude, north_south, self.longitude, east_west
        )
    }
}
