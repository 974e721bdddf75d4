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

//! The ellipsoid module contains functions for estimating the local radius
//! of an ellipsoid of revolution given its Semimajor and Semiminor axes.

#![allow(clippy::suboptimal_flops)]

pub mod wgs84;

use crate::coordinate::radians_from_degrees;
use crate::{Degrees, Metres};

/// Calculate the local radius of an ellipsoid at the given latitude.
///
/// The radius of an ellipsoid of revolution varies from the Semimajor axis
/// at the equator to the Semiminor axis at the poles:
/// `R = √((a²·A + b²·B) / (A + B))` where `A = (a·cos β)²`, `B = (b·sin β)²`
/// and `β` is the latitude in radians.
///
/// Defined for all finite latitudes: `A + B` is positive wherever both axes
/// are positive.
/// * `latitude` - the latitude.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `b` - the Semiminor axis of the ellipsoid.
/// # Examples
/// ```
/// use usv_tracks::Degrees;
/// use usv_tracks::ellipsoid::{calculate_earth_radius, wgs84};
/// use angle_sc::is_within_tolerance;
///
/// // The radius at the Equator is the Semimajor axis.
/// assert!(is_within_tolerance(
///     wgs84::A.0,
///     calculate_earth_radius(Degrees(0.0), wgs84::A, wgs84::B).0,
///     1e-8
/// ));
/// ```
#[must_use]
pub fn calculate_earth_radius(latitude: Degrees, a: Metres, b: Metres) -> Metres {
    let beta = radians_from_degrees(latitude);
    let a_cos_beta = a.0 * libm::cos(beta.0);
    let b_sin_beta = b.0 * libm::sin(beta.0);

    let big_a = a_cos_beta * a_cos_beta;
    let big_b = b_sin_beta * b_sin_beta;

    Metres(libm::sqrt(
        (a.0 * a.0 * big_a + b.0 * b.0 * big_b) / (big_a + big_b),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_calculate_earth_radius_at_equator_and_poles() {
        assert!(is_within_tolerance(
            wgs84::A.0,
            calculate_earth_radius(Degrees(0.0), wgs84::A, wgs84::B).0,
            1e-8
        ));
        assert!(is_within_tolerance(
            wgs84::B.0,
            calculate_earth_radius(Degrees(90.0), wgs84::A, wgs84::B).0,
            1e-6
        ));
        assert!(is_within_tolerance(
            wgs84::B.0,
            calculate_earth_radius(Degrees(-90.0), wgs84::A, wgs84::B).0,
            1e-6
        ));
    }

    #[test]
    fn test_calculate_earth_radius_is_bounded_and_symmetric() {
        for i in 0..91 {
            let latitude = Degrees(f64::from(i));
            let radius = calculate_earth_radius(latitude, wgs84::A, wgs84::B);

            assert!(wgs84::B.0 <= radius.0 + 1e-6);
            assert!(radius.0 <= wgs84::A.0 + 1e-6);

            let mirrored = calculate_earth_radius(Degrees(-latitude.0), wgs84::A, wgs84::B);
            assert!(is_within_tolerance(radius.0, mirrored.0, 1e-6));
        }
    }

    #[test]
    fn test_calculate_earth_radius_decreases_with_latitude() {
        let mut previous = calculate_earth_radius(Degrees(0.0), wgs84::A, wgs84::B);
        for i in 1..91 {
            let radius = calculate_earth_radius(Degrees(f64::from(i)), wgs84::A, wgs84::B);
            assert!(radius.0 < previous.0);
            previous = radius;
        }
    }
}
