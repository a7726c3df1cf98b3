use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Span of a planform from its area and aspect ratio, `b = sqrt(S * AR)`.
#[inline]
pub fn span_from_area(area: f64, aspect_ratio: f64) -> f64 {
    (area * aspect_ratio).sqrt()
}

/// Mean chord of a planform, `c = S / b`.
#[inline]
pub fn chord_from_area(area: f64, aspect_ratio: f64) -> f64 {
    area / span_from_area(area, aspect_ratio)
}

/// True when every axis of the vector is a finite number
pub fn is_finite_vector(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}
