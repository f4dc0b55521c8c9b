//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a 3x3 matrix given in row-major order, so that
/// [`transform`] computes `matrix * column_vector`.
#[rustfmt::skip]
pub const fn transform_from_rows(m: &[[Component; 3]; 3]) -> Transform {
    // euclid multiplies row vectors, so the matrix is stored transposed.
    Transform::new(
        m[0][0], m[1][0], m[2][0], 0.0,
        m[0][1], m[1][1], m[2][1], 0.0,
        m[0][2], m[1][2], m[2][2], 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Reduce a hue angle in degrees into the range [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid rounds tiny negative values up to 360.0.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_is_wrapped_into_range() {
        assert_component_eq!(normalize_hue(0.0), 0.0);
        assert_component_eq!(normalize_hue(360.0), 0.0);
        assert_component_eq!(normalize_hue(370.0), 10.0);
        assert_component_eq!(normalize_hue(-10.0), 350.0);
        assert_component_eq!(normalize_hue(-720.0), 0.0);
        assert_eq!(normalize_hue(-1.0e-15), 0.0);
    }

    #[test]
    fn transform_multiplies_rows() {
        const M: Transform = transform_from_rows(&[
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        let Components(x, y, z) = transform(&M, Components(1.0, 0.0, -1.0));
        assert_component_eq!(x, -2.0);
        assert_component_eq!(y, -2.0);
        assert_component_eq!(z, -2.0);

        let Components(x, y, z) = transform(&M, Components(0.0, 1.0, 0.0));
        assert_component_eq!(x, 2.0);
        assert_component_eq!(y, 5.0);
        assert_component_eq!(z, 8.0);
    }
}
