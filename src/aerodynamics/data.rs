//! Empirical section polars for the built-in airfoils.
//!
//! Coefficients are tabulated at one-degree increments of angle of attack.
//! The lookup in [`super::Airfoil`] maps angles linearly onto indices, so the
//! spacing must stay uniform. Angles beyond the tabulated range clamp to the
//! first or last entry, which also stands in for the post-stall regime.

use super::airfoil::AirfoilSample;

/// NACA 0012, symmetric. (alpha in degrees, cl, cd)
const NACA_0012_POLAR: [(f64, f64, f64); 37] = [
    (-18.0, -1.3411, 0.0441),
    (-17.0, -1.3783, 0.0334),
    (-16.0, -1.3897, 0.0261),
    (-15.0, -1.3767, 0.0211),
    (-14.0, -1.3407, 0.0175),
    (-13.0, -1.2845, 0.0149),
    (-12.0, -1.2139, 0.0132),
    (-11.0, -1.1337, 0.0118),
    (-10.0, -1.0438, 0.0106),
    (-9.0, -0.9477, 0.0098),
    (-8.0, -0.8487, 0.0092),
    (-7.0, -0.7455, 0.0086),
    (-6.0, -0.6406, 0.0081),
    (-5.0, -0.5365, 0.0076),
    (-4.0, -0.4309, 0.0072),
    (-3.0, -0.3254, 0.0068),
    (-2.0, -0.2182, 0.0066),
    (-1.0, -0.1096, 0.0064),
    (0.0, 0.0000, 0.0064),
    (1.0, 0.1096, 0.0064),
    (2.0, 0.2182, 0.0066),
    (3.0, 0.3254, 0.0068),
    (4.0, 0.4309, 0.0072),
    (5.0, 0.5365, 0.0076),
    (6.0, 0.6406, 0.0081),
    (7.0, 0.7455, 0.0086),
    (8.0, 0.8487, 0.0092),
    (9.0, 0.9477, 0.0098),
    (10.0, 1.0438, 0.0106),
    (11.0, 1.1337, 0.0118),
    (12.0, 1.2139, 0.0132),
    (13.0, 1.2845, 0.0149),
    (14.0, 1.3407, 0.0175),
    (15.0, 1.3767, 0.0211),
    (16.0, 1.3897, 0.0261),
    (17.0, 1.3783, 0.0334),
    (18.0, 1.3411, 0.0441),
];

/// NACA 2412, cambered. Positive lift at zero alpha, asymmetric stall.
const NACA_2412_POLAR: [(f64, f64, f64); 37] = [
    (-18.0, -1.0160, 0.0532),
    (-17.0, -1.0932, 0.0409),
    (-16.0, -1.1581, 0.0316),
    (-15.0, -1.2078, 0.0249),
    (-14.0, -1.2397, 0.0201),
    (-13.0, -1.2183, 0.0166),
    (-12.0, -1.1658, 0.0140),
    (-11.0, -1.0918, 0.0121),
    (-10.0, -0.9974, 0.0107),
    (-9.0, -0.8896, 0.0096),
    (-8.0, -0.7784, 0.0088),
    (-7.0, -0.6641, 0.0082),
    (-6.0, -0.5476, 0.0077),
    (-5.0, -0.4288, 0.0073),
    (-4.0, -0.3085, 0.0070),
    (-3.0, -0.1874, 0.0068),
    (-2.0, -0.0657, 0.0067),
    (-1.0, 0.0564, 0.0066),
    (0.0, 0.1787, 0.0066),
    (1.0, 0.3005, 0.0067),
    (2.0, 0.4212, 0.0068),
    (3.0, 0.5402, 0.0070),
    (4.0, 0.6573, 0.0073),
    (5.0, 0.7721, 0.0077),
    (6.0, 0.8841, 0.0082),
    (7.0, 0.9928, 0.0088),
    (8.0, 1.0977, 0.0096),
    (9.0, 1.1981, 0.0105),
    (10.0, 1.2933, 0.0116),
    (11.0, 1.3826, 0.0130),
    (12.0, 1.4651, 0.0146),
    (13.0, 1.5399, 0.0166),
    (14.0, 1.6058, 0.0192),
    (15.0, 1.6614, 0.0226),
    (16.0, 1.7048, 0.0273),
    (17.0, 1.7336, 0.0341),
    (18.0, 1.7446, 0.0441),
];

fn samples(polar: &[(f64, f64, f64)]) -> Vec<AirfoilSample> {
    polar
        .iter()
        .map(|&(alpha, cl, cd)| AirfoilSample { alpha, cl, cd })
        .collect()
}

pub(crate) fn naca_0012() -> Vec<AirfoilSample> {
    samples(&NACA_0012_POLAR)
}

pub(crate) fn naca_2412() -> Vec<AirfoilSample> {
    samples(&NACA_2412_POLAR)
}
