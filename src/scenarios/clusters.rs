//! Small-body gravity clusters

use super::Spawner;
use crate::physics::{Body, BodyError, Scalar, Vector};
use bevy::color::palettes::css;
use bevy::color::Srgba;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f64::consts::TAU;

const CERES_MASS: Scalar = 8000.0;
const JUPITER_MASS: Scalar = 20000.0;

/// Unit vector at `angle` radians from +x, counter-clockwise
fn polar(angle: Scalar) -> Vector {
    Vector::from_angle(angle)
}

/// Counter-clockwise tangent of [`polar`]
fn tangent(angle: Scalar) -> Vector {
    polar(angle).perp()
}

pub(super) fn asteroid_belt<R: Rng + ?Sized>(
    spawner: &mut Spawner,
    rng: &mut R,
    gravitational_constant: Scalar,
) -> Result<(), BodyError> {
    spawner.spawn(
        "Ceres",
        css::LIGHT_BLUE,
        Body::builder(Vector::ZERO, 20.0).mass(CERES_MASS),
    )?;

    let asteroids: [(&str, Scalar, Scalar, Srgba); 7] = [
        ("Vesta", 3500.0, 12.0, css::ORANGE),
        ("Pallas", 3200.0, 11.0, css::GRAY),
        ("Hygiea", 2800.0, 10.0, css::DARK_GRAY),
        ("Interamnia", 2200.0, 8.0, css::BROWN),
        ("Davida", 1800.0, 7.0, css::TAN),
        ("Sylvia", 1600.0, 6.0, css::LIGHT_GRAY),
        ("Cybele", 1400.0, 6.0, css::DARK_BLUE),
    ];

    let count = asteroids.len() as Scalar;
    for (i, (name, mass, radius, color)) in asteroids.into_iter().enumerate() {
        let angle = i as Scalar / count * TAU;
        let distance = 120.0 + rng.random_range(-30..=50) as Scalar;

        // Slightly sub-circular, so orbits come out elliptical
        let orbital_speed = (gravitational_constant * CERES_MASS / distance).sqrt() * 0.8;
        let jitter = Vector::new(
            rng.random_range(-20..=20) as Scalar,
            rng.random_range(-20..=20) as Scalar,
        );

        spawner.spawn(
            name,
            color,
            Body::builder(polar(angle) * distance, radius)
                .mass(mass)
                .velocity(tangent(angle) * orbital_speed + jitter),
        )?;
    }

    Ok(())
}

pub(super) fn kuiper_belt<R: Rng + ?Sized>(
    spawner: &mut Spawner,
    rng: &mut R,
) -> Result<(), BodyError> {
    spawner.spawn(
        "Pluto",
        css::BROWN,
        Body::builder(Vector::new(-15.0, 0.0), 15.0)
            .mass(6000.0)
            .velocity(Vector::new(0.0, 30.0)),
    )?;
    spawner.spawn(
        "Charon",
        css::GRAY,
        Body::builder(Vector::new(15.0, 0.0), 8.0)
            .mass(2000.0)
            .velocity(Vector::new(0.0, -90.0)),
    )?;

    let objects: [(&str, Scalar, Scalar, Srgba); 6] = [
        ("Eris", 5800.0, 14.0, css::WHITE),
        ("Makemake", 3500.0, 11.0, css::RED),
        ("Haumea", 4200.0, 12.0, css::YELLOW),
        ("Orcus", 2800.0, 9.0, css::PURPLE),
        ("Quaoar", 3200.0, 10.0, css::LIGHT_BLUE),
        ("Sedna", 2600.0, 8.0, css::ORANGE),
    ];

    for (name, mass, radius, color) in objects {
        let angle = rng.random_range(0.0..TAU);
        let distance = rng.random_range(150..=280) as Scalar;

        let speed = rng.random_range(40..=80) as Scalar;
        let heading = Vector::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0))
            .normalize_or_zero();

        spawner.spawn(
            name,
            color,
            Body::builder(polar(angle) * distance, radius)
                .mass(mass)
                .velocity(heading * speed),
        )?;
    }

    Ok(())
}

pub(super) fn jovian_moons<R: Rng + ?Sized>(
    spawner: &mut Spawner,
    rng: &mut R,
    gravitational_constant: Scalar,
) -> Result<(), BodyError> {
    spawner.spawn(
        "Jupiter",
        css::ORANGE,
        Body::builder(Vector::ZERO, 35.0).mass(JUPITER_MASS),
    )?;

    let moons: [(&str, Scalar, Scalar, Scalar, Srgba); 4] = [
        ("Io", 80.0, 2500.0, 8.0, css::YELLOW),
        ("Europa", 110.0, 2200.0, 7.0, css::LIGHT_BLUE),
        ("Ganymede", 150.0, 4000.0, 12.0, css::BROWN),
        ("Callisto", 200.0, 3500.0, 10.0, css::DARK_GRAY),
    ];

    for (name, distance, mass, radius, color) in moons {
        let angle = rng.random_range(0.0..TAU);
        let orbital_speed = (gravitational_constant * JUPITER_MASS / distance).sqrt();

        spawner.spawn(
            name,
            color,
            Body::builder(polar(angle) * distance, radius)
                .mass(mass)
                .velocity(tangent(angle) * orbital_speed),
        )?;
    }

    Ok(())
}

const SMALL_BODY_COUNT: usize = 12;

const SMALL_BODY_PALETTE: [Srgba; 8] = [
    css::WHITE,
    css::GRAY,
    css::BROWN,
    css::ORANGE,
    css::YELLOW,
    css::LIGHT_BLUE,
    css::RED,
    css::PURPLE,
];

pub(super) fn random_small_bodies<R: Rng + ?Sized>(
    spawner: &mut Spawner,
    rng: &mut R,
) -> Result<(), BodyError> {
    for i in 0..SMALL_BODY_COUNT {
        let position = Vector::new(
            rng.random_range(-540..=540) as Scalar,
            rng.random_range(-260..=260) as Scalar,
        );

        let mass = rng.random_range(800..=3000);
        let radius = (mass / 200).max(4) as Scalar;

        let velocity = Vector::new(
            rng.random_range(-60..=60) as Scalar,
            rng.random_range(-60..=60) as Scalar,
        );

        let color = *SMALL_BODY_PALETTE.choose(rng).unwrap_or(&css::WHITE);

        spawner.spawn(
            format!("Body{}", i + 1),
            color,
            Body::builder(position, radius)
                .mass(mass as Scalar)
                .velocity(velocity),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::BodyAppearance;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn spawn_with<F>(build: F) -> (Vec<Body>, Vec<BodyAppearance>)
    where
        F: FnOnce(&mut Spawner, &mut ChaCha8Rng) -> Result<(), BodyError>,
    {
        let mut spawner = Spawner::new(80);
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        build(&mut spawner, &mut rng).unwrap();
        spawner.finish()
    }

    #[test]
    fn test_asteroid_belt_ring() {
        let (bodies, appearances) = spawn_with(|s, r| asteroid_belt(s, r, 5000.0));

        assert_eq!(bodies.len(), 8);
        assert_eq!(appearances[0].name, "Ceres");
        assert_eq!(bodies[0].mass(), CERES_MASS);
        assert_eq!(bodies[0].position, Vector::ZERO);

        for body in &bodies[1..] {
            let distance = body.position.length();
            assert!(
                (90.0 - 1e-9..=170.0 + 1e-9).contains(&distance),
                "asteroid at distance {distance} outside the ring"
            );
        }
    }

    #[test]
    fn test_kuiper_belt_layout() {
        let (bodies, appearances) = spawn_with(|s, r| kuiper_belt(s, r));

        assert_eq!(bodies.len(), 8);
        assert_eq!(appearances[1].name, "Charon");
        assert_eq!(bodies[0].velocity, Vector::new(0.0, 30.0));
        assert_eq!(bodies[1].velocity, Vector::new(0.0, -90.0));

        for body in &bodies[2..] {
            let distance = body.position.length();
            let speed = body.velocity.length();
            assert!((150.0 - 1e-9..=280.0 + 1e-9).contains(&distance));
            assert!((40.0 - 1e-9..=80.0 + 1e-9).contains(&speed));
        }
    }

    #[test]
    fn test_jovian_moons_circular_speeds() {
        let (bodies, _) = spawn_with(|s, r| jovian_moons(s, r, 5000.0));

        assert_eq!(bodies.len(), 5);
        for (body, distance) in bodies[1..].iter().zip([80.0, 110.0, 150.0, 200.0]) {
            assert!((body.position.length() - distance).abs() < 1e-9);

            let expected_speed = (5000.0 * JUPITER_MASS / distance).sqrt();
            assert!((body.velocity.length() - expected_speed).abs() < 1e-9);
            // Tangential: no radial component
            assert!(body.velocity.dot(body.position).abs() < 1e-6);
        }
    }

    #[test]
    fn test_random_small_bodies_ranges() {
        let (bodies, appearances) = spawn_with(|s, r| random_small_bodies(s, r));

        assert_eq!(bodies.len(), SMALL_BODY_COUNT);
        assert_eq!(appearances[11].name, "Body12");

        for body in &bodies {
            assert!((800.0..=3000.0).contains(&body.mass()));
            assert_eq!(body.radius(), (body.mass() as i64 / 200).max(4) as Scalar);
            assert!(body.position.x.abs() <= 540.0);
            assert!(body.position.y.abs() <= 260.0);
            assert!(body.velocity.x.abs() <= 60.0 && body.velocity.y.abs() <= 60.0);
        }
    }
}
