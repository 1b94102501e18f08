//! Name-based lookup of the available integrators
//!
//! Integrators describe themselves through [`Integrator::name`] and
//! [`Integrator::aliases`]. Registering one indexes it under its canonical
//! name and records each alias as a pointer to that name.

use super::Integrator;
use bevy::prelude::*;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// A name that resolves to no registered integrator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Unknown integrator: '{name}'. Available integrators: {}. Aliases: {}",
    .available.join(", "),
    .aliases.join(", ")
)]
pub struct UnknownIntegrator {
    pub name: String,
    pub available: Vec<String>,
    pub aliases: Vec<String>,
}

/// Integrators keyed by canonical name, plus an alias table
///
/// Lookups are case-sensitive. Registering a second integrator under an
/// existing name replaces the first.
#[derive(Resource)]
pub struct IntegratorRegistry {
    by_name: BTreeMap<&'static str, Box<dyn Integrator>>,
    aliases: HashMap<&'static str, &'static str>,
}

impl IntegratorRegistry {
    /// Registry with nothing registered
    pub fn new() -> Self {
        Self {
            by_name: BTreeMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Registry with symplectic and explicit Euler
    pub fn standard() -> Self {
        use super::{ExplicitEuler, SymplecticEuler};

        Self::new()
            .with_integrator(Box::new(SymplecticEuler))
            .with_integrator(Box::new(ExplicitEuler))
    }

    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.register(integrator);
        self
    }

    pub fn register(&mut self, integrator: Box<dyn Integrator>) {
        let name = integrator.name();
        for alias in integrator.aliases() {
            self.aliases.insert(alias, name);
        }
        self.by_name.insert(name, integrator);
    }

    /// Resolve a canonical name or alias to the canonical name
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        if let Some((&canonical, _)) = self.by_name.get_key_value(name) {
            return Some(canonical);
        }
        self.aliases.get(name).copied()
    }

    /// A fresh boxed instance of the named integrator
    pub fn create(&self, name: &str) -> Result<Box<dyn Integrator>, UnknownIntegrator> {
        self.resolve(name)
            .and_then(|canonical| self.by_name.get(canonical))
            .map(|integrator| integrator.clone_box())
            .ok_or_else(|| UnknownIntegrator {
                name: name.to_string(),
                available: self.list_available(),
                aliases: self
                    .list_aliases()
                    .into_iter()
                    .map(|(alias, _)| alias)
                    .collect(),
            })
    }

    /// Canonical names in sorted order
    pub fn list_available(&self) -> Vec<String> {
        self.by_name.keys().map(|name| name.to_string()).collect()
    }

    /// `(canonical name, convergence order)` pairs sorted by name
    pub fn list_orders(&self) -> Vec<(String, usize)> {
        self.by_name
            .iter()
            .map(|(name, integrator)| (name.to_string(), integrator.convergence_order()))
            .collect()
    }

    /// `(alias, canonical name)` pairs sorted by alias
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .aliases
            .iter()
            .filter(|(alias, _)| !self.by_name.contains_key(*alias))
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect();

        aliases.sort();
        aliases
    }
}

impl Default for IntegratorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::integrators::{ExplicitEuler, SymplecticEuler};
    use crate::physics::math::{Scalar, Vector};

    /// Moves bodies by a fixed offset regardless of `dt`
    #[derive(Debug, Clone, Copy)]
    struct Nudge;

    impl Integrator for Nudge {
        fn clone_box(&self) -> Box<dyn Integrator> {
            Box::new(*self)
        }

        fn step(&self, position: &mut Vector, _: &mut Vector, _: Vector, _: Scalar) {
            *position += Vector::X;
        }

        fn convergence_order(&self) -> usize {
            0
        }

        fn name(&self) -> &'static str {
            "nudge"
        }

        fn aliases(&self) -> Vec<&'static str> {
            vec!["shove"]
        }
    }

    #[test]
    fn test_standard_registry() {
        let registry = IntegratorRegistry::standard();

        assert_eq!(
            registry.list_available(),
            vec!["explicit_euler".to_string(), "symplectic_euler".to_string()]
        );
        assert_eq!(registry.resolve("euler"), Some("symplectic_euler"));
        assert_eq!(registry.resolve("semi_implicit_euler"), Some("symplectic_euler"));
        assert_eq!(registry.resolve("forward_euler"), Some("explicit_euler"));
        assert_eq!(registry.resolve("leapfrog"), None);
    }

    #[test]
    fn test_list_orders() {
        let registry = IntegratorRegistry::standard().with_integrator(Box::new(Nudge));

        assert_eq!(
            registry.list_orders(),
            vec![
                ("explicit_euler".to_string(), 1),
                ("nudge".to_string(), 0),
                ("symplectic_euler".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_created_integrators_step_like_the_originals() {
        let registry = IntegratorRegistry::standard();
        let acceleration = Vector::new(0.0, -10.0);

        for name in ["euler", "forward_euler"] {
            let created = registry.create(name).unwrap();
            let (mut p1, mut v1) = (Vector::ZERO, Vector::X);
            let (mut p2, mut v2) = (Vector::ZERO, Vector::X);

            created.step(&mut p1, &mut v1, acceleration, 0.1);
            match created.name() {
                "symplectic_euler" => SymplecticEuler.step(&mut p2, &mut v2, acceleration, 0.1),
                _ => ExplicitEuler.step(&mut p2, &mut v2, acceleration, 0.1),
            }

            assert_eq!((p1, v1), (p2, v2), "{name} stepped differently");
        }
    }

    #[test]
    fn test_custom_integrator_and_alias() {
        let registry = IntegratorRegistry::standard().with_integrator(Box::new(Nudge));

        let nudge = registry.create("shove").unwrap();
        let (mut position, mut velocity) = (Vector::ZERO, Vector::ZERO);
        nudge.step(&mut position, &mut velocity, Vector::ZERO, 1.0);

        assert_eq!(nudge.name(), "nudge");
        assert_eq!(position, Vector::X);
        assert!(
            registry
                .list_aliases()
                .contains(&("shove".to_string(), "nudge".to_string()))
        );
    }

    #[test]
    fn test_unknown_name_lists_choices() {
        let error = IntegratorRegistry::standard().create("rk4").unwrap_err();
        let message = error.to_string();

        assert_eq!(error.name, "rk4");
        assert!(message.starts_with("Unknown integrator: 'rk4'"));
        assert!(message.contains("explicit_euler, symplectic_euler"));
        assert!(message.contains("forward_euler"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = IntegratorRegistry::standard();

        assert!(registry.create("Symplectic_Euler").is_err());
        assert!(registry.create("symplectic_euler").is_ok());
    }

    #[test]
    fn test_reregistering_replaces() {
        let registry = IntegratorRegistry::new()
            .with_integrator(Box::new(Nudge))
            .with_integrator(Box::new(Nudge));

        assert_eq!(registry.list_available(), vec!["nudge".to_string()]);
        assert_eq!(registry.list_aliases().len(), 1);
    }

    #[test]
    fn test_empty_registry_knows_nothing() {
        let registry = IntegratorRegistry::new();

        assert!(registry.list_available().is_empty());
        assert!(registry.list_aliases().is_empty());
        assert!(registry.create("symplectic_euler").is_err());
    }
}
