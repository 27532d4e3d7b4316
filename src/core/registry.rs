use crate::core::ship::ContainerShip;
use crate::utils::error::{FleetError, Result};

/// Ordered collection of every known ship. Ship names need not be unique;
/// ships are addressed by their zero-based position.
#[derive(Debug, Clone, Default)]
pub struct FleetRegistry {
    ships: Vec<ContainerShip>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a ship and returns its index.
    pub fn add_ship(&mut self, ship: ContainerShip) -> usize {
        tracing::debug!("Registering ship {} at index {}", ship.name(), self.ships.len());
        self.ships.push(ship);
        self.ships.len() - 1
    }

    pub fn remove_ship(&mut self, index: usize) -> Result<ContainerShip> {
        self.check_index(index)?;
        let ship = self.ships.remove(index);
        tracing::debug!(
            "Removed ship {} with {} containers on board",
            ship.name(),
            ship.container_count()
        );
        Ok(ship)
    }

    /// Restartable view of `(index, ship)` pairs in registry order.
    pub fn list_ships(&self) -> impl Iterator<Item = (usize, &ContainerShip)> + Clone + '_ {
        self.ships.iter().enumerate()
    }

    pub fn ship(&self, index: usize) -> Result<&ContainerShip> {
        self.check_index(index)?;
        Ok(&self.ships[index])
    }

    pub fn ship_mut(&mut self, index: usize) -> Result<&mut ContainerShip> {
        self.check_index(index)?;
        Ok(&mut self.ships[index])
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.ships.len() {
            return Err(FleetError::IndexOutOfRange {
                index,
                len: self.ships.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship(name: &str) -> ContainerShip {
        ContainerShip::new(name, 12.0, 10, 5000.0).unwrap()
    }

    #[test]
    fn test_add_returns_sequential_indices() {
        let mut registry = FleetRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.add_ship(ship("Aurora")), 0);
        assert_eq!(registry.add_ship(ship("Aurora")), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut registry = FleetRegistry::new();
        assert!(matches!(
            registry.remove_ship(0),
            Err(FleetError::IndexOutOfRange { index: 0, len: 0 })
        ));

        registry.add_ship(ship("Aurora"));
        assert!(matches!(
            registry.remove_ship(1),
            Err(FleetError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_returns_ship_and_shifts_the_rest() {
        let mut registry = FleetRegistry::new();
        registry.add_ship(ship("Aurora"));
        registry.add_ship(ship("Borealis"));
        registry.add_ship(ship("Cygnus"));

        let removed = registry.remove_ship(1).unwrap();
        assert_eq!(removed.name(), "Borealis");

        let names: Vec<(usize, &str)> = registry.list_ships().map(|(i, s)| (i, s.name())).collect();
        assert_eq!(names, vec![(0, "Aurora"), (1, "Cygnus")]);
    }

    #[test]
    fn test_list_ships_is_restartable() {
        let mut registry = FleetRegistry::new();
        registry.add_ship(ship("Aurora"));
        registry.add_ship(ship("Borealis"));

        let listing = registry.list_ships();
        assert_eq!(listing.clone().count(), 2);
        assert_eq!(listing.map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(registry.list_ships().count(), 2);
    }
}
