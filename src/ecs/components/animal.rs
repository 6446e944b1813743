use bevy_ecs::component::Component;

/// Remaining energy of a sheep or wolf. The agent starves once this drops to 0.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Energy(pub i64);

impl Energy {
    /// Pay the one-unit cost of a step. Returns true while the agent survives.
    pub fn spend_step(&mut self) -> bool {
        self.0 -= 1;
        self.0 > 0
    }

    pub fn gain(&mut self, amount: i64) {
        self.0 += amount;
    }
}

/// Random-walk capability shared by sheep and wolves.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker {
    /// Walk over the 8 Moore neighbours instead of the 4 von Neumann ones.
    pub moore: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_step_reports_starvation() {
        let mut energy = Energy(2);
        assert!(energy.spend_step());
        assert_eq!(energy, Energy(1));
        assert!(!energy.spend_step());
        assert_eq!(energy, Energy(0));
    }

    #[test]
    fn gain_adds() {
        let mut energy = Energy(3);
        energy.gain(20);
        assert_eq!(energy.0, 23);
    }
}
