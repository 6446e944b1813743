use bevy_ecs::component::Component;

/// Regrowth state of a grass patch.
///
/// `countdown` is 0 whenever `fully_grown` is set.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrassState {
    pub fully_grown: bool,
    pub countdown: u32,
}

impl GrassState {
    pub const fn grown() -> Self {
        Self {
            fully_grown: true,
            countdown: 0,
        }
    }

    /// Mark the patch eaten. Returns false (and changes nothing) if it was
    /// not fully grown.
    pub fn consume(&mut self, regrowth_time: u32) -> bool {
        if !self.fully_grown {
            return false;
        }
        self.fully_grown = false;
        self.countdown = regrowth_time;
        true
    }

    /// One regrowth step. Grown patches are left alone.
    pub fn regrow(&mut self) {
        if self.fully_grown {
            return;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.fully_grown = true;
        }
    }
}
