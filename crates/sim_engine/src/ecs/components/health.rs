//! Health component

/// Health component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    /// Current health
    pub current: u32,

    /// Maximum health
    pub max: u32,
}

impl Health {
    /// Create a new health component at full health
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Take damage, clamped at zero
    pub fn take_damage(&mut self, damage: u32) {
        self.current = self.current.saturating_sub(damage);
    }

    /// Heal, clamped at the maximum
    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    /// Fraction of health remaining in [0, 1]
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.current as f32 / self.max as f32
        }
    }

    /// Check if dead
    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut health = Health::new(10);
        health.take_damage(25);
        assert_eq!(health.current, 0);
        assert!(health.is_dead());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut health = Health::new(10);
        health.take_damage(5);
        health.heal(100);
        assert_eq!(health.current, 10);
    }

    #[test]
    fn test_fraction() {
        let mut health = Health::new(4);
        health.take_damage(1);
        assert_relative_eq!(health.fraction(), 0.75);
        assert_relative_eq!(Health::new(0).fraction(), 0.0);
    }
}
