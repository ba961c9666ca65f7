//! Interval arithmetic for ray parameter ranges.
//!
//! Provides closed intervals [min, max] used for ray t-values and bounds checking.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrounds_is_exclusive() {
        let iv = Interval::new(0.0, 1000.0);
        assert!(!iv.surrounds(0.0));
        assert!(iv.surrounds(0.001));
        assert!(iv.surrounds(999.9));
        assert!(!iv.surrounds(1000.0));
        assert!(!iv.surrounds(-1.0));
    }
}
