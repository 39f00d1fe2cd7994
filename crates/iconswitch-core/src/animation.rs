//! Spring physics used to settle the thumb.

// =============================================================================
// SpringConfig - Spring Physics Parameters
// =============================================================================

/// Spring physics configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Mass of the object (affects inertia)
    pub mass: f64,
    /// Stiffness of the spring (affects speed)
    pub stiffness: f64,
    /// Damping coefficient (affects bounciness)
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::SETTLE
    }
}

impl SpringConfig {
    /// Snappy, slightly underdamped spring used for thumb settling.
    pub const SETTLE: Self = Self {
        mass: 1.0,
        stiffness: 400.0,
        damping: 30.0,
    };
}

// =============================================================================
// Spring - Animated Spring Value
// =============================================================================

/// A spring-animated value.
#[derive(Debug, Clone)]
pub struct Spring {
    /// Current value
    pub value: f64,
    /// Target value
    pub target: f64,
    /// Current velocity (units per second)
    pub velocity: f64,
    /// Spring configuration
    pub config: SpringConfig,
    /// Whether animation is complete
    pub at_rest: bool,
    /// Precision threshold for settling
    pub precision: f64,
    /// Hard limits the value may never leave
    pub bounds: Option<(f64, f64)>,
}

impl Spring {
    /// Create a new spring at an initial value.
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            value: initial,
            target: initial,
            velocity: 0.0,
            config: SpringConfig::default(),
            at_rest: true,
            precision: 0.001,
            bounds: None,
        }
    }

    /// Set spring configuration.
    #[must_use]
    pub const fn with_config(mut self, config: SpringConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the settling precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Start with an initial velocity (units per second).
    #[must_use]
    pub const fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    /// Constrain the value to `[min, max]`; hitting a bound kills the
    /// velocity component pushing outward.
    #[must_use]
    pub const fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Set target value.
    pub fn set_target(&mut self, target: f64) {
        if (self.target - target).abs() > f64::EPSILON || self.velocity != 0.0 {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Update spring physics for a time step (dt in seconds).
    pub fn update(&mut self, dt: f64) {
        if self.at_rest {
            return;
        }

        // Spring force: F = -k * x
        let displacement = self.value - self.target;
        let spring_force = -self.config.stiffness * displacement;

        // Damping force: F = -c * v
        let damping_force = -self.config.damping * self.velocity;

        // Total acceleration: a = F / m
        let acceleration = (spring_force + damping_force) / self.config.mass;

        // Semi-implicit Euler
        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if let Some((min, max)) = self.bounds {
            if self.value < min {
                self.value = min;
                self.velocity = self.velocity.max(0.0);
            } else if self.value > max {
                self.value = max;
                self.velocity = self.velocity.min(0.0);
            }
        }

        let displacement = self.value - self.target;
        if displacement.abs() < self.precision && self.velocity.abs() < self.precision {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }

}
