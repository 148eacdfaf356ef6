use std::time::Duration;

use anyhow::{ensure, Result};

use crate::path::Parametrization;

/// Settings for a fly-through session.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyThroughConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Seconds for one full trip around the path.
    pub loop_period: f32,
    /// How far ahead on the loop the camera looks, as a fraction of a loop.
    pub lead_fraction: f32,
    pub parametrization: Parametrization,
}

impl Default for FlyThroughConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov: 35.0,
            near: 1.0,
            far: 500.0,
            loop_period: 10.0,
            lead_fraction: 0.05,
            parametrization: Parametrization::Uniform,
        }
    }
}

impl FlyThroughConfig {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "window size must be non-zero, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.fov > 0.0 && self.fov < 180.0,
            "fov must be between 0 and 180 degrees, got {}",
            self.fov
        );
        ensure!(
            self.near > 0.0 && self.far > self.near && self.far.is_finite(),
            "clip planes must satisfy 0 < near < far, got near {} far {}",
            self.near,
            self.far
        );
        ensure!(
            self.loop_period > 0.0 && Duration::try_from_secs_f32(self.loop_period).is_ok(),
            "loop period must be a positive, representable number of seconds, got {}",
            self.loop_period
        );
        ensure!(
            self.lead_fraction.is_finite() && self.lead_fraction > 0.0 && self.lead_fraction < 1.0,
            "lead fraction must lie in (0, 1), got {}",
            self.lead_fraction
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FlyThroughConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.aspect(), 800.0 / 600.0);
        assert_eq!(config.loop_period, 10.0);
        assert_eq!(config.lead_fraction, 0.05);
        assert_eq!(config.parametrization, Parametrization::Uniform);
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases: Vec<(FlyThroughConfig, &str)> = vec![
            (FlyThroughConfig { width: 0, ..Default::default() }, "window size"),
            (FlyThroughConfig { fov: 180.0, ..Default::default() }, "fov"),
            (FlyThroughConfig { near: 0.0, ..Default::default() }, "clip planes"),
            (FlyThroughConfig { far: 0.5, ..Default::default() }, "clip planes"),
            (FlyThroughConfig { loop_period: 0.0, ..Default::default() }, "loop period"),
            (FlyThroughConfig { loop_period: f32::NAN, ..Default::default() }, "loop period"),
            (FlyThroughConfig { loop_period: 1e30, ..Default::default() }, "loop period"),
            (FlyThroughConfig { lead_fraction: 0.0, ..Default::default() }, "lead fraction"),
            (FlyThroughConfig { lead_fraction: 1.5, ..Default::default() }, "lead fraction"),
        ];

        for (config, field) in cases {
            let err = config.validate().unwrap_err();
            assert!(
                err.to_string().contains(field),
                "expected error about {}, got: {}",
                field,
                err
            );
        }
    }
}
