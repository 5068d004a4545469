//! Learning-rate decay schedules.

use brigade_core::config::{LearningConfig, LrSchedule};

/// Linear decay reaches the floor after this many iterations.
const LINEAR_HORIZON: u64 = 100;

/// Step decay shrinks the rate every this many iterations.
const STEP_SIZE: u64 = 10;

/// The learning rate for a given iteration under the configured schedule,
/// never below the floor.
pub fn learning_rate_at(config: &LearningConfig, iteration: u64) -> f64 {
    let initial = config.learning_rate;
    let rate = match config.schedule {
        LrSchedule::Constant => initial,
        LrSchedule::Exponential => initial * config.lr_decay_rate.powi(iteration as i32),
        LrSchedule::Linear => {
            let progress = (iteration as f64 / LINEAR_HORIZON as f64).min(1.0);
            initial - (initial - config.lr_min) * progress
        }
        LrSchedule::Step => {
            initial * config.lr_decay_rate.powi((iteration / STEP_SIZE) as i32)
        }
    };
    rate.max(config.lr_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(schedule: LrSchedule) -> LearningConfig {
        LearningConfig {
            schedule,
            ..LearningConfig::default()
        }
    }

    #[test]
    fn constant_schedule_never_moves() {
        let c = config(LrSchedule::Constant);
        assert_eq!(learning_rate_at(&c, 0), c.learning_rate);
        assert_eq!(learning_rate_at(&c, 500), c.learning_rate);
    }

    #[test]
    fn exponential_decays_to_the_floor() {
        let c = config(LrSchedule::Exponential);
        let early = learning_rate_at(&c, 1);
        let late = learning_rate_at(&c, 500);
        assert!(early < c.learning_rate);
        assert!(late >= c.lr_min);
        assert!((late - c.lr_min).abs() < 1e-6);
    }

    #[test]
    fn linear_hits_the_floor_at_the_horizon() {
        let c = config(LrSchedule::Linear);
        assert!((learning_rate_at(&c, 100) - c.lr_min).abs() < 1e-12);
        assert!((learning_rate_at(&c, 1000) - c.lr_min).abs() < 1e-12);
    }

    #[test]
    fn step_holds_inside_each_step() {
        let c = config(LrSchedule::Step);
        assert_eq!(learning_rate_at(&c, 3), learning_rate_at(&c, 9));
        assert!(learning_rate_at(&c, 10) < learning_rate_at(&c, 9));
    }
}
