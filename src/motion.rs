use crate::config::{VELOCITY_CEILING_TENTHS, VELOCITY_STEP_TENTHS};

/// Stop-and-go speed ramp shared by the head and every body segment.
///
/// Stored in tenths of a cell so the ramp 0.0, 0.3, 0.6, ... is exact. The
/// whole-cell part of the value is how far the entity moves on a frame, which
/// makes entities advance one cell every fifth frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Velocity {
    tenths: u8,
}

impl Velocity {
    /// Values above the ceiling are clamped to it.
    #[must_use]
    pub fn from_tenths(tenths: u8) -> Self {
        Self {
            tenths: tenths.min(VELOCITY_CEILING_TENTHS),
        }
    }

    #[must_use]
    pub fn tenths(self) -> u8 {
        self.tenths
    }

    /// Whole cells covered at the current value.
    #[must_use]
    pub fn cells(self) -> i32 {
        i32::from(self.tenths / 10)
    }

    /// Runs one frame of the ramp and returns the cells to move this frame.
    pub fn step(&mut self) -> i32 {
        if self.tenths >= VELOCITY_CEILING_TENTHS {
            self.tenths = 0;
        }

        let cells = self.cells();
        self.tenths += VELOCITY_STEP_TENTHS;
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::Velocity;

    #[test]
    fn ramp_moves_one_cell_every_fifth_frame() {
        let mut velocity = Velocity::default();

        let moves: Vec<i32> = (0..15).map(|_| velocity.step()).collect();

        assert_eq!(moves, vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn ramp_resets_at_ceiling() {
        let mut velocity = Velocity::from_tenths(15);

        assert_eq!(velocity.step(), 0);
        assert_eq!(velocity.tenths(), 3);
    }

    #[test]
    fn oversized_value_is_clamped_to_ceiling() {
        let mut velocity = Velocity::from_tenths(u8::MAX);
        assert_eq!(velocity, Velocity::from_tenths(15));

        assert_eq!(velocity.step(), 0);
        assert_eq!(velocity.tenths(), 3);
    }

    #[test]
    fn ramp_started_mid_cycle_stays_periodic() {
        let mut velocity = Velocity::from_tenths(12);

        assert_eq!(velocity.step(), 1);
        let moves: Vec<i32> = (0..5).map(|_| velocity.step()).collect();
        assert_eq!(moves, vec![0, 0, 0, 0, 1]);
    }
}
