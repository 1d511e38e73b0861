use async_rover_generic::{Distance, RangeFinder};

use crate::{Profile, ProfileStore};

/// Smaller is closer, so a reading right at the threshold already counts.
#[inline]
pub fn is_obstacle(distance: Distance, profile: &Profile) -> bool {
    distance <= profile.detection_distance
}

pub struct ObstacleGate<S> {
    sensor: S,
}

impl<S: RangeFinder> ObstacleGate<S> {
    pub fn new(sensor: S) -> Self {
        Self { sensor }
    }

    pub fn into_inner(self) -> S {
        self.sensor
    }

    /// Takes exactly one reading and compares it against the active detection profile.
    pub async fn obstacle_ahead(&mut self, store: &ProfileStore) -> bool {
        let distance = self.sensor.distance_ahead().await;
        is_obstacle(distance, &store.detection_profile())
    }
}
