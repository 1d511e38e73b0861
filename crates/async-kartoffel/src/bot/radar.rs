use kartoffel::{is_radar_ready, radar_read, radar_scan};

use async_rover_generic::{Distance, RangeFinder};

use core::{future::poll_fn, task::Poll};

use super::error::RadarError;

/// widest scan, the bot sees `RADAR_R` tiles ahead
const RADAR_D: u8 = 9;
const RADAR_R: u8 = 4;

pub const CM_PER_TILE: u16 = 10;

/// reported when every tile in view is free
pub const OUT_OF_RANGE: Distance = Distance((RADAR_R as u16 + 1) * CM_PER_TILE);

/// `Some(true)` for a tile the bot can enter, `None` for characters that are no tile at all.
fn is_free(tile: char) -> Option<bool> {
    match tile {
        '.' => Some(true),
        '@' | ' ' | '|' | '-' | '#' | '+' | '*' | '=' => Some(false),
        _ => None,
    }
}

/// Distance to the first blocked tile, `tiles_ahead` starting with the tile directly in front.
fn distance_from_tiles(tiles_ahead: impl IntoIterator<Item = char>) -> Result<Distance, RadarError> {
    for (i, tile) in (1..).zip(tiles_ahead) {
        if !is_free(tile).ok_or(RadarError::UnknownTile(tile))? {
            return Ok(Distance(i * CM_PER_TILE));
        }
    }
    Ok(OUT_OF_RANGE)
}

/// Uses the radar as a forward-facing range finder.
#[non_exhaustive]
pub struct RadarRange;

impl RadarRange {
    pub(super) fn new() -> Self {
        RadarRange
    }

    pub fn is_ready(&self) -> bool {
        is_radar_ready()
    }

    pub async fn wait(&self) {
        poll_fn(|cx| {
            if self.is_ready() {
                Poll::Ready(())
            } else {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await;
    }

    fn read_ahead() -> Result<Distance, RadarError> {
        radar_scan(RADAR_D.into());
        // straight ahead is dx == 0, with dy counting backwards
        distance_from_tiles(
            (1..=RADAR_R as i8).map(|front| radar_read(RADAR_D.into(), 0, -front, 0) as u8 as char),
        )
    }

    /// Fails instead of waiting for the radar.
    pub fn try_distance_ahead(&mut self) -> Result<Distance, RadarError> {
        if self.is_ready() {
            Self::read_ahead()
        } else {
            Err(RadarError::NotReady)
        }
    }
}

impl RangeFinder for RadarRange {
    async fn distance_ahead(&mut self) -> Distance {
        self.wait().await;
        // unknown tiles are treated as something in the way
        Self::read_ahead().unwrap_or(Distance(CM_PER_TILE))
    }
}
