#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct NotReady;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RadarError {
    NotReady,
    /// the radar reported a character that is not a known tile
    UnknownTile(char),
}
impl From<NotReady> for RadarError {
    fn from(_: NotReady) -> Self {
        RadarError::NotReady
    }
}
