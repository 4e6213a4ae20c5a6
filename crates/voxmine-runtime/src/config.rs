use serde::Deserialize;

/// Streaming limits for the resident chunk set.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct StreamConfig {
    /// Horizontal load radius in chunks; chunks stay resident out to one more.
    #[serde(default = "default_render_distance")]
    pub render_distance: i32,
    #[serde(default)]
    pub min_chunk_y: i32,
    #[serde(default = "default_max_chunk_y")]
    pub max_chunk_y: i32,
    #[serde(default = "default_max_resident_chunks")]
    pub max_resident_chunks: usize,
    /// Chunk layer whose columns receive trees.
    #[serde(default)]
    pub surface_layer: i32,
    #[serde(default)]
    pub cull_chunk_borders: bool,
}
fn default_render_distance() -> i32 {
    4
}
fn default_max_chunk_y() -> i32 {
    11
}
fn default_max_resident_chunks() -> usize {
    200
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            render_distance: default_render_distance(),
            min_chunk_y: 0,
            max_chunk_y: default_max_chunk_y(),
            max_resident_chunks: default_max_resident_chunks(),
            surface_layer: 0,
            cull_chunk_borders: false,
        }
    }
}

impl StreamConfig {
    /// Clamps values into a usable range: radius at least 1, `max_chunk_y >= min_chunk_y`.
    pub fn validated(mut self) -> Self {
        self.render_distance = self.render_distance.max(1);
        self.max_chunk_y = self.max_chunk_y.max(self.min_chunk_y);
        self
    }

    #[inline]
    pub fn contains_layer(&self, cy: i32) -> bool {
        (self.min_chunk_y..=self.max_chunk_y).contains(&cy)
    }
}
