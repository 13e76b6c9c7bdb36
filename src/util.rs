pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;
