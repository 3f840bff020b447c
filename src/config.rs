pub const BOARD_SIZE: usize = 10;
/// Largest board a single column letter `'A'..='Z'` can address.
pub const MAX_BOARD_SIZE: usize = 26;
pub const FLEET_LENGTHS: [usize; 5] = [5, 4, 3, 3, 2];
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_PATTERNS_PATH: &str = "harpoon_patterns.bin";
