/// Configuration shared by the providers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum nesting of record shapes during traversal
    pub max_depth: usize,

    /// Node id stamped into generated snowflake ids
    pub snowflake_node: u16,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the snowflake node id
    pub fn snowflake_node(mut self, node: u16) -> Self {
        self.snowflake_node = node;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 32,
            snowflake_node: 0,
        }
    }
}
