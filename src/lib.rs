pub mod network {
    pub mod error;
    pub mod generator;
    pub mod graph;
    pub mod macros;
    pub mod member_state;
    pub mod prompt;
    pub mod snapshot;
    pub mod utils;
}
