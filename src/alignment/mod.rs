pub mod extract;
pub mod matcher;
pub mod propagate;
