pub mod scaffold;
pub mod stories;

// Re-export commonly used types
pub use scaffold::Scaffold;
pub use stories::{Genre, Story};
