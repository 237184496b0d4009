//! Visual theme for Eldritch Eclipse.

mod styles;

pub use styles::GLOBAL_STYLES;
