//! Brief → storyboard derivation: typed input, localization, templates.

pub mod brief;
pub mod locale;
pub mod storyboard;
