//! Reference output generator plugins for Token Manager
//!
//! Each generator is a deliberately simple serializer over the normalized
//! token tree, implementing [`token_core::OutputPlugin`]:
//!
//! - [`CssVariablesPlugin`]: CSS custom properties with per-mode selector
//!   blocks
//! - [`TailwindThemePlugin`]: nested theme object for Tailwind config
//! - [`SwiftTokensPlugin`]: static constants in a Swift enum
//!
//! All consistency logic (merging, mode resolution) happens before these
//! run; a generator only reads.

mod css;
mod swiftui;
mod tailwind;
pub mod value;

pub use css::CssVariablesPlugin;
pub use swiftui::SwiftTokensPlugin;
pub use tailwind::TailwindThemePlugin;
