//! Navigation core: screen identifiers, the transition graph, and the navigator.

mod action;
mod navigator;
mod screen;
mod transitions;

pub use action::Action;
pub use navigator::{MenuPolicy, NavigationState, Navigator};
pub use screen::{Overlay, Screen};
pub use transitions::{Transition, TransitionTable};
