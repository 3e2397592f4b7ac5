//! Resto Pager library - screen navigation for a restaurant staff-paging app
//!
//! The app is a walkthrough of thirteen screens with literal sample content.
//! What it models is the navigation layer: which screen is visible, which
//! actions lead where, and two overlay menus that open independently.
//!
//! # Architecture
//!
//! - **Navigation**: closed [`Screen`] set, [`TransitionTable`], [`Navigator`]
//! - **Registry**: [`ScreenRegistry`], the validated screen-to-content mapping
//! - **Shell**: terminal host ([`ShellController`]) with a wall-clock [`Clock`]
//! - **Config**: [`ShellConfig`] from TOML plus command-line overrides
//!
//! # Example
//!
//! ```
//! use resto_pager::{Action, Navigator, Screen};
//!
//! let mut navigator = Navigator::new();
//! navigator.dispatch(Action::SubmitRegistration);
//! navigator.dispatch(Action::ConfirmPayment);
//! assert_eq!(navigator.current_state().current_screen, Screen::ServersEmpty);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod navigation;
mod registry;
mod shell;

// Crate-level exports - Errors
pub use error::{ConfigError, InvalidScreenError, RegistryError};

// Crate-level exports - Configuration
pub use config::ShellConfig;

// Crate-level exports - Navigation core
pub use navigation::{
    Action, MenuPolicy, NavigationState, Navigator, Overlay, Screen, Transition, TransitionTable,
};

// Crate-level exports - Screen registry
pub use registry::{Control, OverlayEntry, ScreenEntry, ScreenRegistry};

// Crate-level exports - Shell
pub use shell::{
    Clock, Command, Flow, ShellController, View, command_for, draw, local_time, run_shell,
};
