//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to the UI components.
//!
//! # Architecture
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: transform `AppState` into `UiViewModel`
//! 2. **Component Rendering**: delegate to the component layout

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and hands it to the screen
/// layout. Prints ANSI-styled output via `print!`; does not clear the screen
/// or manage cursor visibility — Zellij owns the pane lifecycle.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_screen(&viewmodel, &state.theme, rows, cols);
}
