//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! worker responses, translating them into state changes and action sequences.
//! It is the only place application state is mutated.
//!
//! # Data Flow
//!
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Persistence follows the commit-hook discipline: whenever a handler arm
//! changes the search query or the favorite set, it appends the matching
//! save action to the returned list. The runtime executes those actions after
//! the transition, so every persisted value always reflects the state the user
//! last saw.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::FavoriteSet;
use crate::worker::{WorkerMessage, WorkerResponse};

use super::modes::{InputMode, SearchFocus};

/// Events triggered by user input or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially; every
/// transition completes before the next event is looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Toggles the favorite status of the selected book.
    ToggleFavorite,
    /// Selects the next category (wraps past the end).
    NextCategory,
    /// Selects the previous category (wraps past the start).
    PrevCategory,
    /// Enters search mode with typing focus, keeping any existing query.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the filtered results list (from typing focus).
    FocusResults,
    /// Leaves search mode. The query stays applied as a filter.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query in normal mode.
    Escape,
    /// Closes the plugin pane.
    CloseFocus,
    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(should_render, actions)`: whether the UI changed, plus the side
/// effects to execute in order. The action list is empty for pure navigation
/// and carries persist requests after search or favorites changes.
///
/// # Errors
///
/// Returns errors from state mutation methods. The current handler arms are
/// infallible, but the signature leaves room for fallible transitions.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::ToggleFavorite => {
            let Some(book) = state.selected_book() else {
                tracing::debug!("no book selected to toggle");
                return Ok((false, vec![]));
            };
            let id = book.id;

            state.favorites.toggle(id);
            tracing::debug!(
                book_id = id,
                now_favorite = state.favorites.contains(id),
                "favorite toggled"
            );

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::save_favorites(
                    state.favorites.ids().to_vec(),
                ))],
            ))
        }
        Event::NextCategory => {
            state.next_category();
            Ok((true, vec![]))
        }
        Event::PrevCategory => {
            state.prev_category();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "leaving search mode");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            state.apply_filter();

            tracing::trace!(query = %state.search_query, "search query updated");

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::save_search(
                    state.search_query.clone(),
                ))],
            ))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            if state.search_query.pop().is_none() {
                return Ok((false, vec![]));
            }

            state.apply_filter();

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::save_search(
                    state.search_query.clone(),
                ))],
            ))
        }
        Event::Escape => {
            if state.search_query.is_empty() {
                return Ok((false, vec![]));
            }

            state.search_query.clear();
            state.apply_filter();

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::save_search(
                    String::new(),
                ))],
            ))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::WorkerResponse(response) => match response {
            WorkerResponse::StateLoaded { search, favorites } => {
                tracing::debug!(
                    search_len = search.len(),
                    favorite_count = favorites.len(),
                    "restoring persisted state"
                );

                state.search_query.clone_from(search);
                state.favorites = FavoriteSet::from_ids(favorites.clone());
                state.apply_filter();

                Ok((true, vec![]))
            }
            WorkerResponse::SearchSaved | WorkerResponse::FavoritesSaved => Ok((false, vec![])),
            WorkerResponse::Error { message } => {
                // Best-effort persistence: record the failure, show nothing.
                tracing::error!(error = %message, "worker error");
                Ok((false, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), Theme::default())
    }

    fn saved_favorites(actions: &[Action]) -> Option<Vec<u32>> {
        actions.iter().find_map(|action| match action {
            Action::PostToWorker(WorkerMessage::SaveFavorites { ids, .. }) => Some(ids.clone()),
            _ => None,
        })
    }

    fn saved_search(actions: &[Action]) -> Option<String> {
        actions.iter().find_map(|action| match action {
            Action::PostToWorker(WorkerMessage::SaveSearch { query, .. }) => Some(query.clone()),
            _ => None,
        })
    }

    #[test]
    fn toggle_persists_favorites_on_every_change() {
        let mut state = state();

        let (render, actions) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert!(render);
        assert_eq!(saved_favorites(&actions), Some(vec![1]));

        let (_, actions) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert_eq!(saved_favorites(&actions), Some(vec![]));
    }

    #[test]
    fn typing_updates_filter_and_persists_each_keystroke() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();

        for c in "jojo".chars() {
            let (render, actions) = handle_event(&mut state, &Event::Char(c)).unwrap();
            assert!(render);
            assert!(saved_search(&actions).is_some());
        }

        assert_eq!(state.search_query, "jojo");
        assert_eq!(state.filtered_books.len(), 1);
        assert_eq!(state.filtered_books[0].id, 4);
    }

    #[test]
    fn characters_are_ignored_outside_typing_focus() {
        let mut state = state();

        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn escape_clears_and_persists_empty_query() {
        let mut state = state();
        state.search_query = "berserk".to_string();
        state.apply_filter();

        let (render, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(render);
        assert_eq!(saved_search(&actions), Some(String::new()));
        assert_eq!(state.filtered_books.len(), 8);
    }

    #[test]
    fn exit_search_keeps_query_applied() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('j')).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert!(render);
        assert!(actions.is_empty(), "leaving search mode is not a state change to persist");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "j");
    }

    #[test]
    fn state_loaded_restores_search_and_favorites() {
        let mut state = state();

        let response = WorkerResponse::StateLoaded {
            search: "dostoyevski".to_string(),
            favorites: vec![6, 1],
        };
        let (render, actions) =
            handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        assert!(render);
        assert!(actions.is_empty(), "restoring state must not re-persist it");
        assert_eq!(state.filtered_books.len(), 2);
        assert_eq!(state.favorites.ids(), &[6, 1]);
    }

    #[test]
    fn stale_persisted_ids_are_tolerated() {
        let mut state = state();

        let response = WorkerResponse::StateLoaded {
            search: String::new(),
            favorites: vec![3, 42],
        };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        let favorite_books = state.favorites.favorite_books(state.catalog.books());
        assert_eq!(favorite_books.len(), 1);
        assert_eq!(favorite_books[0].id, 3);
    }

    #[test]
    fn browse_manga_then_toggle_favorite_end_to_end() {
        let mut state = state();

        // Category "Manga" with empty search yields the three manga books in
        // catalog order.
        handle_event(&mut state, &Event::NextCategory).unwrap(); // Klasik
        handle_event(&mut state, &Event::NextCategory).unwrap(); // Manga
        assert_eq!(state.selected_category_name(), "Manga");
        let ids: Vec<u32> = state.filtered_books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);

        // Select Berserk (id 3) and toggle it into the favorites.
        handle_event(&mut state, &Event::KeyDown).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert_eq!(saved_favorites(&actions), Some(vec![3]));
        let favorite_books = state.favorites.favorite_books(state.catalog.books());
        assert_eq!(favorite_books[0].title, "Berserk");

        // Toggling again removes it, leaving the favorites empty.
        let (_, actions) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert_eq!(saved_favorites(&actions), Some(vec![]));
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn worker_save_confirmations_do_not_rerender() {
        let mut state = state();

        let (render, actions) =
            handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::SearchSaved)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "disk full".to_string(),
            }),
        )
        .unwrap();
        assert!(!render, "write failures stay invisible to the UI");
    }
}
