//! Submit handling: validate the field and append to the entry list.

use crate::model::{Entry, EntryRejection};
use crate::state::AppState;
use tracing::debug;

/// Result of processing one `click` notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Trimmed text was appended.
    Appended {
        /// Entry pushed out of a full list, if any.
        evicted: Option<Entry>,
    },
    /// Text was refused. Field, button and list are untouched.
    Rejected(EntryRejection),
}

impl SubmitOutcome {
    /// True when the submission reached the list.
    pub fn is_appended(&self) -> bool {
        matches!(self, SubmitOutcome::Appended { .. })
    }
}

/// Handle a `click` notification.
///
/// On acceptance the trimmed text is appended (evicting the oldest entry
/// when full), the field is cleared and the button hidden. On rejection
/// nothing changes, not even button visibility.
pub fn handle_submit(state: &mut AppState) -> SubmitOutcome {
    let entry = match Entry::new(state.input.value(), state.max_length) {
        Ok(entry) => entry,
        Err(rejection) => {
            debug!(%rejection, "submission rejected");
            return SubmitOutcome::Rejected(rejection);
        }
    };

    let evicted = state.entries.push(entry);
    if let Some(oldest) = &evicted {
        debug!(evicted = %oldest, "entry list full, evicted oldest entry");
    }
    debug!(len = state.entries.len(), "entry appended");

    state.input.clear();
    state.button_visible = false;

    SubmitOutcome::Appended { evicted }
}
