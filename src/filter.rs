//! Pure selection logic over fetched checklists. No I/O here.

use crate::api::{CheckItem, Checklist};

/// A single check item queued for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionTarget {
    pub checklist_id: String,
    pub check_item_id: String,
}

/// Returns the check items of the first checklist whose name matches.
/// No match is a valid, empty outcome, never an error.
pub fn filter_checklists<'a>(name: &str, checklists: &'a [Checklist]) -> &'a [CheckItem] {
    for checklist in checklists {
        if checklist.name.as_deref() == Some(name) {
            return &checklist.check_items;
        }
    }
    &[]
}

/// Selects the items whose state is exactly "complete", in input order.
/// Items missing a state, an id, or a parent checklist id are skipped,
/// never defaulted.
pub fn completed_check_items(items: &[CheckItem]) -> Vec<DeletionTarget> {
    let mut complete = Vec::new();
    for item in items {
        if item.state.as_deref() != Some("complete") {
            continue;
        }
        if let (Some(checklist_id), Some(check_item_id)) = (&item.id_checklist, &item.id) {
            complete.push(DeletionTarget {
                checklist_id: checklist_id.clone(),
                check_item_id: check_item_id.clone(),
            });
        }
    }
    complete
}
