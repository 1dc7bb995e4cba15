//! Pipeline orchestrator: Filter → Sort → Paginate, in that order, over
//! the full record list, on every trigger.
//!
//! There is no incremental recomputation; lists are small and correctness
//! wins. The stores and stages are owned instances, not module singletons,
//! so several independent grids (and tests) can coexist.

use trigrid_core::record::{IncidentRecord, RecordPatch};

use crate::filter::FilterSet;
use crate::pagination::{PageInfo, Paginator, DEFAULT_PAGE_SIZE};
use crate::record_store::RecordStore;
use crate::selection::{SelectionSnapshot, SelectionStore};
use crate::sort::SortState;

/// One display row: the record plus its selection mark. The mark is a
/// display concern only; the selection store itself is never altered by a
/// refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub record: IncidentRecord,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPage {
    pub rows: Vec<GridRow>,
    pub info: PageInfo,
    pub selected_count: usize,
}

#[derive(Debug, Default)]
pub struct GridPipeline {
    records: RecordStore,
    selection: SelectionStore,
    filters: FilterSet,
    sort: SortState,
    pager: Paginator,
}

impl GridPipeline {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            records: RecordStore::new(),
            selection: SelectionStore::new(),
            filters: FilterSet::new(),
            sort: SortState::new(),
            pager: Paginator::new(page_size),
        }
    }

    #[must_use]
    pub fn with_default_page_size() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }

    /// Re-run the full pipeline against the current store contents and
    /// hand back the page to display. The current page is kept (clamped
    /// into range); data, filter, and sort triggers go back to page 1.
    pub fn refresh(&mut self) -> GridPage {
        self.rerun(false)
    }

    fn rerun(&mut self, reset_page: bool) -> GridPage {
        let all = self.records.get_all();
        let filtered = self.filters.apply(&all);
        let sorted = self.sort.apply(&filtered);

        if reset_page {
            self.pager.init(sorted.len());
        } else {
            self.pager.sync_total(sorted.len());
        }

        let rows = self
            .pager
            .page_slice(&sorted)
            .iter()
            .map(|record| GridRow {
                selected: self.selection.is_selected(&record.id),
                record: record.clone(),
            })
            .collect();

        GridPage {
            rows,
            info: self.pager.info(),
            selected_count: self.selection.count(),
        }
    }

    // --- data triggers ---------------------------------------------------

    /// Wholesale install of a freshly loaded list.
    pub fn load_records(&mut self, records: Vec<IncidentRecord>) -> GridPage {
        self.records.replace_all(records);
        self.rerun(true)
    }

    pub fn apply_single_edit(&mut self, id: &str, patch: &RecordPatch) -> GridPage {
        self.records.update_one(id, patch);
        self.rerun(true)
    }

    /// Bulk-edit completion: patch every selected id, then re-run.
    pub fn apply_bulk_edit(&mut self, ids: &[String], patch: &RecordPatch) -> GridPage {
        self.records.update_many(ids, patch);
        self.rerun(true)
    }

    // --- filter triggers -------------------------------------------------

    pub fn set_text_filter(&mut self, column_key: &str, raw_value: &str) -> GridPage {
        self.filters.set_text_filter(column_key, raw_value);
        self.rerun(true)
    }

    pub fn set_values_filter(&mut self, column_key: &str, accepted: &[String]) -> GridPage {
        self.filters.set_values_filter(column_key, accepted);
        self.rerun(true)
    }

    pub fn clear_filters(&mut self) -> GridPage {
        self.filters.clear();
        self.rerun(true)
    }

    // --- sort trigger ----------------------------------------------------

    /// Header click. `suppress_sort` is computed by the caller (for
    /// example while a column resize is still settling) and replaces the
    /// upstream global resize flag: when set, the click changes nothing
    /// and the current page is re-emitted.
    pub fn handle_header_click(&mut self, column_key: &str, suppress_sort: bool) -> GridPage {
        if suppress_sort {
            return self.rerun(false);
        }
        self.sort.toggle(column_key);
        self.rerun(true)
    }

    // --- page triggers ---------------------------------------------------

    pub fn go_to_page(&mut self, page: usize) -> GridPage {
        self.pager.set_page(page);
        self.rerun(false)
    }

    pub fn next_page(&mut self) -> GridPage {
        self.pager.next_page();
        self.rerun(false)
    }

    pub fn prev_page(&mut self) -> GridPage {
        self.pager.prev_page();
        self.rerun(false)
    }

    // --- selection (independent of the pipeline) --------------------------

    pub fn toggle_selection(&mut self, id: &str) -> SelectionSnapshot {
        self.selection.toggle(id)
    }

    pub fn set_all_selected(&mut self, ids: &[String], selected: bool) -> SelectionSnapshot {
        self.selection.set_all(ids, selected)
    }

    pub fn clear_selection(&mut self) -> SelectionSnapshot {
        self.selection.clear()
    }

    // --- component access for embedders -----------------------------------

    #[must_use]
    pub fn record_store(&self) -> &RecordStore {
        &self.records
    }

    pub fn record_store_mut(&mut self) -> &mut RecordStore {
        &mut self.records
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionStore {
        &mut self.selection
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    #[must_use]
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        self.pager.info()
    }
}
