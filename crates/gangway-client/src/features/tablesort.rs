//! Client-side table sorting. Clicking a sortable header sorts ascending;
//! clicking the same header again flips the direction.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gangway_core::init::Initializer;

use crate::page::{Page, UiCommand};

pub fn init_table_sort(page: &Rc<Page>) -> Initializer {
    let page = page.clone();
    Initializer::new("init_table_sort", move || {
        // (table, column) -> last direction, kept for this page load only.
        let directions: Rc<RefCell<HashMap<(String, String), bool>>> = Rc::default();

        page.delegate("click", "sortable-header", move |p, e| {
            let Some(column) = e.value.clone() else {
                return;
            };
            let table = e.target.clone();
            let mut directions = directions.borrow_mut();
            let ascending = directions
                .entry((table.clone(), column.clone()))
                .and_modify(|asc| *asc = !*asc)
                .or_insert(true);
            p.push_command(UiCommand::SortTable {
                table,
                column,
                ascending: *ascending,
            });
        });
        Ok(())
    })
}
