use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use derive_setters::Setters;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::schema::{FieldType, Record, Schema, Value};

// The only recoverable error the view engine produces: an operation named a
// field the schema does not know. State is left untouched when this happens.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    UnknownField(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    // Exact match against the field value
    Equals(Value),
    // Categorical membership
    OneOf(Vec<Value>),
    // Half-open numeric interval [low, high); None makes a side unbounded
    Range { low: Option<f64>, high: Option<f64> },
}

impl Predicate {
    fn matches(&self, value: &Value) -> bool {
        match self {
            Predicate::Equals(v) => value == v,
            Predicate::OneOf(vs) => vs.contains(value),
            Predicate::Range { low, high } => match value.as_num() {
                // Mistyped values never pass a numeric filter
                None => false,
                Some(v) => {
                    low.map(|l| v >= l).unwrap_or(true) && high.map(|h| v < h).unwrap_or(true)
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

// The live view configuration: search, filters, sort and selection.
#[derive(Debug, Clone)]
pub struct ViewState {
    search_text: String,
    field_filters: HashMap<String, Predicate>,
    sort_key: String,
    direction: SortDirection,
    selection: HashSet<String>,
}

impl ViewState {
    fn new(sort_key: &str) -> Self {
        ViewState {
            search_text: String::new(),
            field_filters: HashMap::new(),
            sort_key: sort_key.to_string(),
            direction: SortDirection::Descending,
            selection: HashSet::new(),
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn filter(&self, field: &str) -> Option<&Predicate> {
        self.field_filters.get(field)
    }

    pub fn active_filters(&self) -> usize {
        self.field_filters.len()
    }

    pub fn selection(&self) -> &HashSet<String> {
        &self.selection
    }
}

#[derive(Debug, Clone, Setters)]
#[setters(prefix = "with_")]
pub struct ExportOptions {
    pub delimiter: char,
    pub line_terminator: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            delimiter: ',',
            line_terminator: "\n".to_string(),
        }
    }
}

// A filterable, sortable, exportable view over a record collection. The
// collection itself is never mutated; the view only maintains a row mapping
// (indices into the source) that is recomputed on every state change.
pub struct TabularDataView {
    schema: Schema,
    records: Vec<Record>,
    state: ViewState,
    rows: Vec<usize>,
    warned: HashSet<String>,
}

impl TabularDataView {
    pub fn new(
        schema: Schema,
        records: Vec<Record>,
        default_sort: &str,
    ) -> Result<Self, ViewError> {
        if !schema.contains(default_sort) {
            return Err(ViewError::UnknownField(default_sort.to_string()));
        }
        let mut view = TabularDataView {
            state: ViewState::new(default_sort),
            rows: Vec::with_capacity(records.len()),
            warned: HashSet::new(),
            schema,
            records,
        };
        view.check_data_quality();
        view.recompute();
        Ok(view)
    }

    // One warning per offending record, never a crash.
    fn check_data_quality(&mut self) {
        for record in &self.records {
            let mistyped = self.schema.fields().iter().any(|f| {
                record
                    .get(&f.name)
                    .map(|v| !v.matches_type(f.ftype))
                    .unwrap_or(false)
            });
            if mistyped && self.warned.insert(record.id().to_string()) {
                warn!("Record {} has mistyped field values", record.id());
            }
        }
    }

    pub fn set_search_text(&mut self, text: &str) {
        trace!("Search text set to \"{}\"", text);
        self.state.search_text = text.to_string();
        self.recompute();
    }

    pub fn set_field_filter(
        &mut self,
        field: &str,
        predicate: Option<Predicate>,
    ) -> Result<(), ViewError> {
        if !self.schema.contains(field) {
            return Err(ViewError::UnknownField(field.to_string()));
        }
        match predicate {
            Some(p) => {
                trace!("Filter on \"{}\": {:?}", field, p);
                self.state.field_filters.insert(field.to_string(), p);
            }
            None => {
                trace!("Filter on \"{}\" cleared", field);
                self.state.field_filters.remove(field);
            }
        }
        self.recompute();
        Ok(())
    }

    // Leaves search text and sort untouched.
    pub fn clear_all_filters(&mut self) {
        self.state.field_filters.clear();
        self.recompute();
    }

    // Sorting the current key again flips the direction; a new key starts
    // descending so the first click shows highest-risk-first.
    pub fn set_sort(&mut self, field: &str) -> Result<(), ViewError> {
        if !self.schema.contains(field) {
            return Err(ViewError::UnknownField(field.to_string()));
        }
        if self.state.sort_key == field {
            self.state.direction = self.state.direction.flip();
        } else {
            self.state.sort_key = field.to_string();
            self.state.direction = SortDirection::Descending;
        }
        self.recompute();
        Ok(())
    }

    // Selection is scoped to what is visible; toggling a filtered-out or
    // unknown id is a no-op.
    pub fn toggle_select(&mut self, id: &str) {
        if !self.rows.iter().any(|&i| self.records[i].id() == id) {
            return;
        }
        if !self.state.selection.remove(id) {
            self.state.selection.insert(id.to_string());
        }
    }

    // Acts as a toggle: selecting when everything visible is already selected
    // deselects instead.
    pub fn select_all_visible(&mut self) {
        let visible: HashSet<String> = self.visible_ids().map(str::to_string).collect();
        if self.state.selection == visible {
            self.state.selection.clear();
        } else {
            self.state.selection = visible;
        }
    }

    pub fn deselect_all(&mut self) {
        self.state.selection.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selection.contains(id)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn source_len(&self) -> usize {
        self.records.len()
    }

    pub fn visible_len(&self) -> usize {
        self.rows.len()
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter().map(|&i| &self.records[i])
    }

    pub fn visible_ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|&i| self.records[i].id())
    }

    pub fn visible_record(&self, row: usize) -> Option<&Record> {
        self.rows.get(row).map(|&i| &self.records[i])
    }

    // Delimited text for the current visible set: a header row of column
    // labels, then one row per record in display order. Values get RFC-4180
    // style quoting so a standard reader round-trips them.
    pub fn export_visible(
        &self,
        columns: &[&str],
        opts: &ExportOptions,
    ) -> Result<String, ViewError> {
        let mut labels = Vec::with_capacity(columns.len());
        for &c in columns {
            match self.schema.field(c) {
                Some(spec) => labels.push(Self::escape_cell(&spec.label, opts.delimiter)),
                None => return Err(ViewError::UnknownField(c.to_string())),
            }
        }

        let delimiter = opts.delimiter.to_string();
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(labels.join(&delimiter));
        for record in self.visible_records() {
            let cells: Vec<String> = columns
                .iter()
                .map(|&c| {
                    let raw = record.get(c).map(|v| v.render()).unwrap_or_default();
                    Self::escape_cell(&raw, opts.delimiter)
                })
                .collect();
            lines.push(cells.join(&delimiter));
        }
        debug!("Exported {} rows, {} columns", self.rows.len(), columns.len());
        Ok(lines.join(&opts.line_terminator))
    }

    fn escape_cell(raw: &str, delimiter: char) -> String {
        let needs_quoting = raw.contains(delimiter)
            || raw.contains('"')
            || raw.contains('\n')
            || raw.contains('\r');
        if needs_quoting {
            format!("\"{}\"", raw.replace('"', "\"\""))
        } else {
            raw.to_string()
        }
    }

    // Derivation is always filter first, then a stable sort. The row mapping
    // and the selection are refreshed together so no stale read is possible.
    fn recompute(&mut self) {
        let needle = self.state.search_text.to_lowercase();
        let schema = &self.schema;
        let state = &self.state;
        let records = &self.records;

        let mut rows: Vec<usize> = (0..records.len())
            .into_par_iter()
            .filter(|&i| Self::matches(schema, state, &needle, &records[i]))
            .collect();

        // Records mistyped on an active numeric sort key drop out instead of
        // aborting the sort.
        let sort_spec = schema
            .field(&state.sort_key)
            .expect("sort key validated on set");
        if sort_spec.ftype == FieldType::Numeric {
            let mut dropped = Vec::new();
            rows.retain(|&i| {
                let ok = records[i]
                    .get(&state.sort_key)
                    .and_then(Value::as_num)
                    .is_some();
                if !ok {
                    dropped.push(records[i].id().to_string());
                }
                ok
            });
            for id in dropped {
                if self.warned.insert(id.clone()) {
                    warn!("Record {} excluded: non-numeric \"{}\"", id, state.sort_key);
                }
            }
        }

        let key = self.state.sort_key.clone();
        let ftype = sort_spec.ftype;
        let direction = self.state.direction;
        rows.sort_by(|&a, &b| {
            let ord = Self::compare(ftype, self.records[a].get(&key), self.records[b].get(&key));
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });

        let visible: HashSet<&str> = rows.iter().map(|&i| self.records[i].id()).collect();
        self.state.selection.retain(|id| visible.contains(id.as_str()));
        self.rows = rows;
        trace!(
            "Recomputed view: {}/{} rows visible, {} selected",
            self.rows.len(),
            self.records.len(),
            self.state.selection.len()
        );
    }

    fn matches(schema: &Schema, state: &ViewState, needle: &str, record: &Record) -> bool {
        let matches_search = needle.is_empty()
            || schema.searchable_fields().any(|f| {
                record
                    .get(&f.name)
                    .map(|v| v.render().to_lowercase().contains(needle))
                    .unwrap_or(false)
            });
        if !matches_search {
            return false;
        }
        state.field_filters.iter().all(|(field, predicate)| {
            record
                .get(field)
                .map(|v| predicate.matches(v))
                .unwrap_or(false)
        })
    }

    fn compare(ftype: FieldType, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        match ftype {
            FieldType::Numeric => {
                let av = a.and_then(Value::as_num).unwrap_or(f64::NEG_INFINITY);
                let bv = b.and_then(Value::as_num).unwrap_or(f64::NEG_INFINITY);
                av.partial_cmp(&bv).unwrap_or(Ordering::Equal)
            }
            _ => {
                let av = a.map(Value::render).unwrap_or_default();
                let bv = b.map(Value::render).unwrap_or_default();
                av.cmp(&bv)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AGE_BANDS, RISK_BANDS, retention_customers, retention_schema};
    use crate::schema::FieldSpec;

    fn view() -> TabularDataView {
        TabularDataView::new(retention_schema(), retention_customers(), "churn_probability")
            .unwrap()
    }

    fn visible(view: &TabularDataView) -> Vec<&str> {
        view.visible_ids().collect()
    }

    #[test]
    fn default_sort_is_highest_risk_first() {
        let v = view();
        assert_eq!(v.visible_len(), 8);
        assert_eq!(visible(&v).first(), Some(&"1000001"));
        assert_eq!(visible(&v).last(), Some(&"1000008"));
    }

    #[test]
    fn resorting_same_key_flips_direction() {
        let mut v = view();
        v.set_sort("churn_probability").unwrap();
        assert_eq!(v.state().direction(), SortDirection::Ascending);
        assert_eq!(visible(&v).first(), Some(&"1000008"));
        v.set_sort("churn_probability").unwrap();
        assert_eq!(v.state().direction(), SortDirection::Descending);
        assert_eq!(visible(&v).first(), Some(&"1000001"));
    }

    #[test]
    fn sorting_a_new_key_starts_descending() {
        let mut v = view();
        v.set_sort("churn_probability").unwrap(); // now ascending
        v.set_sort("balance").unwrap();
        assert_eq!(v.state().direction(), SortDirection::Descending);
        assert_eq!(visible(&v).first(), Some(&"1000003")); // 4,200,000 RWF
    }

    #[test]
    fn categorical_filter_keeps_source_order_among_matches() {
        let mut v = view();
        v.set_field_filter("account_type", Some(Predicate::Equals(Value::Text("Premium".into()))))
            .unwrap();
        assert_eq!(visible(&v), vec!["1000001", "1000003", "1000005", "1000007"]);
    }

    #[test]
    fn filters_combine_with_and() {
        let mut v = view();
        v.set_field_filter("account_type", Some(Predicate::Equals(Value::Text("Premium".into()))))
            .unwrap();
        let band = &AGE_BANDS[2]; // 36-50
        v.set_field_filter("age", Some(Predicate::Range { low: band.low, high: band.high }))
            .unwrap();
        assert_eq!(visible(&v), vec!["1000003", "1000005"]);
    }

    #[test]
    fn one_of_predicate_is_membership() {
        let mut v = view();
        v.set_field_filter(
            "account_type",
            Some(Predicate::OneOf(vec![
                Value::Text("Basic".into()),
                Value::Text("Standard".into()),
            ])),
        )
        .unwrap();
        assert_eq!(visible(&v), vec!["1000002", "1000004", "1000006", "1000008"]);
    }

    #[test]
    fn range_bands_are_half_open() {
        let mut v = view();
        // tenure 2.1 (1000006) falls in [2, 5), not [1, 2)
        v.set_field_filter("tenure", Some(Predicate::Range { low: Some(1.0), high: Some(2.0) }))
            .unwrap();
        assert_eq!(visible(&v), vec!["1000002", "1000004"]);
        v.set_field_filter("tenure", Some(Predicate::Range { low: Some(2.0), high: Some(5.0) }))
            .unwrap();
        assert!(visible(&v).contains(&"1000006"));
        assert!(visible(&v).contains(&"1000001")); // tenure 2.3
    }

    #[test]
    fn open_ended_band_is_unbounded_above() {
        let mut v = view();
        v.set_field_filter("tenure", Some(Predicate::Range { low: Some(5.0), high: None }))
            .unwrap();
        assert_eq!(visible(&v), vec!["1000007"]); // tenure 5.3
    }

    #[test]
    fn search_is_case_insensitive_over_searchable_fields() {
        let mut v = view();
        v.set_search_text("grace");
        assert_eq!(visible(&v), vec!["1000001"]);
        v.set_search_text("MUKAMANA");
        assert_eq!(visible(&v), vec!["1000001", "1000007"]);
        // id is searchable too
        v.set_search_text("1000004");
        assert_eq!(visible(&v), vec!["1000004"]);
        // account_type is not searchable
        v.set_search_text("premium");
        assert_eq!(v.visible_len(), 0);
        v.set_search_text("");
        assert_eq!(v.visible_len(), 8);
    }

    #[test]
    fn setting_the_same_filter_twice_is_idempotent() {
        let mut v = view();
        let p = Predicate::Equals(Value::Text("Premium".into()));
        v.set_field_filter("account_type", Some(p.clone())).unwrap();
        let once: Vec<String> = v.visible_ids().map(str::to_string).collect();
        v.set_field_filter("account_type", Some(p)).unwrap();
        let twice: Vec<String> = v.visible_ids().map(str::to_string).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn changing_sort_never_changes_membership() {
        let mut v = view();
        v.set_field_filter("account_type", Some(Predicate::Equals(Value::Text("Premium".into()))))
            .unwrap();
        let mut before: Vec<String> = v.visible_ids().map(str::to_string).collect();
        v.set_sort("age").unwrap();
        v.set_sort("name").unwrap();
        let mut after: Vec<String> = v.visible_ids().map(str::to_string).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn stable_sort_keeps_source_order_for_ties() {
        let mut v = view();
        // Four Premium rows tie under this key; source order must survive,
        // in both directions.
        v.set_sort("account_type").unwrap();
        let desc = visible(&v);
        let premiums: Vec<&&str> = desc.iter().filter(|id| {
            matches!(**id, "1000001" | "1000003" | "1000005" | "1000007")
        }).collect();
        assert_eq!(premiums, vec![&"1000001", &"1000003", &"1000005", &"1000007"]);
        v.set_sort("account_type").unwrap();
        let asc = visible(&v);
        let premiums: Vec<&&str> = asc.iter().filter(|id| {
            matches!(**id, "1000001" | "1000003" | "1000005" | "1000007")
        }).collect();
        assert_eq!(premiums, vec![&"1000001", &"1000003", &"1000005", &"1000007"]);
    }

    #[test]
    fn selection_is_pruned_when_filters_narrow_the_view() {
        let mut v = view();
        v.set_field_filter("account_type", Some(Predicate::Equals(Value::Text("Premium".into()))))
            .unwrap();
        v.select_all_visible();
        assert_eq!(v.state().selection().len(), 4);

        let band = &RISK_BANDS[1]; // 80-90
        v.set_field_filter(
            "churn_probability",
            Some(Predicate::Range { low: band.low, high: band.high }),
        )
        .unwrap();
        let selected = v.state().selection();
        assert_eq!(selected.len(), 2);
        assert!(selected.contains("1000001"));
        assert!(selected.contains("1000003"));
    }

    #[test]
    fn selection_stays_subset_of_visible_under_any_sequence() {
        let mut v = view();
        let subset_holds = |v: &TabularDataView| {
            let visible: HashSet<&str> = v.visible_ids().collect();
            v.state().selection().iter().all(|id| visible.contains(id.as_str()))
        };
        v.select_all_visible();
        assert!(subset_holds(&v));
        v.set_search_text("mukamana");
        assert!(subset_holds(&v));
        v.set_sort("tenure").unwrap();
        assert!(subset_holds(&v));
        v.set_field_filter("age", Some(Predicate::Range { low: Some(50.0), high: None }))
            .unwrap();
        assert!(subset_holds(&v));
        v.clear_all_filters();
        assert!(subset_holds(&v));
    }

    #[test]
    fn toggle_select_only_applies_to_visible_rows() {
        let mut v = view();
        v.set_field_filter("account_type", Some(Predicate::Equals(Value::Text("Premium".into()))))
            .unwrap();
        v.toggle_select("1000002"); // Standard, filtered out
        assert!(v.state().selection().is_empty());
        v.toggle_select("1000001");
        assert!(v.is_selected("1000001"));
        v.toggle_select("1000001");
        assert!(!v.is_selected("1000001"));
    }

    #[test]
    fn select_all_visible_acts_as_toggle() {
        let mut v = view();
        v.select_all_visible();
        assert_eq!(v.state().selection().len(), 8);
        v.select_all_visible();
        assert!(v.state().selection().is_empty());
        v.toggle_select("1000003");
        v.select_all_visible();
        assert_eq!(v.state().selection().len(), 8);
        v.deselect_all();
        assert!(v.state().selection().is_empty());
    }

    #[test]
    fn unknown_field_is_rejected_and_state_is_untouched() {
        let mut v = view();
        assert_eq!(
            v.set_field_filter("riskiness", Some(Predicate::Range { low: None, high: None })),
            Err(ViewError::UnknownField("riskiness".to_string()))
        );
        assert_eq!(v.set_sort("riskiness"), Err(ViewError::UnknownField("riskiness".into())));
        assert_eq!(v.state().sort_key(), "churn_probability");
        assert_eq!(v.visible_len(), 8);
        assert!(matches!(
            TabularDataView::new(retention_schema(), retention_customers(), "nope"),
            Err(ViewError::UnknownField(_))
        ));
    }

    #[test]
    fn export_quotes_delimiters_and_quotes() {
        let schema = Schema::new(vec![
            FieldSpec::new("id", "Customer ID", FieldType::Text),
            FieldSpec::new("name", "Name", FieldType::Text).searchable(),
        ]);
        let records = vec![
            Record::new("1").field("name", Value::Text("Doe, Jane".into())),
            Record::new("2").field("name", Value::Text("Says \"hi\"".into())),
        ];
        let mut v = TabularDataView::new(schema, records, "id").unwrap();
        v.set_sort("id").unwrap(); // ascending after toggle
        let csv = v.export_visible(&["id", "name"], &ExportOptions::default()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Customer ID,Name");
        assert_eq!(lines[1], "1,\"Doe, Jane\"");
        assert_eq!(lines[2], "2,\"Says \"\"hi\"\"\"");
    }

    #[test]
    fn export_respects_order_columns_and_delimiter() {
        let mut v = view();
        v.set_field_filter("account_type", Some(Predicate::Equals(Value::Text("Basic".into()))))
            .unwrap();
        let opts = ExportOptions::default().with_delimiter(';');
        let csv = v.export_visible(&["id", "name", "balance"], &opts).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Customer ID;Name;Balance");
        assert_eq!(lines[1], "1000004;Mugisha Paul;300000");
        assert_eq!(lines[2], "1000008;James Wilson;8900");
        assert_eq!(
            v.export_visible(&["nope"], &ExportOptions::default()),
            Err(ViewError::UnknownField("nope".into()))
        );
    }

    #[test]
    fn export_round_trips_through_a_csv_reader() {
        let mut v = view();
        v.set_sort("name").unwrap();
        let csv = v
            .export_visible(&["id", "name", "products"], &ExportOptions::default())
            .unwrap();
        let parsed = parse_csv(&csv);
        assert_eq!(parsed.len(), 9); // header + 8 rows
        for (row, record) in parsed[1..].iter().zip(v.visible_records()) {
            assert_eq!(row[0], record.get("id").unwrap().render());
            assert_eq!(row[1], record.get("name").unwrap().render());
            assert_eq!(row[2], record.get("products").unwrap().render());
        }
    }

    #[test]
    fn mistyped_numeric_values_are_excluded_not_fatal() {
        let schema = Schema::new(vec![
            FieldSpec::new("id", "Customer ID", FieldType::Text),
            FieldSpec::new("score", "Score", FieldType::Numeric),
        ]);
        let records = vec![
            Record::new("a").field("score", Value::Num(10.0)),
            Record::new("b").field("score", Value::Text("n/a".into())),
            Record::new("c").field("score", Value::Num(30.0)),
        ];
        let mut v = TabularDataView::new(schema, records, "id").unwrap();
        assert_eq!(v.visible_len(), 3);

        // Numeric filter on the bad field drops only the offender
        v.set_field_filter("score", Some(Predicate::Range { low: Some(0.0), high: None }))
            .unwrap();
        let ids: Vec<&str> = v.visible_ids().collect();
        assert_eq!(ids, vec!["c", "a"]); // still sorted by id descending

        // Numeric sort on the bad field likewise
        v.set_field_filter("score", None).unwrap();
        v.set_sort("score").unwrap();
        let ids: Vec<&str> = v.visible_ids().collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    // Minimal RFC-4180 reader, enough to verify the round trip.
    fn parse_csv(text: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut cell = String::new();
        let mut quoted = false;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if quoted {
                match c {
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        cell.push('"');
                    }
                    '"' => quoted = false,
                    _ => cell.push(c),
                }
            } else {
                match c {
                    '"' => quoted = true,
                    ',' => row.push(std::mem::take(&mut cell)),
                    '\n' => {
                        row.push(std::mem::take(&mut cell));
                        rows.push(std::mem::take(&mut row));
                    }
                    _ => cell.push(c),
                }
            }
        }
        if !cell.is_empty() || !row.is_empty() {
            row.push(cell);
            rows.push(row);
        }
        rows
    }
}
