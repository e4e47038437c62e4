//! End-to-end table scenarios.

use easygrid::{
    BoolPill, ColumnDef, Dataset, GridError, GridRenderer, IconStatusEntry, JsonRenderer,
    RenderRequest, Row, Script, StatusState, Table, TableOptions, DEFAULT_CELL_STYLE,
    DEFAULT_HEADER_STYLE,
};
use serde_json::{json, Value};

fn parts() -> Dataset {
    Dataset::from_csv(
        "name,created,state,active,done\n\
         bolt,2024-01-05,1,yes,80\n\
         nut,2024-02-11,2,no,35\n"
            .as_bytes(),
    )
    .unwrap()
}

#[test]
fn text_column() {
    let map = ColumnDef::text("name").alias("Name").build().unwrap().compile();
    assert_eq!(map["field"], "name");
    assert_eq!(map["headerName"], "Name");
    assert_eq!(map["filter"], "agTextColumnFilter");
    assert_eq!(map["headerStyle"], Value::Object(DEFAULT_HEADER_STYLE.compile()));
    assert_eq!(map["cellStyle"], Value::Object(DEFAULT_CELL_STYLE.compile()));
    assert!(map.get("width").is_none());
    assert!(map.get("minWidth").is_none());
    assert!(map.get("maxWidth").is_none());
}

#[test]
fn date_column() {
    let map = ColumnDef::date("created").build().unwrap().compile();
    assert_eq!(map["filterParams"], json!({"customFormatString": "yyyy-MM-dd"}));
    assert_eq!(map["type"], json!(["agTextColumnFilter", "customDateTimeFormat"]));
    let formatter = Script::from_value(&map["valueFormatter"]).unwrap();
    assert!(!formatter.body().is_empty());
}

#[test]
fn checkbox_and_text_with_selection() {
    let columns = vec![
        ColumnDef::checkbox().build().unwrap(),
        ColumnDef::text("name").build().unwrap(),
    ];
    let options = Table::new(columns)
        .options(TableOptions {
            select_checkbox: true,
            ..TableOptions::default()
        })
        .grid_options(&parts());
    let defs = options["columnDefs"].as_array().unwrap();
    assert_eq!(defs.len(), 3);
    assert_eq!(defs[0]["width"], 40);
    assert_eq!(defs[0]["field"], "__selection__");
    assert_eq!(defs[1]["checkboxSelection"], true);
}

#[test]
fn status_lookup_keys() {
    let column = ColumnDef::status(
        "state",
        vec![StatusState::new(1, "OK", "#0f0"), StatusState::new(2, "Risk", "#f00")],
    )
    .build()
    .unwrap();
    let renderer = Script::from_value(&column.compile()["cellRenderer"]).unwrap();
    let body = renderer.body();
    let start = body.find("const map = ").unwrap() + "const map = ".len();
    let end = start + body[start..].find(";\n").unwrap();
    let lookup: Value = serde_json::from_str(&body[start..end]).unwrap();
    let keys: Vec<&str> = lookup
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["1", "2"]);
    assert_eq!(lookup["1"], json!({"label": "OK", "color": "#0f0"}));
    assert_eq!(lookup["2"], json!({"label": "Risk", "color": "#f00"}));
}

#[test]
fn full_table_payload() {
    let columns = vec![
        ColumnDef::text("name").alias("Name").pinned().build().unwrap(),
        ColumnDef::date("created").alias("Created").build().unwrap(),
        ColumnDef::status(
            "state",
            vec![StatusState::new(1, "OK", "#16a34a"), StatusState::new(2, "Risk", "#dc2626")],
        )
        .alias("State")
        .build()
        .unwrap(),
        ColumnDef::bool_pill("active", BoolPill::new().labels("Active", "Idle"))
            .build()
            .unwrap(),
        ColumnDef::progress_ring("done").alias("Done").build().unwrap(),
        ColumnDef::icon_status(
            "name",
            [(
                "bolt".to_string(),
                IconStatusEntry::new("Bolt", "#2563eb", "wrench"),
            )],
        )
        .build()
        .unwrap(),
    ];
    let table = Table::new(columns).options(TableOptions {
        side_bar: true,
        height: Some(480),
        ..TableOptions::default()
    });

    let mut renderer = JsonRenderer::new(Vec::new());
    let selection = table.render(&parts(), &mut renderer).unwrap();
    assert!(selection.is_empty());

    let payload: Value = serde_json::from_slice(&renderer.into_inner()).unwrap();
    assert_eq!(payload["height"], 480);
    assert_eq!(payload["rowData"][1]["name"], "nut");
    assert_eq!(payload["rowData"][0]["done"], 80);
    let defs = payload["gridOptions"]["columnDefs"].as_array().unwrap();
    assert_eq!(defs.len(), 7);
    assert_eq!(defs[1]["pinned"], "left");
    for def in &defs[3..] {
        let renderer = def["cellRenderer"].as_str().unwrap();
        assert!(renderer.starts_with("::JSCODE::"), "{}", def["field"]);
        assert!(renderer.ends_with("::JSCODE::"));
    }
    assert_eq!(payload["gridOptions"]["sideBar"]["toolPanels"][1]["id"], "filters");
}

/// Records what it was given and selects the first row.
#[derive(Default)]
struct Recorder {
    seen: Option<RenderRequest>,
}

impl GridRenderer for Recorder {
    type Error = GridError;

    fn render(&mut self, request: RenderRequest) -> Result<Vec<Row>, GridError> {
        let first = request.row_data.rows().first().cloned();
        self.seen = Some(request);
        Ok(first.into_iter().collect())
    }
}

#[test]
fn renderer_gets_a_copy_and_its_selection_is_returned() {
    let data = parts();
    let table = Table::new(vec![ColumnDef::text("name").build().unwrap()]);
    let mut recorder = Recorder::default();
    let selected = table.render(&data, &mut recorder).unwrap();

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0]["name"], "bolt");

    let seen = recorder.seen.unwrap();
    assert_eq!(seen.row_data, data);
    assert_eq!(seen.columns_auto_size_mode, "FIT_ALL_COLUMNS_TO_VIEW");
    assert!(seen.enable_enterprise_modules);
    assert!(seen.allow_unsafe_jscode);
    assert_eq!(seen.grid_options, table.grid_options(&data));
}

#[test]
fn grid_options_are_deterministic() {
    let table = Table::new(vec![
        ColumnDef::status("state", vec![StatusState::new(1, "OK", "#0f0")])
            .build()
            .unwrap(),
        ColumnDef::bool_pill("active", BoolPill::new()).build().unwrap(),
    ]);
    assert_eq!(table.grid_options(&parts()), table.grid_options(&parts()));
}
