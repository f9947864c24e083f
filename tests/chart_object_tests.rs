use svg_chart::core::{ChartConfig, ChartData, TickRange, XAxis, XTicks, YAxis};
use svg_chart::render::{DrawingSurface, Group, Node, NullSurface, SvgDocument};
use svg_chart::{ChartError, SvgChart};

const CONFIG_JSON: &str = r##"{
    "bg": "#ffffff",
    "dimensions": {
        "width": { "image": 600, "plot": 500 },
        "height": { "image": 400, "plot": 300 },
        "margins": { "left": 60, "right": 40, "top": 40, "bottom": 60 }
    },
    "grid": {
        "gaps": {
            "x": { "gap_by": "val", "val": 1 },
            "y": { "gap_by": "px", "val": 75 }
        },
        "lines": {
            "axes": { "color": "#000000", "width": 2 },
            "main": { "color": "#cccccc", "width": 1 },
            "font": { "color": "#333333", "size": 12 }
        }
    },
    "series": {
        "width": 2,
        "alpha": 0.8,
        "point": { "radius": 3, "alpha": 1 },
        "fill": { "alpha": 0.2 }
    }
}"##;

const DATA_JSON: &str = r##"{
    "title": "load",
    "grid": {
        "x": {
            "type": "linear",
            "title": "sample",
            "ticks": { "raw": [0, 1, 2, 3, 4], "formatted": [], "min": 0, "max": 4, "range": 4 }
        },
        "y": {
            "type": "linear",
            "title": "percent",
            "ticks": { "min": 0, "max": 100, "range": 100 }
        }
    },
    "series": [
        { "label": "a", "color": "#ff0000", "data": [0, 50, 100, 25, 75] },
        { "label": "b", "color": "#00ff00", "data": [null, 10, 20, null, 30] }
    ]
}"##;

fn config() -> ChartConfig {
    ChartConfig::from_json_str(CONFIG_JSON).expect("config fixture")
}

fn data() -> ChartData {
    ChartData::from_json_str(DATA_JSON).expect("data fixture")
}

fn mounted_chart() -> SvgChart<SvgDocument> {
    let mut chart = SvgChart::new(SvgDocument::new(), "cpu", config(), data()).expect("chart");
    chart.init(true).expect("init");
    chart
}

fn group_keys(chart: &SvgChart<SvgDocument>) -> Vec<String> {
    chart
        .surface()
        .root("cpu")
        .expect("root mounted")
        .groups
        .keys()
        .cloned()
        .collect()
}

#[test]
fn init_mounts_root_with_background() {
    let chart = mounted_chart();
    let root = chart.surface().root("cpu").expect("root");

    assert_eq!(root.width, 600.0);
    assert_eq!(root.height, 400.0);
    let background = root.background.as_ref().expect("background");
    assert_eq!(background.fill, "#ffffff");
    assert_eq!(background.width, 600.0);
    assert!(root.groups.is_empty());
}

#[test]
fn init_without_mount_leaves_surface_untouched() {
    let mut chart = SvgChart::new(SvgDocument::new(), "cpu", config(), data()).expect("chart");
    let root = chart.init(false).expect("init");

    assert_eq!(root.id, "cpu");
    assert_eq!(chart.surface().root_count(), 0);
}

#[test]
fn grid_group_holds_ticks_then_axis_frame() {
    let mut chart = mounted_chart();
    let grid = chart.update_grid(true).expect("grid");

    assert_eq!(grid.id.as_deref(), Some("cpu_grid"));
    let parts: Vec<&Group> = grid.groups().collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].children.len(), 5);
    assert_eq!(parts[1].children.len(), 5);
    assert_eq!(parts[2].counts().lines, 2);

    let counts = grid.counts();
    assert_eq!(counts.lines, 5 + 5 + 2);
    assert_eq!(counts.texts, 10);
}

#[test]
fn gridline_and_label_geometry() {
    let mut chart = mounted_chart();
    let grid = chart.update_grid(false).expect("grid");
    let x_part = grid.groups().next().expect("x gridlines");
    let first = x_part.groups().next().expect("first x tick");

    let Node::Line(line) = &first.children[0] else {
        panic!("expected gridline first");
    };
    assert_eq!((line.x1, line.y1, line.x2, line.y2), (60.0, 340.0, 60.0, 40.0));
    assert_eq!(line.stroke, "rgba(204, 204, 204, 1)");

    let Node::Text(label) = &first.children[1] else {
        panic!("expected label second");
    };
    assert_eq!(label.text, "0.00");
    assert_eq!((label.x, label.y), (60.0, 360.0));
    assert_eq!(label.fill, "#333333");
}

#[test]
fn repeated_grid_updates_keep_a_single_grid_group() {
    let mut chart = mounted_chart();
    let first = chart.update_grid(true).expect("first");
    let second = chart.update_grid(true).expect("second");

    assert_eq!(first, second);
    assert_eq!(group_keys(&chart), vec!["cpu_grid".to_owned()]);
    let mounted = chart
        .surface()
        .root("cpu")
        .and_then(|root| root.group("cpu_grid"))
        .expect("grid");
    assert_eq!(mounted, &second);
}

#[test]
fn update_data_builds_one_group_per_series() {
    let mut chart = mounted_chart();
    let datasets = chart.update_data(true, None, false).expect("datasets");

    assert_eq!(datasets.id.as_deref(), Some("cpu_datasets"));
    let ids: Vec<Option<&str>> = datasets.groups().map(|g| g.id.as_deref()).collect();
    assert_eq!(ids, vec![Some("cpu_dataset_0"), Some("cpu_dataset_1")]);

    let first = datasets.find("cpu_dataset_0").expect("series a").counts();
    assert_eq!((first.lines, first.polygons, first.circles), (4, 4, 5));
    let second = datasets.find("cpu_dataset_1").expect("series b").counts();
    assert_eq!((second.lines, second.polygons, second.circles), (1, 1, 1));
}

#[test]
fn segment_nodes_are_ordered_line_fill_markers() {
    let mut chart = mounted_chart();
    let datasets = chart.update_data(false, None, false).expect("datasets");
    let inner = datasets
        .find("cpu_dataset_0")
        .and_then(|g| g.groups().next())
        .expect("inner group");

    assert!(matches!(inner.children[0], Node::Line(_)));
    assert!(matches!(inner.children[1], Node::Polygon(_)));
    assert!(matches!(inner.children[2], Node::Circle(_)));
    assert!(matches!(inner.children[3], Node::Line(_)));

    let Node::Line(line) = &inner.children[0] else {
        unreachable!();
    };
    assert_eq!(line.stroke, "rgba(255, 0, 0, 0.8)");
    let Node::Circle(marker) = &inner.children[2] else {
        unreachable!();
    };
    assert_eq!(marker.stroke, "white");
    assert_eq!(marker.radius, 3.0);
}

#[test]
fn update_data_replaces_previous_datasets() {
    let mut chart = mounted_chart();
    chart.update_data(true, None, true).expect("first");
    chart.update_grid(true).expect("grid");
    assert_eq!(
        group_keys(&chart),
        vec!["cpu_datasets".to_owned(), "cpu_grid".to_owned()]
    );

    // Replacing a key re-appends it, so datasets moves back behind grid.
    chart.update_data(true, None, false).expect("second");
    assert_eq!(
        group_keys(&chart),
        vec!["cpu_grid".to_owned(), "cpu_datasets".to_owned()]
    );
}

#[test]
fn new_data_with_grid_refresh_follows_new_ranges() {
    let mut chart = mounted_chart();
    chart.update_data(true, None, true).expect("initial");

    let mut next = data();
    next.grid.y = YAxis::Linear {
        title: "percent".to_owned(),
        ticks: Some(TickRange::new(0.0, 200.0)),
    };
    chart.update_data(true, Some(next), true).expect("refresh");

    let grid = chart
        .surface()
        .root("cpu")
        .and_then(|root| root.group("cpu_grid"))
        .expect("grid");
    let y_part = grid.groups().nth(1).expect("y gridlines");
    let last = y_part.groups().last().expect("top tick");
    let Node::Text(label) = &last.children[1] else {
        panic!("expected label");
    };
    assert_eq!(label.text, "200.00");
    assert_eq!(chart.data().grid.y.ticks().map(|t| t.max), Some(200.0));
}

#[test]
fn rendering_into_unmounted_root_fails() {
    let mut chart = SvgChart::new(SvgDocument::new(), "cpu", config(), data()).expect("chart");

    assert!(matches!(
        chart.update_grid(true),
        Err(ChartError::RootNotMounted { .. })
    ));
    assert!(matches!(
        chart.update_data(true, None, false),
        Err(ChartError::RootNotMounted { .. })
    ));
    // Building without appending needs no root.
    assert!(chart.update_data(false, None, false).is_ok());
}

#[test]
fn append_false_builds_without_touching_surface() {
    let mut chart = SvgChart::new(NullSurface::default(), "cpu", config(), data()).expect("chart");
    chart.init(true).expect("init");
    chart.update_grid(false).expect("grid");
    chart.update_data(false, None, false).expect("data");
    assert_eq!(chart.surface().upsert_count, 0);

    chart.update_data(true, None, true).expect("append");
    let surface = chart.into_surface();
    assert_eq!(surface.mount_count, 1);
    assert_eq!(surface.upsert_count, 2);
    assert_eq!(surface.last_key.as_deref(), Some("cpu_datasets"));
    assert_eq!(surface.last_counts.circles, 6);
}

#[test]
fn invalid_replacement_data_keeps_previous_snapshot() {
    let mut chart = mounted_chart();
    let mut broken = data();
    broken.grid.y = YAxis::Linear {
        title: String::new(),
        ticks: None,
    };

    let result = chart.update_data(true, Some(broken), false);
    assert!(matches!(result, Err(ChartError::AxisContract(_))));
    assert_eq!(chart.data(), &data());
    assert!(chart.surface().root("cpu").expect("root").groups.is_empty());
}

#[test]
fn failed_grid_refresh_restores_previous_snapshot() {
    let mut chart = mounted_chart();
    chart.update_data(true, None, true).expect("initial");
    let svg_before = chart.surface().to_svg_string("cpu").expect("svg");

    // Gap 1 over [0, 50000] exceeds the per-axis tick budget.
    let mut wide = data();
    wide.grid.x = XAxis::Linear {
        title: "sample".to_owned(),
        ticks: XTicks {
            raw: vec![0.0, 1.0, 2.0, 3.0, 4.0],
            formatted: Vec::new(),
            min: 0.0,
            max: 50_000.0,
            range: 50_000.0,
        },
    };

    let result = chart.update_data(true, Some(wide), true);
    assert!(matches!(
        result,
        Err(ChartError::TooManyTicks { axis: 'x', .. })
    ));
    assert_eq!(chart.data(), &data());
    assert_eq!(chart.data().grid.x.ticks().max, 4.0);

    let svg_after = chart.surface().to_svg_string("cpu").expect("svg");
    assert_eq!(svg_after, svg_before);

    // Later redraws still line up with the mounted grid.
    let redrawn = chart.update_data(true, None, false).expect("redraw");
    let first = redrawn.find("cpu_dataset_0").expect("series a").counts();
    assert_eq!(first.lines, 4);
}

#[test]
fn failed_append_without_root_restores_previous_snapshot() {
    let mut chart = SvgChart::new(SvgDocument::new(), "cpu", config(), data()).expect("chart");
    let mut next = data();
    next.series.truncate(1);

    let result = chart.update_data(true, Some(next), false);
    assert!(matches!(result, Err(ChartError::RootNotMounted { .. })));
    assert_eq!(chart.data().series.len(), 2);
}

#[test]
fn chart_rejects_bad_construction_inputs() {
    assert!(matches!(
        SvgChart::new(NullSurface::default(), "  ", config(), data()),
        Err(ChartError::InvalidData(_))
    ));

    let mut zero_plot = config();
    zero_plot.dimensions.width.plot = 0.0;
    assert!(matches!(
        SvgChart::new(NullSurface::default(), "cpu", zero_plot, data()),
        Err(ChartError::InvalidDimensions { .. })
    ));

    let mut log_data = data();
    log_data.grid.y = YAxis::Log {
        title: String::new(),
        ticks: TickRange::new(1.0, 100.0),
        base: svg_chart::core::LogBase::Ten,
    };
    // Series `a` starts with 0, which has no logarithm.
    assert!(matches!(
        SvgChart::new(NullSurface::default(), "cpu", config(), log_data),
        Err(ChartError::AxisContract(_))
    ));
}

#[test]
fn two_charts_share_one_document() {
    let mut document = SvgDocument::new();
    {
        let mut cpu = SvgChart::new(&mut document, "cpu", config(), data()).expect("cpu");
        cpu.init(true).expect("init cpu");
        cpu.update_data(true, None, true).expect("render cpu");
    }
    {
        let mut mem = SvgChart::new(&mut document, "mem", config(), data()).expect("mem");
        mem.init(true).expect("init mem");
        mem.update_grid(true).expect("render mem");
    }

    assert_eq!(document.root_count(), 2);
    assert!(document.has_root("cpu") && document.has_root("mem"));
    assert_eq!(document.root("mem").map(|r| r.groups.len()), Some(1));
    assert_eq!(document.root("cpu").map(|r| r.groups.len()), Some(2));
}

#[test]
fn reinit_clears_previous_output() {
    let mut chart = mounted_chart();
    chart.update_data(true, None, true).expect("render");
    chart.init(true).expect("reinit");

    assert!(group_keys(&chart).is_empty());
}

#[test]
fn serialized_document_contains_chart_elements() {
    let mut chart = mounted_chart();
    chart.update_data(true, None, true).expect("render");
    let svg = chart.surface().to_svg_string("cpu").expect("svg");

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="400""#));
    assert!(svg.contains(r#"<g id="cpu_grid">"#));
    assert!(svg.contains(r#"<g id="cpu_dataset_1">"#));
    assert!(svg.contains(r#"<polygon points="60,340 185,190 185,340 60,340" fill="rgba(255, 0, 0, 0.2)"/>"#));
    assert!(svg.find("cpu_grid") < svg.find("cpu_datasets"));
    assert_eq!(svg.matches("<circle").count(), 6);
}
