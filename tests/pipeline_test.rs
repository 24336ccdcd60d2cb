use std::io::Write;

use netflix_eda::{
    Bin, Catalog, Chart, EdaError, Renderer, Series, Style, Viewer, load_catalog, report,
};

const CATALOG: &str = "\
show_id,type,title,director,cast,country,release_year
s1,Movie,Alpha,Kay,\"Ann, Bob\",US,1991
s2,TV Show,Beta,,Ann,UK,1991
s3,Movie,Gamma,Lee,,US,1999
s4,Movie,Delta,Kay,\"Bob, Cid, Ann\",IN,1989
s5,Movie,Eps,,Cid,US,2000
s6,TV Show,Zeta,,\"Bob, Dan\",KR,2020
s7,Movie,Eta,Moe,Dan,US,1990
";

/// Keeps every chart it is asked to show.
#[derive(Default)]
struct RecordingViewer {
    shown: Vec<Chart>,
}

impl Viewer for RecordingViewer {
    fn show(&mut self, chart: &Chart) -> Result<(), EdaError> {
        self.shown.push(chart.clone());
        Ok(())
    }
}

/// Fails on the n-th chart, like a display going away mid-run.
struct FailingViewer {
    remaining: usize,
}

impl Viewer for FailingViewer {
    fn show(&mut self, _chart: &Chart) -> Result<(), EdaError> {
        if self.remaining == 0 {
            return Err(EdaError::NoDisplay);
        }
        self.remaining -= 1;
        Ok(())
    }
}

fn catalog() -> Catalog {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    load_catalog(file.path()).unwrap()
}

#[test]
fn loaded_shape_matches_the_file() {
    assert_eq!(catalog().shape(), (7, 7));
}

#[test]
fn charts_come_out_in_order() {
    let mut viewer = RecordingViewer::default();
    report::run(&catalog(), 2, &mut viewer).unwrap();

    let titles: Vec<&str> = viewer.shown.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Movies vs TV Shows",
            "Top 2 Actors by Movie Count",
            "Movie Releases 1990-1999",
            "Movie Trend",
        ]
    );

    assert_eq!(
        viewer.shown[0].series,
        Series::Bar(vec![("Movie".to_owned(), 5), ("TV Show".to_owned(), 2)])
    );
    // Ann, Bob and Cid all have two movies; name order decides.
    assert_eq!(
        viewer.shown[1].series,
        Series::HorizontalBar(vec![("Ann".to_owned(), 2), ("Bob".to_owned(), 2)])
    );
}

#[test]
fn nineties_bins_skip_out_of_window_years() {
    let mut viewer = RecordingViewer::default();
    report::run(&catalog(), 20, &mut viewer).unwrap();

    let Series::Histogram(bins) = &viewer.shown[2].series else {
        panic!("expected a histogram, got {:?}", viewer.shown[2].series);
    };
    let bin = |start, count| Bin {
        start,
        end: start + 2,
        count,
    };
    assert_eq!(
        bins,
        &vec![bin(1990, 2), bin(1992, 0), bin(1994, 0), bin(1996, 0), bin(1998, 1)]
    );
}

#[test]
fn trend_counts_every_title() {
    let mut viewer = RecordingViewer::default();
    report::run(&catalog(), 20, &mut viewer).unwrap();

    assert_eq!(
        viewer.shown[3].series,
        Series::Line(vec![
            (1989, 1),
            (1990, 1),
            (1991, 2),
            (1999, 1),
            (2000, 1),
            (2020, 1)
        ])
    );
}

#[test]
fn viewer_errors_stop_the_run() {
    let mut viewer = FailingViewer { remaining: 1 };
    let err = report::run(&catalog(), 20, &mut viewer).unwrap_err();
    assert!(matches!(err, EdaError::NoDisplay));
}

#[test]
fn every_recorded_chart_renders() {
    let mut viewer = RecordingViewer::default();
    report::run(&catalog(), 20, &mut viewer).unwrap();

    let style = Style::configure();
    let renderer = Renderer::new(&style, (132, 40));
    for chart in &viewer.shown {
        let frame = renderer.render(chart).unwrap();
        let text = String::from_utf8(frame).unwrap();
        assert!(text.contains(&chart.title), "{} missing", chart.title);
    }
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, EdaError::Open { .. }));
}

#[test]
fn missing_column_surfaces_during_aggregation() {
    let catalog = netflix_eda::read_catalog("show_id,title\ns1,Alpha\n").unwrap();
    let mut viewer = RecordingViewer::default();
    let err = report::run(&catalog, 20, &mut viewer).unwrap_err();
    assert!(matches!(err, EdaError::MissingColumn(c) if c == "type"));
    assert!(viewer.shown.is_empty());
}
