use chronoscope::{
    CardLayoutConfig, ChronosTime, EngineConfig, Era, Event, compute_card_layout,
    days_in_month, decode_slider_value, format_event_date_range, format_slider_tick, is_visible,
    lod_threshold, parse_chronos_date, project_items,
};

const SAMPLE_EVENTS: &str = r#"[
    {
        "id": "caesar-assassination",
        "title": "Assassination of Julius Caesar",
        "start": { "year": -44, "month": 3, "day": 15, "precision": "day" },
        "location": { "lat": 41.8919, "lng": 12.4863, "name": "Rome" },
        "importance": 9.2
    },
    {
        "id": "founding-of-rome",
        "title": "Founding of Rome",
        "start": { "year": -753, "precision": "year" },
        "location": { "lat": 41.8902, "lng": 12.4922, "name": "Rome" },
        "importance": 8.1
    },
    {
        "id": "ww2",
        "title": "Second World War",
        "start": { "year": 1939, "month": 9, "day": 1, "precision": "day" },
        "end": { "year": 1945, "month": 9, "day": 2, "precision": "day" },
        "location": { "lat": 52.2297, "lng": 21.0122, "name": "Warsaw" },
        "importance": 10.0
    },
    {
        "id": "moon-landing",
        "title": "Apollo 11 Landing",
        "start": { "year": 1969, "month": 7, "day": 20, "precision": "day" },
        "location": { "lat": 28.5729, "lng": -80.649, "name": "Cape Canaveral" },
        "importance": 9.5
    }
]"#;

fn load_events() -> Vec<Event> {
    serde_json::from_str(SAMPLE_EVENTS).expect("sample events parse")
}

#[test]
fn round_trip_law_over_calendar_dates() {
    // Every exact calendar date must survive encode -> decode, BC and AD,
    // including leap Februaries and month boundaries.
    for year in [-401, -100, -44, -4, -1, 1, 4, 1900, 2000, 2023, 2024] {
        let astro = chronoscope::astronomical_year(year);
        for month in 1..=12 {
            let last = days_in_month(astro, month);
            for day in [1, 15, last] {
                let time = ChronosTime::from_ymd(year, month, day);
                let decoded = decode_slider_value(time.slider_value());
                assert_eq!(
                    (decoded.historical_year(), decoded.month, decoded.day),
                    (year, month, day),
                    "round trip failed for {year}-{month}-{day}"
                );
            }
        }
    }
}

#[test]
fn slider_values_sort_in_historical_order() {
    let mut events = load_events();
    events.sort_by(|a, b| {
        a.start
            .slider_value()
            .partial_cmp(&b.start.slider_value())
            .unwrap()
    });
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        ["founding-of-rome", "caesar-assassination", "ww2", "moon-landing"]
    );
}

#[test]
fn playhead_filtering_then_layout() {
    let events = load_events();
    let playhead = ChronosTime::from_ymd(1942, 6, 1).slider_value();

    let active: Vec<Event> = events
        .iter()
        .filter(|e| e.is_active(playhead, 5.0))
        .cloned()
        .collect();
    let ids: Vec<&str> = active.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["ww2"]);

    // A coarse projection that maps all of Europe onto a narrow strip, so
    // active markers collide.
    let wide = ChronosTime::from_year(1975).slider_value();
    let active: Vec<Event> = events
        .iter()
        .filter(|e| e.is_active(wide, 10.0))
        .cloned()
        .collect();
    assert_eq!(active.len(), 1);

    let items = project_items(&events, |lat, lng| {
        (((lng + 180.0) * 2.0) as f32, ((90.0 - lat) * 2.0) as f32)
    });
    assert_eq!(items.len(), events.len());

    let offsets = compute_card_layout(&items, &CardLayoutConfig::default());
    assert_eq!(offsets.len(), events.len());
    // The two Rome markers project a fraction of a pixel apart and must
    // separate by a full card footprint.
    let caesar_x = items
        .iter()
        .find(|i| i.id == "caesar-assassination")
        .map(|i| i.x + offsets["caesar-assassination"].offset_x)
        .unwrap();
    let founding_x = items
        .iter()
        .find(|i| i.id == "founding-of-rome")
        .map(|i| i.x + offsets["founding-of-rome"].offset_x)
        .unwrap();
    assert!((caesar_x - founding_x).abs() >= 270.0 - 1e-3);
}

#[test]
fn lod_gates_events_by_view() {
    let config = EngineConfig::default();
    let events = load_events();

    // Wide view: a 2700-year span at continental zoom shows only the top
    // of the importance scale.
    let threshold = lod_threshold(2700.0, 4.0, &config.lod);
    let visible: Vec<&str> = events
        .iter()
        .filter(|e| is_visible(e.importance, threshold, false))
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(visible, ["ww2"]);

    // A selected event bypasses the cutoff.
    assert!(events
        .iter()
        .filter(|e| is_visible(e.importance, threshold, e.id == "founding-of-rome"))
        .any(|e| e.id == "founding-of-rome"));

    // Tight view shows everything.
    let threshold = lod_threshold(1.0, 10.0, &config.lod);
    assert!(
        events
            .iter()
            .all(|e| is_visible(e.importance, threshold, false))
    );
}

#[test]
fn parsed_wikidata_dates_flow_through_the_codec() {
    let surrender = parse_chronos_date("+1945-09-02T00:00:00Z").unwrap();
    let decoded = decode_slider_value(surrender.slider_value());
    assert_eq!((decoded.year, decoded.era), (1945, Era::Ad));
    assert_eq!((decoded.month, decoded.day), (9, 2));

    let caesar = parse_chronos_date("-0044-03-15T00:00:00Z").unwrap();
    assert_eq!(caesar.slider_value(), ChronosTime::from_ymd(-44, 3, 15).slider_value());
}

#[test]
fn range_formatting_and_ticks() {
    let events = load_events();
    let ww2 = events.iter().find(|e| e.id == "ww2").unwrap();
    assert_eq!(
        format_event_date_range(ww2),
        "Sep 1, 1939 AD – Sep 2, 1945 AD"
    );

    let caesar = events.iter().find(|e| e.id == "caesar-assassination").unwrap();
    assert_eq!(format_event_date_range(caesar), "Mar 15, 44 BC");

    let tick = ChronosTime::from_ymd(1969, 7, 20).slider_value();
    assert_eq!(format_slider_tick(tick, 100.0), "1969 AD");
    assert_eq!(format_slider_tick(tick, 1.0), "Jul 20, 1969 AD");
}
