//! End-to-end pipeline tests over the evening fixture feed

use spotcheck::{Category, Config, Pipeline, PipelineStats, RawCueRecord};

use crate::helpers::{load_fixture, visible};

fn pipeline() -> Pipeline {
    Pipeline::new(Config::default().settings().unwrap())
}

#[test]
fn evening_report_matches_expected_layout() {
    let records = load_fixture("evening_feed.json");

    let report = pipeline().run(&records, 23).expect("23h has a window");

    insta::assert_snapshot!(visible(&report.text), @r"
From 7:00 PM to 11:00 PM - Credit Mention
(WEATHER) SUNRISE UMBRELLAS
(TRAFFIC WATCH) SRI AMBIKAS - OOTY GOLD PONNI RICE
(INFO) ROAD SAFETY WEEK
(NEWS) MUSTAFA CENTRE

From 7:00 PM to 11:00 PM - Ad
TAJ EMPLOYMENT AGENCY

From 7:00 PM to 11:00 PM - Credit Mention
--------------------------------------------------------------------------------
Time      Description
--------------------------------------------------------------------------------
7:00 PM   (WEATHER) SUNRISE UMBRELLAS
7:46 PM   (TRAFFIC WATCH) SRI AMBIKAS - OOTY GOLD PONNI RICE
8:01 PM   (INFO) ROAD SAFETY WEEK
8:56 PM   (NEWS) MUSTAFA CENTRE

From 7:00 PM to 11:00 PM - Ad
--------------------------------------------------------------------------------
Time      Description
--------------------------------------------------------------------------------
7:56 PM   TAJ EMPLOYMENT AGENCY
");
}

#[test]
fn report_keeps_padding_and_trailing_blank_line() {
    let records = load_fixture("evening_feed.json");

    let report = pipeline().run(&records, 23).unwrap();

    assert!(report.text.ends_with("\n\n"));
    assert!(report
        .text
        .contains(&format!("{:<10}{:<70}\n", "7:56 PM", "TAJ EMPLOYMENT AGENCY")));
}

#[test]
fn evening_stats() {
    let records = load_fixture("evening_feed.json");

    let report = pipeline().run(&records, 23).unwrap();

    assert_eq!(
        report.stats,
        PipelineStats {
            records: 12,
            classified: 8,
            below_lead_in: 2,
            special: 1,
            plain: 1,
            malformed: 0,
        }
    );
}

#[test]
fn quiet_hours_produce_nothing() {
    let records = load_fixture("evening_feed.json");
    let pipeline = pipeline();

    for hour in (0..24).filter(|h| ![10, 13, 16, 19, 23].contains(h)) {
        assert!(pipeline.run(&records, hour).is_none(), "hour {}", hour);
    }
}

#[test]
fn afternoon_window_sees_the_early_ad() {
    let records = load_fixture("evening_feed.json");

    let report = pipeline().run(&records, 19).unwrap();

    assert!(report.text.contains("From 4:00 PM to 7:00 PM - Ad\nEARLY BIRD SALE"));
    assert!(!report.text.contains("TAJ EMPLOYMENT AGENCY"));
    assert!(report
        .text
        .starts_with("From 4:00 PM to 7:00 PM - Credit Mention\nNo items found\n\n"));
}

#[test]
fn same_description_in_both_categories_is_kept_in_each() {
    // 19:46:40 and 19:56:40 station time
    let records = vec![
        RawCueRecord::new("$SPON - Ad - ACME", 1765972000870, 12000),
        RawCueRecord::new("$SPON - ACME", 1765972600870, 30000),
        RawCueRecord::new("$SPON - (CM/NEWS) ACME", 1765972630870, 12000),
        RawCueRecord::new("$SPON - (CM/NEWS) ACME", 1765972900870, 12000),
    ];

    let items = pipeline().items(&records);

    let ads = items.iter().filter(|i| i.category == Category::Ad).count();
    let mentions = items
        .iter()
        .filter(|i| i.category == Category::CreditMention)
        .count();
    assert_eq!((ads, mentions), (2, 2));

    let report = pipeline().run(&records, 23).unwrap();
    assert_eq!(report.text.matches("ACME").count(), 4);
    assert!(report.text.contains("7:46 PM   ACME"));
    assert!(!report.text.contains("7:56 PM"));
}

#[test]
fn custom_config_changes_thresholds_and_windows() {
    let config = Config::from_toml_str(
        r#"
[thresholds]
ad_secs = 31

[[windows]]
hour = 21
start = "8:00 PM"
end = "9:00 PM"
"#,
    )
    .unwrap();
    let pipeline = Pipeline::new(config.settings().unwrap());
    let records = load_fixture("evening_feed.json");

    let report = pipeline.run(&records, 21).unwrap();

    assert!(report.text.contains("GOLDEN PALACE RESTAURANT"));
    assert!(!report.text.contains("TAJ EMPLOYMENT AGENCY"));
    assert!(pipeline.run(&records, 23).is_none());
}
