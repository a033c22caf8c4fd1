use arbol::prelude::*;

use polars::prelude::*;

use std::io::Write;


#[test]
fn from_features_tracks_shape_and_target() {
    let sample = Sample::from_features(vec![
        Feature::from_values("weather", ["sunny", "rainy", "sunny"]),
        Feature::from_values("wind",    ["weak",  "strong", "weak"]),
        Feature::from_values("play",    ["no",    "yes",   "no"   ]),
    ]);
    assert_eq!(sample.shape(), (3, 3));
    assert!(sample.target().is_none());

    let sample = sample.set_target("play").unwrap();
    assert_eq!(sample.shape(), (3, 2));

    let target = sample.target().unwrap();
    assert_eq!(target.name(), "play");
    assert_eq!(&target[1], "yes");

    // The class column no longer shows up among the features.
    assert!(sample.feature("play").is_none());
    assert_eq!(&sample["wind"][1], "strong");
}


#[test]
fn designating_a_missing_class_column_is_an_error() {
    let sample = Sample::from_features(vec![
        Feature::from_values("weather", ["sunny", "rainy"]),
    ]);

    let result = sample.set_target("play");
    assert!(matches!(result, Err(TreeError::MissingClassColumn(_))));
}


#[test]
fn distinct_values_follow_first_encountered_order() {
    let feature = Feature::from_values(
        "weather",
        ["rainy", "sunny", "rainy", "cloudy", "sunny"],
    );

    assert_eq!(feature.distinct_value_count(), 3);

    let rows = (0..feature.len()).collect::<Vec<_>>();
    assert_eq!(
        feature.distinct_values(&rows),
        vec!["rainy", "sunny", "cloudy"],
    );

    // Restricting the rows restricts the observed values.
    assert_eq!(feature.distinct_values(&[1, 3]), vec!["sunny", "cloudy"]);
}


#[test]
fn subset_preserves_row_order() {
    let sample = Sample::from_features(vec![
        Feature::from_values("weather", ["sunny", "rainy", "cloudy"]),
        Feature::from_values("play",    ["no",    "yes",   "yes"   ]),
    ])
    .set_target("play")
    .unwrap();

    let subset = sample.subset(&[2, 0]);
    assert_eq!(subset.shape(), (2, 1));
    assert_eq!(&subset["weather"][0], "cloudy");
    assert_eq!(&subset["weather"][1], "sunny");
    assert_eq!(&subset.target().unwrap()[0], "yes");
}


#[test]
fn from_dataframe_reads_string_columns() {
    let s1 = Series::new("weather", &["sunny", "rainy", "rainy", "sunny"]);
    let s2 = Series::new("play", &["no", "yes", "yes", "no"]);
    let df = DataFrame::new(vec![s1, s2]).unwrap();

    let sample = Sample::from_dataframe(df)
        .set_target("play")
        .unwrap();
    assert_eq!(sample.shape(), (4, 1));
    assert_eq!(&sample["weather"][0], "sunny");

    let f = DecisionTree::new().fit(&sample).unwrap();
    assert_eq!(accuracy(&f, &sample).unwrap(), 1.0);
}


#[test]
fn sample_reader_reads_a_csv_file() {
    let path = std::env::temp_dir().join("arbol_weather.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "weather,wind,play").unwrap();
    writeln!(file, "sunny,weak,no").unwrap();
    writeln!(file, "rainy,strong,yes").unwrap();
    writeln!(file, "rainy,weak,yes").unwrap();
    drop(file);

    let sample = SampleReader::new()
        .file(&path)
        .has_header(true)
        .target_feature("play")
        .read()
        .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(sample.shape(), (3, 2));
    assert_eq!(&sample["weather"][1], "rainy");
    assert_eq!(&sample.target().unwrap()[2], "yes");
}


#[test]
fn csv_without_header_gets_placeholder_names() {
    let path = std::env::temp_dir().join("arbol_headerless.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "sunny,no").unwrap();
    writeln!(file, "rainy,yes").unwrap();
    drop(file);

    let sample = Sample::from_csv(&path, false).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(sample.shape(), (2, 2));
    assert_eq!(&sample["Feat. [1]"][0], "sunny");
    assert_eq!(&sample["Feat. [2]"][1], "yes");
}


#[test]
fn reader_without_target_keeps_the_sample_unlabeled() {
    let path = std::env::temp_dir().join("arbol_unlabeled.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "weather").unwrap();
    writeln!(file, "sunny").unwrap();
    drop(file);

    let sample = SampleReader::<_, &str>::new()
        .file(&path)
        .has_header(true)
        .read()
        .unwrap();
    std::fs::remove_file(&path).ok();

    assert!(sample.target().is_none());
    assert_eq!(sample.shape(), (1, 1));
}
