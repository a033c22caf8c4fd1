use arbol::prelude::*;


fn labeled(labels: &[&str]) -> Sample {
    Sample::from_features(vec![
        Feature::from_values("class", labels.to_vec()),
    ])
    .set_target("class")
    .unwrap()
}


#[test]
fn entropy_of_a_pure_sample_is_zero() {
    let sample = labeled(&["yes", "yes", "yes", "yes"]);
    assert_eq!(class_entropy(&sample).unwrap(), 0.0);
}


#[test]
fn entropy_of_a_balanced_binary_sample_is_one() {
    let sample = labeled(&["yes", "no", "yes", "no"]);
    assert_eq!(class_entropy(&sample).unwrap(), 1.0);
}


#[test]
fn entropy_grows_with_class_diversity() {
    let pure = class_entropy(&labeled(&["a", "a", "a", "a"])).unwrap();
    let skewed = class_entropy(&labeled(&["a", "a", "a", "b"])).unwrap();
    let balanced = class_entropy(&labeled(&["a", "a", "b", "b"])).unwrap();

    assert!(pure < skewed);
    assert!(skewed < balanced);
}


#[test]
fn entropy_is_bounded_by_log2_of_the_class_count() {
    let uniform = labeled(&["a", "b", "c", "d"]);
    assert_eq!(class_entropy(&uniform).unwrap(), 2.0);

    let skewed = labeled(&["a", "a", "b", "c"]);
    let entropy = class_entropy(&skewed).unwrap();
    assert!(0.0 < entropy && entropy < 3f64.log2() + 1e-12);
}


#[test]
fn conditional_entropy_of_a_separating_feature_is_zero() {
    let sample = Sample::from_features(vec![
        Feature::from_values("weather", ["sunny", "rainy", "rainy", "sunny"]),
        Feature::from_values("play",    ["no",    "yes",   "yes",   "no"   ]),
    ])
    .set_target("play")
    .unwrap();

    assert_eq!(conditional_entropy(&sample, "weather").unwrap(), 0.0);
}


#[test]
fn conditional_entropy_of_a_constant_feature_keeps_the_class_entropy() {
    let sample = Sample::from_features(vec![
        Feature::from_values("shoes", ["on", "on", "on", "on"]),
        Feature::from_values("play",  ["no", "yes", "yes", "no"]),
    ])
    .set_target("play")
    .unwrap();

    let before = class_entropy(&sample).unwrap();
    let after = conditional_entropy(&sample, "shoes").unwrap();
    assert_eq!(before, after);
}


#[test]
fn the_split_maximizes_information_gain() {
    // `temperature` carries no information; `weather` separates perfectly.
    // The builder must pick `weather` even though it comes second.
    let sample = Sample::from_features(vec![
        Feature::from_values("temperature", ["hot", "hot", "cold", "cold"]),
        Feature::from_values("weather", ["sunny", "rainy", "sunny", "rainy"]),
        Feature::from_values("play",    ["no",    "yes",   "no",    "yes"  ]),
    ])
    .set_target("play")
    .unwrap();

    let f = DecisionTree::new().fit(&sample).unwrap();
    assert_eq!(f.root().split_feature(), Some("weather"));
}


#[test]
fn equal_gains_break_ties_by_column_order() {
    // Both columns carry the same information;
    // the first one in the schema wins.
    let sample = Sample::from_features(vec![
        Feature::from_values("first",  ["a", "b", "a", "b"]),
        Feature::from_values("second", ["a", "b", "a", "b"]),
        Feature::from_values("play",   ["no", "yes", "no", "yes"]),
    ])
    .set_target("play")
    .unwrap();

    let f = DecisionTree::new().fit(&sample).unwrap();
    assert_eq!(f.root().split_feature(), Some("first"));
}


#[test]
fn class_entropy_without_a_class_column_is_an_error() {
    let sample = Sample::from_features(vec![
        Feature::from_values("weather", ["sunny", "rainy"]),
    ]);

    let result = class_entropy(&sample);
    assert!(matches!(result, Err(TreeError::TargetNotSet)));
}


#[test]
fn conditional_entropy_of_a_missing_feature_is_an_error() {
    let sample = labeled(&["yes", "no"]);

    let result = conditional_entropy(&sample, "weather");
    assert!(matches!(result, Err(TreeError::MissingFeature(_))));
}
