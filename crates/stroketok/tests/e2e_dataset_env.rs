use stroketok::config::PreprocessConfig;
use stroketok::dataset::DatasetArchive;
use stroketok::pipeline::Preprocessor;

/// Optional integration test.
///
/// Run locally with:
/// `STROKETOK_DATASET=/path/to/archive.json cargo test -p stroketok --test e2e_dataset_env -- --nocapture`
#[test]
fn dataset_env_smoke() {
    let Some(path) = std::env::var_os("STROKETOK_DATASET") else {
        eprintln!("skipping: STROKETOK_DATASET is not set");
        return;
    };

    let archive = DatasetArchive::open(&path).expect("open archive");
    assert!(!archive.train.is_empty(), "archive has no train samples");

    let pp = Preprocessor::new(&PreprocessConfig::default()).expect("default config");
    let splits = pp.prepare_splits(&archive, 0).expect("prepare splits");

    assert_eq!(splits.train.len(), archive.train.len());
    assert_eq!(splits.test.len(), archive.test.len());

    for (raw, processed) in archive.test.iter().zip(&splits.test) {
        assert_eq!(processed.observations.len(), raw.points.len());
        assert_eq!(processed.label, raw.label);
    }
}
