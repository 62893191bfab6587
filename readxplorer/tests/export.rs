mod common;

use std::fs::File;
use std::io::Read;

use common::data_path;
use readxplorer::prelude::*;
use rstest::{
    fixture,
    rstest,
};
use tempfile::NamedTempFile;

#[fixture]
fn reference() -> Reference {
    AnnotationReaderBuilder::default()
        .read_path(data_path("annot.gff3"))
        .expect("Failed to read GFF3 annotation")
}

#[rstest]
fn test_feature_table(reference: Reference) {
    let mut sink = NamedTempFile::new().unwrap();
    let n_rows = write_feature_table(&reference, sink.as_file_mut()).unwrap();
    assert_eq!(n_rows, reference.feature_count());

    let mut content = String::new();
    File::open(sink.path())
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), n_rows + 1);
    assert_eq!(
        lines[0],
        "chromosome\ttype\tstart\tstop\tstrand\tidentifier\tlocus_tag\tgene_name\tproduct\tec_number\tparent\tdepth"
    );
    assert_eq!(lines[1], "chr1\tgene\t100\t900\t+\tgene1\tb0001\tthrL\t\t\t\t0");
    assert!(lines.contains(&"chr1\tCDS\t600\t850\t+\tcds2\t\t\t\t2.7.2.4\texon2\t3"));
    assert!(lines.contains(&"chr2\trRNA\t20\t700\t-\trna3\t\t\t\t\tgene3\t1"));
}

#[rstest]
fn test_reference_json(reference: Reference) {
    let json = serde_json::to_value(&reference).unwrap();
    assert_eq!(json["name"], "annot");
    assert_eq!(json["chromosomes"][0]["name"], "chr1");
    assert_eq!(json["chromosomes"][0]["length"], 5000);
    assert_eq!(
        json["chromosomes"][0]["features"][0]["sub_features"][0]["identifier"],
        "rna1"
    );
    assert!(json["chromosomes"][0].get("index").is_none());
}
