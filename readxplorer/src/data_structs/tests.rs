use std::str::FromStr;

use super::*;

fn feature(
    feature_type: FeatureType,
    start: u32,
    stop: u32,
    strand: Strand,
) -> Feature {
    Feature::new(feature_type, start, stop, strand)
}

#[test]
fn test_strand_from_str() {
    assert_eq!(Strand::from_str("+").unwrap(), Strand::Forward);
    assert_eq!(Strand::from_str("-").unwrap(), Strand::Reverse);
    assert_eq!(Strand::from_str(".").unwrap(), Strand::Forward);
    assert_eq!(Strand::from_str("?").unwrap(), Strand::Forward);
    assert_eq!(Strand::Reverse.to_string(), "-");
}

#[test]
fn test_strand_from_bio() {
    use bio::bio_types::strand::Strand as BioStrand;

    assert_eq!(Strand::from(Some(BioStrand::Reverse)), Strand::Reverse);
    assert_eq!(Strand::from(Some(BioStrand::Forward)), Strand::Forward);
    assert_eq!(Strand::from(Some(BioStrand::Unknown)), Strand::Forward);
    assert_eq!(Strand::from(None::<BioStrand>), Strand::Forward);
}

#[test]
fn test_feature_type_from_str() {
    let cases = [
        ("gene", FeatureType::Gene),
        ("Pseudogene", FeatureType::Gene),
        ("CDS", FeatureType::Cds),
        ("exon", FeatureType::Exon),
        ("mRNA", FeatureType::MRna),
        ("transcript", FeatureType::MRna),
        ("rRNA", FeatureType::RRna),
        ("tRNA", FeatureType::TRna),
        ("misc_RNA", FeatureType::MiscRna),
        ("misc-RNA", FeatureType::MiscRna),
        ("ncRNA", FeatureType::NcRna),
        ("lnc_RNA", FeatureType::NcRna),
        ("repeat_unit", FeatureType::RepeatUnit),
        ("source", FeatureType::Source),
        ("region", FeatureType::Source),
        ("five_prime_UTR", FeatureType::Undefined),
        ("", FeatureType::Undefined),
    ];
    for (input, expected) in cases {
        assert_eq!(FeatureType::from_str(input).unwrap(), expected, "{}", input);
    }
}

#[test]
fn test_feature_type_display_parses_back() {
    let all = [
        FeatureType::Gene,
        FeatureType::Cds,
        FeatureType::Exon,
        FeatureType::MRna,
        FeatureType::RRna,
        FeatureType::TRna,
        FeatureType::MiscRna,
        FeatureType::NcRna,
        FeatureType::RepeatUnit,
        FeatureType::Source,
        FeatureType::Undefined,
    ];
    for feature_type in all {
        let parsed = FeatureType::from_str(&feature_type.to_string()).unwrap();
        assert_eq!(parsed, feature_type);
    }
    assert!(FeatureType::TRna.is_rna());
    assert!(!FeatureType::Cds.is_rna());
}

#[test]
fn test_feature_normalized_swaps_reversed_coordinates() {
    let f = feature(FeatureType::Gene, 500, 100, Strand::Reverse).normalized();
    assert_eq!((f.start(), f.stop()), (100, 500));
    assert_eq!(f.length(), 401);

    let reversed = feature(FeatureType::Gene, 500, 100, Strand::Reverse);
    assert_eq!(reversed.length(), 0);
}

#[test]
fn test_feature_contains_requires_strand() {
    let gene = feature(FeatureType::Gene, 100, 200, Strand::Forward);
    let inner = feature(FeatureType::Cds, 120, 180, Strand::Forward);
    let opposite = feature(FeatureType::Cds, 120, 180, Strand::Reverse);
    let overhang = feature(FeatureType::Cds, 90, 180, Strand::Forward);

    assert!(gene.contains(&inner));
    assert!(gene.contains(&gene.clone()));
    assert!(!gene.contains(&opposite));
    assert!(!gene.contains(&overhang));
    assert!(gene.overlaps(200, 300));
    assert!(!gene.overlaps(201, 300));
}

#[test]
fn test_feature_traversal() {
    let cds = feature(FeatureType::Cds, 120, 180, Strand::Forward)
        .with_identifier(Some("cds1".into()));
    let exon = feature(FeatureType::Exon, 110, 190, Strand::Forward)
        .with_identifier(Some("exon1".into()))
        .with_sub_features(vec![cds]);
    let mrna = feature(FeatureType::MRna, 100, 200, Strand::Forward)
        .with_identifier(Some("mrna1".into()))
        .with_sub_features(vec![exon]);
    let gene = feature(FeatureType::Gene, 100, 200, Strand::Forward)
        .with_identifier(Some("gene1".into()))
        .with_sub_features(vec![
            mrna,
            feature(FeatureType::RRna, 150, 160, Strand::Forward)
                .with_identifier(Some("rrna1".into())),
        ]);

    assert_eq!(gene.count(), 5);
    let ids = gene
        .iter()
        .map(|f| f.identifier().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["gene1", "mrna1", "exon1", "cds1", "rrna1"]);

    let nested = gene.iter_nested().collect::<Vec<_>>();
    assert_eq!(nested[3].depth, 3);
    assert_eq!(nested[3].parent.unwrap().identifier(), Some("exon1"));
    assert_eq!(nested[4].depth, 1);
    assert!(nested[0].parent.is_none());

    let flat = gene.into_flat();
    assert_eq!(flat.len(), 5);
    assert!(flat.iter().all(|f| f.sub_features().is_empty()));
    assert_eq!(flat[0].identifier(), Some("gene1"));
}

#[test]
fn test_sort_features_natural_order() {
    let mut features = vec![
        feature(FeatureType::Gene, 200, 300, Strand::Forward),
        feature(FeatureType::Gene, 100, 400, Strand::Forward),
        feature(FeatureType::Gene, 100, 300, Strand::Reverse),
        feature(FeatureType::Gene, 100, 300, Strand::Forward),
    ];
    sort_features(&mut features);
    let keys = features
        .iter()
        .map(|f| (f.start(), f.stop(), f.strand()))
        .collect::<Vec<_>>();
    assert_eq!(keys, vec![
        (100, 300, Strand::Forward),
        (100, 300, Strand::Reverse),
        (100, 400, Strand::Forward),
        (200, 300, Strand::Forward),
    ]);
}

#[test]
fn test_feature_json() {
    let gene = feature(FeatureType::Gene, 100, 200, Strand::Reverse)
        .with_identifier(Some("gene1".into()))
        .with_sub_features(vec![feature(
            FeatureType::Cds,
            110,
            190,
            Strand::Reverse,
        )]);
    let json = serde_json::to_value(&gene).unwrap();
    assert_eq!(json["type"], "gene");
    assert_eq!(json["strand"], "-");
    assert_eq!(json["identifier"], "gene1");
    assert_eq!(json["sub_features"][0]["type"], "CDS");
    assert!(json.get("product").is_none());

    let back: Feature = serde_json::from_value(json).unwrap();
    assert_eq!(back, gene);
}

#[test]
fn test_chromosome_queries() {
    let chr = Chromosome::new("chr1", 1000, vec![
        feature(FeatureType::Gene, 1, 100, Strand::Forward).with_sub_features(vec![
            feature(FeatureType::MRna, 1, 100, Strand::Forward),
        ]),
        feature(FeatureType::Gene, 200, 300, Strand::Reverse),
        feature(FeatureType::Gene, 250, 400, Strand::Forward),
    ]);
    assert_eq!(chr.feature_count(), 4);
    assert_eq!(chr.iter_all().count(), 4);

    let hits = chr.features_in(100, 200);
    assert_eq!(
        hits.iter().map(|f| f.start()).collect::<Vec<_>>(),
        vec![1, 200]
    );
    assert!(chr.features_in(101, 199).is_empty());
    assert_eq!(chr.features_in(260, 260).len(), 2);

    let reference = Reference::new(Some("test".into()), vec![chr]);
    let region: Region = "chr1:300-1000".parse().unwrap();
    assert_eq!(reference.features_in(&region).len(), 2);
    let missing: Region = "chr2:1-10".parse().unwrap();
    assert!(reference.features_in(&missing).is_empty());

    let counts = reference.type_counts();
    assert_eq!(counts[&FeatureType::Gene], 3);
    assert_eq!(counts[&FeatureType::MRna], 1);
}
