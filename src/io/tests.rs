use std::io::Cursor;

use arcstr::ArcStr;
use csv::StringRecord;
use rstest::rstest;

use super::*;
use crate::data_structs::Strand;
use crate::error::ParseError;
use crate::store::ProbeSource;

const N_COLUMNS: usize = 33;

fn manifest_row(
    id: &str,
    chr: &str,
    coordinate: &str,
    genes: &str,
    tags: &str,
    cpg: &str,
) -> String {
    let mut fields = vec![String::new(); N_COLUMNS];
    fields[0] = id.to_string();
    fields[1] = id.to_string();
    fields[11] = chr.to_string();
    fields[12] = coordinate.to_string();
    fields[13] = "ACGTTGCA".to_string();
    fields[16] = "F".to_string();
    fields[21] = genes.to_string();
    fields[22] = "NM_000001".to_string();
    fields[23] = tags.to_string();
    fields[25] = cpg.to_string();
    fields.join(",")
}

fn manifest(rows: &[String]) -> String { manifest_with_eol(rows, "\n") }

fn manifest_with_eol(
    rows: &[String],
    eol: &str,
) -> String {
    let lines = [
        "Illumina, Inc.,,",
        "[Heading],,",
        "Descriptor File Name,HumanMethylation450_15017482_v1-2.bpm",
        "[Assay]",
        "IlmnID,Name,AddressA_ID,AddressB_ID",
    ]
    .into_iter()
    .map(str::to_string)
    .chain(rows.iter().cloned())
    .chain([
        "[Controls],,,".to_string(),
        "28684356,STAINING,Red,DNP (High)".to_string(),
    ]);
    let mut text = String::new();
    for line in lines {
        text.push_str(&line);
        text.push_str(eol);
    }
    text
}

#[test]
fn test_probe_from_record() {
    let row = manifest_row(
        "cg00000001",
        "17",
        " 43100000 ",
        "BRCA1;BRCA2",
        "TSS200;Exon;TSS200",
        "Island",
    );
    let record = StringRecord::from(row.split(',').collect::<Vec<_>>());
    let probe = probe_from_record(&record, 7).unwrap();

    assert_eq!(probe.id().as_str(), "cg00000001");
    assert_eq!(probe.chromosome().as_str(), "17");
    assert_eq!(probe.coordinate(), 43100000);
    assert_eq!(probe.strand(), Strand::Forward);
    assert_eq!(probe.sequence().as_str(), "ACGTTGCA");
    assert_eq!(probe.refseq().as_str(), "NM_000001");
    assert_eq!(probe.genes(), &vec![ArcStr::from("BRCA1"), ArcStr::from("BRCA2")]);
    assert_eq!(
        probe.location_tags(),
        &vec![ArcStr::from("TSS200"), ArcStr::from("Exon")]
    );
    assert_eq!(probe.cpg_context().as_str(), "Island");
    assert_eq!(probe.beta(), None);
}

#[test]
fn test_empty_annotations() {
    let row = manifest_row("cg00000002", "X", "500", "", "", "");
    let record = StringRecord::from(row.split(',').collect::<Vec<_>>());
    let probe = probe_from_record(&record, 1).unwrap();
    assert!(probe.genes().is_empty());
    assert!(probe.location_tags().is_empty());
    assert!(probe.cpg_context().is_empty());
}

#[test]
fn test_read_manifest_skips_non_probe_rows() {
    let text = manifest(&[
        manifest_row("cg00000001", "1", "100", "A", "Body", "Island"),
        manifest_row("ch.1.1234F", "1", "150", "", "", ""),
        manifest_row("cg00000002", "1", "200", "B", "Exon", ""),
        manifest_row("rs10796216", "1", "250", "", "", ""),
    ]);
    let store = read_manifest(Cursor::new(text)).unwrap();
    assert_eq!(store.count(), 2);
    assert!(store.get("cg00000001").is_some());
    assert!(store.lookup("ch.1.1234F").is_none());
    assert!(store.lookup("rs10796216").is_none());
}

#[test]
fn test_read_manifest_short_row() {
    let text = manifest(&[
        manifest_row("cg00000001", "1", "100", "A", "Body", "Island"),
        "cg00000002,cg00000002,1,2".to_string(),
    ]);
    let err = read_manifest(Cursor::new(text)).unwrap_err();
    let parse_err = err.downcast_ref::<ParseError>().unwrap();
    assert_eq!(parse_err, &ParseError::MissingColumns {
        line:     7,
        expected: 26,
        found:    4,
    });
}

#[rstest]
#[case::lf("\n")]
#[case::crlf("\r\n")]
fn test_read_manifest_reports_physical_line(#[case] eol: &str) {
    let text = manifest_with_eol(
        &[
            manifest_row("cg00000001", "1", "100", "A", "Body", "Island"),
            manifest_row("cg00000002", "1", "200", "B", "Exon", ""),
            manifest_row("cg00000003", "1", "not_a_number", "", "", ""),
        ],
        eol,
    );
    let store = read_manifest(Cursor::new(&text[..text.find("cg00000003").unwrap()]))
        .unwrap();
    assert_eq!(store.count(), 2);

    let err = read_manifest(Cursor::new(text)).unwrap_err();
    assert_eq!(err.downcast_ref::<ParseError>(), Some(&ParseError::InvalidCoordinate {
        line:  8,
        value: "not_a_number".to_string(),
    }));
}

#[test]
fn test_read_manifest_line_after_blank_lines() {
    let text = format!(
        "Illumina, Inc.,,\r\n\r\n\r\n{}\r\n",
        manifest_row("cg00000001", "", "100", "", "", "")
    );
    let err = read_manifest(Cursor::new(text)).unwrap_err();
    assert_eq!(err.downcast_ref::<ParseError>().map(ParseError::line), Some(4));
}

#[test]
fn test_read_manifest_invalid_coordinate() {
    let text = manifest(&[manifest_row("cg00000001", "1", "-5", "", "", "")]);
    let err = read_manifest(Cursor::new(text)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ParseError>(),
        Some(ParseError::InvalidCoordinate { value, .. }) if value == "-5"
    ));
}

#[test]
fn test_read_manifest_empty_chromosome() {
    let text = manifest(&[manifest_row("cg00000001", "", "100", "", "", "")]);
    let err = read_manifest(Cursor::new(text)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ParseError>(),
        Some(ParseError::EmptyChromosome { .. })
    ));
}

#[test]
fn test_read_manifest_duplicate_id() {
    let text = manifest(&[
        manifest_row("cg00000001", "1", "100", "", "", ""),
        manifest_row("cg00000001", "2", "300", "", "", ""),
    ]);
    let err = read_manifest(Cursor::new(text)).unwrap_err();
    let parse_err = err.downcast_ref::<ParseError>().unwrap();
    assert_eq!(parse_err.line(), 7);
}

#[test]
fn test_read_variant_exclusions_crlf() {
    let text = "PROBE\tSNP\r\ncg00000001\trs123\t3\r\ncg00000002\trs789\r\n";
    let exclusions = read_variant_exclusions(Cursor::new(text)).unwrap();
    assert_eq!(exclusions, vec![
        VariantExclusion::new("cg00000001", "rs123"),
        VariantExclusion::new("cg00000002", "rs789"),
    ]);
}

#[test]
fn test_read_variant_exclusions() {
    let text = "PROBE\tSNP\tDIST\n\
                cg00000001\trs123\t3\n\
                cg00000001\trs456\t10\n\
                cg00000002\trs789\n\
                ch.1.1234F\trs1\n";
    let exclusions = read_variant_exclusions(Cursor::new(text)).unwrap();
    assert_eq!(exclusions, vec![
        VariantExclusion::new("cg00000001", "rs123"),
        VariantExclusion::new("cg00000001", "rs456"),
        VariantExclusion::new("cg00000002", "rs789"),
    ]);
}

#[rstest]
#[case::lf("cg00000001\trs123\ncg00000002\n")]
#[case::crlf("cg00000001\trs123\r\ncg00000002\r\n")]
fn test_read_variant_exclusions_short_row(#[case] text: &str) {
    let err = read_variant_exclusions(Cursor::new(text)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ParseError>(),
        Some(ParseError::MissingColumns { line: 2, found: 1, .. })
    ));
}
