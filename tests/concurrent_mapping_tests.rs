//! Mapping many records in parallel with a shared configuration and vocabulary.

mod common;

use common::{full_record, minimal_record, test_config, test_vocabulary};
use dnb_xmetadiss::formats::{RecordSerializer, XMetaDissSerializer};
use dnb_xmetadiss::record::Pid;
use dnb_xmetadiss::{map_xmetadissplus, Record};
use rayon::prelude::*;

fn numbered_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|n| {
            let mut record = if n % 2 == 0 {
                full_record()
            } else {
                minimal_record(true)
            };
            record.id = Some(format!("rec-{n:04}"));
            record.pids.insert(
                "urn".to_string(),
                Pid {
                    identifier: format!("urn:nbn:de:hbz:6-rec{n:04}"),
                    provider: None,
                },
            );
            record
        })
        .collect()
}

#[test]
fn test_parallel_matches_sequential() {
    let records = numbered_records(64);
    let config = test_config();
    let vocabulary = test_vocabulary();

    let sequential: Vec<_> = records
        .iter()
        .map(|r| map_xmetadissplus(r, &config, &vocabulary).expect("map"))
        .collect();
    let parallel: Vec<_> = records
        .par_iter()
        .map(|r| map_xmetadissplus(r, &config, &vocabulary).expect("map"))
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_shared_serializer_across_threads() {
    let records = numbered_records(32);
    let serializer = XMetaDissSerializer::new(test_config(), test_vocabulary());

    let documents: Vec<String> = records
        .par_iter()
        .map(|r| serializer.serialize(r).expect("serialize"))
        .collect();

    for (n, xml) in documents.iter().enumerate() {
        assert!(xml.contains(&format!("urn:nbn:de:hbz:6-rec{n:04}")));
        assert!(xml.contains(&format!("/records/rec-{n:04}/files-archive")));
    }
}
