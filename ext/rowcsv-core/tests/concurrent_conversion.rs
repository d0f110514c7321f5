use rowcsv_core::*;
use std::sync::Arc;
use std::thread;

use test_helpers::*;

#[test]
fn test_concurrent_converters() {
    // Threads converting disjoint slices must agree with a sequential pass
    let records = Arc::new(generate_test_records(1000, 8));
    let sequential: Vec<String> = records
        .iter()
        .map(|record| convert(Some(record)).unwrap())
        .collect();

    let num_threads = 8;
    let chunk = records.len() / num_threads;
    let mut handles = vec![];

    for thread_id in 0..num_threads {
        let records = Arc::clone(&records);
        let handle = thread::spawn(move || {
            let converter = RowConverter::new();
            records[thread_id * chunk..(thread_id + 1) * chunk]
                .iter()
                .map(|record| converter.convert_record(record).unwrap())
                .collect::<Vec<_>>()
        });
        handles.push(handle);
    }

    let mut concurrent = Vec::with_capacity(records.len());
    for handle in handles {
        concurrent.extend(handle.join().unwrap());
    }

    assert_eq!(concurrent, sequential);
}

#[test]
fn test_shared_converter_across_threads() {
    let converter = RowConverter::builder().with_delimiter(';').build().unwrap();
    let records = Arc::new(generate_test_records(200, 3));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let records = Arc::clone(&records);
            thread::spawn(move || {
                records
                    .iter()
                    .map(|record| converter.convert_record(record).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
    assert!(results[0].iter().all(|line| line.matches(';').count() == 2));
}

#[test]
fn test_par_convert_all_matches_sequential() {
    let mut records: Vec<Vec<String>> = generate_test_records(500, 4)
        .iter()
        .map(|record| record.iter().map(|field| field.to_string()).collect())
        .collect();
    records[123][2] = "not a number".to_string();
    records[400][0] = "also bad".to_string();

    let converter = RowConverter::new();

    let sequential = converter.convert_all(&records, FailurePolicy::Skip).unwrap();
    let parallel = converter.par_convert_all(&records, FailurePolicy::Skip).unwrap();
    assert_eq!(sequential, parallel);
    assert_eq!(parallel.lines.len(), 498);
    assert_eq!(
        parallel
            .rejected
            .iter()
            .map(|r| r.record_index)
            .collect::<Vec<_>>(),
        vec![123, 400]
    );

    let err = converter
        .par_convert_all(&records, FailurePolicy::Abort)
        .unwrap_err();
    assert_eq!(err.record_index, 123);
    assert_eq!(err.source.position(), Some(2));
}
