//! Tests for the benchmark driver: CSV layout and per-algorithm coverage.

use algobench::perf::{self, CsvSink, PerfRecord, PerformanceAnalyzer};
use algobench::{Algorithm, BenchOptions};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Small algorithms only, so the test stays fast.
const QUICK: [Algorithm; 4] = [
    Algorithm::CountBinaryDigitsRecursive,
    Algorithm::CountBinaryDigitsIterative,
    Algorithm::Factorial,
    Algorithm::GaussianElimination,
];

#[test]
fn analyze_streams_one_row_per_size() {
    let mut sink = CsvSink::from_writer(Vec::new()).unwrap();
    let mut analyzer = PerformanceAnalyzer::new(StdRng::seed_from_u64(42));
    let records = analyzer.analyze(&QUICK, &mut sink).unwrap();
    let expected: usize = QUICK.iter().map(|a| a.default_sizes().len()).sum();
    assert_eq!(records.len(), expected);

    let bytes = sink.finish().unwrap();
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["Algorithm", "InputSize", "ExecutionTimeNs"]
    );
    let parsed: Vec<PerfRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(parsed, records);
    assert_eq!(parsed[0].algorithm, "countBinaryDigitsRecursive");
    assert_eq!(parsed[0].input_size, 1);
    assert!(parsed.iter().any(|r| r.algorithm == "factorial" && r.input_size == 20));
}

#[test]
fn run_writes_file() {
    let path = std::env::temp_dir().join(format!("algobench-perf-{}.csv", std::process::id()));
    let options = BenchOptions {
        output: path.clone(),
        seed: Some(3),
        algorithms: vec![Algorithm::Factorial],
    };
    let records = perf::run(&options).unwrap();
    assert_eq!(records.len(), 5);
    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Algorithm,InputSize,ExecutionTimeNs"));
    assert_eq!(lines.count(), 5);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn every_algorithm_measures_small_inputs() {
    let mut analyzer = PerformanceAnalyzer::new(StdRng::seed_from_u64(9));
    for algorithm in Algorithm::ALL {
        let record = analyzer.measure(algorithm, 8).unwrap();
        assert_eq!(record.algorithm, algorithm.name());
        assert_eq!(record.input_size, 8);
    }
}
