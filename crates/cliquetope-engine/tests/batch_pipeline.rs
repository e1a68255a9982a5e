//! graph6 text through the batch runner.

use std::io::Cursor;

use cliquetope_core::graph6::{self, Graph6Reader};
use cliquetope_engine::{
    BatchOptions, EngineConfig, HomotopyEngine, HomotopyType, RecordOutcome, run_batch,
};

mod support;
use support::{complete, cycle, engine, icosahedron};

fn wheel(rim: u32) -> cliquetope_core::Graph {
    let mut graph = cycle(rim);
    for v in 0..rim {
        graph.add_edge(v, rim);
    }
    graph
}

fn catalogue(graphs: &[cliquetope_core::Graph]) -> String {
    let mut text = String::from(">>graph6<<");
    for graph in graphs {
        text.push('\n');
        text.push_str(&graph6::encode(graph));
    }
    text.push('\n');
    text
}

#[test]
fn scan_conditions_select_graphs() {
    // Degree too low, dominated rim, a bad line, then one admitted graph.
    let text = catalogue(&[cycle(6), wheel(6)]) + "not graph6 ~~~\n" + &graph6::encode(&icosahedron());
    let mut engine = HomotopyEngine::new(&EngineConfig {
        clique_graph_limit: 10,
        seed: Some(9),
        ..EngineConfig::default()
    });
    let options = BatchOptions {
        only_interesting: false,
        ..BatchOptions::default()
    };

    let mut sink = Vec::new();
    let summary = run_batch(&mut engine, Graph6Reader::new(Cursor::new(text)), &options, &mut sink)
        .expect("sink never fails");

    assert_eq!(summary.seen, 4);
    assert_eq!(summary.examined, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.too_large, 1);
    assert_eq!(sink.len(), 2);
    assert!(matches!(sink[0], RecordOutcome::Failed { index: 2, .. }));
    assert_eq!(sink[1], RecordOutcome::CliqueGraphTooLarge { index: 3, limit: 10 });
}

#[test]
fn resume_skips_through_start() {
    let text = catalogue(&[cycle(4), cycle(5), cycle(6), complete(4)]);
    let options = BatchOptions {
        start: Some(1),
        min_max_degree: 0,
        only_interesting: false,
        ..BatchOptions::default()
    };

    let mut sink = Vec::new();
    let summary = run_batch(&mut engine(), Graph6Reader::new(Cursor::new(text)), &options, &mut sink)
        .expect("sink never fails");

    // C6 is examined; K4 has dominated vertices.
    assert_eq!(summary.seen, 2);
    assert_eq!(summary.examined, 1);
    let [RecordOutcome::Classified(record)] = sink.as_slice() else {
        panic!("expected one record, got {sink:?}");
    };
    assert_eq!(record.index, 2);
    assert_eq!(record.order, 6);
    assert_eq!(record.graph.homotopy, HomotopyType::sphere(1));
    assert_eq!(record.clique_graph.homotopy, HomotopyType::sphere(1));
    assert!(record.is_helly);
    assert!(!record.is_interesting());
}

#[test]
fn records_serialize_with_outcome_tag() {
    let mut sink = Vec::new();
    let options = BatchOptions {
        min_max_degree: 0,
        only_interesting: false,
        ..BatchOptions::default()
    };
    run_batch(&mut engine(), [Ok::<_, String>(cycle(5))], &options, &mut sink)
        .expect("sink never fails");

    let json = serde_json::to_value(&sink[0]).expect("serializes");
    assert_eq!(json["outcome"], "classified");
    assert_eq!(json["index"], 0);
    assert_eq!(json["graph"]["homotopy"]["kind"], "spheres");
    assert_eq!(json["graph"]["homotopy"]["dimension"], 1);
    assert!(json["clique_graph"]["stage"].is_string());
}
