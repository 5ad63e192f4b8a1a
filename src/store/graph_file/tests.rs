// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{GraphFile, StoreError};
use crate::model::{Graph, PaletteColor};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("thalassa-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

struct GraphFileTestCtx {
    tmp: TempDir,
    file: GraphFile,
}

impl GraphFileTestCtx {
    fn new(prefix: &str) -> Self {
        let tmp = TempDir::new(prefix);
        let file = GraphFile::new(tmp.path().join("diagram.json"));
        Self { tmp, file }
    }
}

#[fixture]
fn ctx() -> GraphFileTestCtx {
    GraphFileTestCtx::new("graph-file")
}

fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    let a = graph.add_node(100.0, 100.0, "A");
    let b = graph.add_node_with(300.0, 100.0, "B", PaletteColor::Orange);
    graph
        .add_edge_with(a, b, "L1", PaletteColor::Cyan, 20.0)
        .expect("edge");
    graph
}

#[rstest]
fn save_then_load_round_trips(ctx: GraphFileTestCtx) {
    let graph = sample_graph();
    ctx.file.save(&graph).unwrap();

    let loaded = ctx.file.load().unwrap();
    assert_eq!(loaded.nodes().len(), 2);
    assert_eq!(loaded.edges().len(), 1);
    assert_eq!(loaded.nodes()[1].color(), PaletteColor::Orange);
    assert_eq!(loaded.edges()[0].label(), "L1");
    assert_eq!(loaded.edges()[0].thickness(), 20.0);
}

#[rstest]
fn save_leaves_no_temp_files_behind(ctx: GraphFileTestCtx) {
    ctx.file.save(&sample_graph()).unwrap();

    let entries: Vec<_> = std::fs::read_dir(ctx.tmp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["diagram.json".to_owned()]);
}

#[rstest]
fn save_overwrites_previous_content(ctx: GraphFileTestCtx) {
    ctx.file.save(&sample_graph()).unwrap();
    ctx.file.save(&Graph::new()).unwrap();

    let loaded = ctx.file.load().unwrap();
    assert!(loaded.nodes().is_empty());
    assert!(loaded.edges().is_empty());
}

#[rstest]
fn save_creates_missing_parent_directories(ctx: GraphFileTestCtx) {
    let nested = GraphFile::new(ctx.tmp.path().join("deep/down/diagram.json"));
    nested.save(&sample_graph()).unwrap();
    assert_eq!(nested.load().unwrap().nodes().len(), 2);
}

#[rstest]
fn load_of_a_missing_file_is_an_io_error(ctx: GraphFileTestCtx) {
    let err = ctx.file.load().unwrap_err();
    match err {
        StoreError::Io { source, .. } => {
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected Io, got: {other:?}"),
    }
}

#[rstest]
fn load_of_a_garbage_file_is_a_format_error(ctx: GraphFileTestCtx) {
    std::fs::write(ctx.file.path(), "not a diagram").unwrap();

    let err = ctx.file.load().unwrap_err();
    assert!(matches!(err, StoreError::Format { .. }));
}

#[rstest]
fn shared_endpoints_stay_shared_after_load(ctx: GraphFileTestCtx) {
    let mut graph = Graph::new();
    let a = graph.add_node(0.0, 0.0, "a");
    let b = graph.add_node(100.0, 0.0, "b");
    let c = graph.add_node(200.0, 0.0, "c");
    graph.add_edge(a, b, "ab").expect("ab");
    graph.add_edge(b, c, "bc").expect("bc");

    ctx.file.save(&graph).unwrap();
    let mut loaded = ctx.file.load().unwrap();

    let shared = loaded.edges()[0].to();
    assert_eq!(shared, loaded.edges()[1].from());

    // Mutating the shared node is visible through both edges.
    loaded.node_mut(shared).unwrap().set_position(7.0, 8.0);
    let via_first = loaded.node(loaded.edges()[0].to()).unwrap();
    assert_eq!((via_first.x(), via_first.y()), (7.0, 8.0));
}
