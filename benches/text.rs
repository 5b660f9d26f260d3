//! Text editing performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textcore::{Editor, LayoutMetrics, Position, TextBuffer, WidthMethod};

fn sample_document(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {i}: the quick brown fox\tjumps over the lazy dog"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_buffer_creation(c: &mut Criterion) {
    c.bench_function("textbuffer_new", |b| {
        b.iter(|| TextBuffer::new());
    });

    let doc = sample_document(10_000);
    c.bench_function("textbuffer_with_text_10k_lines", |b| {
        b.iter(|| TextBuffer::with_text(black_box(&doc)));
    });

    let bytes = doc.as_bytes();
    c.bench_function("textbuffer_load_10k_lines", |b| {
        b.iter(|| TextBuffer::load(black_box(bytes)));
    });
}

fn text_buffer_edits(c: &mut Criterion) {
    let doc = sample_document(1_000);

    c.bench_function("textbuffer_insert_char_mid", |b| {
        let mut buffer = TextBuffer::with_text(&doc);
        b.iter(|| buffer.insert(black_box(Position::new(500, 20)), "x"));
    });

    c.bench_function("textbuffer_insert_delete_multiline", |b| {
        let mut buffer = TextBuffer::with_text(&doc);
        b.iter(|| {
            let start = Position::new(500, 10);
            let end = buffer.insert(start, black_box("a\nb\nc"));
            buffer.delete_range(start, end);
        });
    });

    c.bench_function("textbuffer_serialize_1k_lines", |b| {
        let buffer = TextBuffer::with_text(&doc);
        b.iter(|| black_box(&buffer).serialize());
    });
}

fn editor_typing_and_undo(c: &mut Criterion) {
    c.bench_function("editor_type_100_chars", |b| {
        b.iter(|| {
            let mut editor = Editor::new();
            for _ in 0..100 {
                editor.insert(black_box("a"));
            }
            editor
        });
    });

    c.bench_function("editor_undo_redo_100", |b| {
        let mut editor = Editor::new();
        for _ in 0..100 {
            editor.insert("a");
        }
        b.iter(|| {
            while editor.undo() {}
            while editor.redo() {}
        });
    });
}

fn editor_search(c: &mut Criterion) {
    let doc = sample_document(10_000);

    c.bench_function("editor_find_10k_lines", |b| {
        let mut editor = Editor::with_text(&doc);
        b.iter(|| editor.find(black_box("fox")));
    });

    c.bench_function("editor_next_match", |b| {
        let mut editor = Editor::with_text(&doc);
        editor.find("fox");
        b.iter(|| editor.next_match());
    });
}

fn layout_measurement(c: &mut Criterion) {
    let line = "fn main() {\tlet 漢字 = \"wide\"; // comment with tabs\t\tand text";
    let mono = LayoutMetrics::new(4, 8);
    let terminal = LayoutMetrics::terminal(4, WidthMethod::WcWidth);

    c.bench_function("layout_measure_width_mono", |b| {
        b.iter(|| mono.measure_width(black_box(line), 40));
    });

    c.bench_function("layout_column_at_terminal", |b| {
        b.iter(|| terminal.column_at(black_box(line), black_box(37)));
    });
}

criterion_group!(
    benches,
    text_buffer_creation,
    text_buffer_edits,
    editor_typing_and_undo,
    editor_search,
    layout_measurement,
);
criterion_main!(benches);
