use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use once_cell::sync::Lazy;
use quantikz_rs::instruction::Operation;
use quantikz_rs::program::latex::{RenderSettings, ToLatex};
use quantikz_rs::Circuit;

const WIDTHS: [u64; 3] = [4, 16, 64];

/// A layered circuit of `width` qubits: Hadamards, a ladder of CNOTs, rotations and measurements.
fn layered_circuit(width: u64) -> Circuit {
    let mut circuit = Circuit::new(width, width);
    for layer in 0..8 {
        circuit.add_operations((0..width).map(|q| {
            Operation::gate("h", [q]).expect("single qubit")
        }));
        circuit.add_operations((1..width).map(|q| {
            Operation::gate("cx", [q - 1, q]).expect("distinct qubits")
        }));
        circuit.add_operations((0..width).map(|q| {
            Operation::gate("rz", [q])
                .expect("single qubit")
                .with_parameters([0.125 * f64::from(layer)])
        }));
    }
    circuit.add_operations((0..width).map(|q| Operation::measure([q], [q]).expect("valid measure")));
    circuit
}

static CIRCUITS: Lazy<Vec<(u64, Circuit)>> =
    Lazy::new(|| WIDTHS.iter().map(|&width| (width, layered_circuit(width))).collect());

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let settings = [
        ("whole", RenderSettings::default()),
        (
            "slice_all",
            RenderSettings {
                slice_all: true,
                ..Default::default()
            },
        ),
        (
            "split_4",
            RenderSettings {
                subcircuit_count: Some(4),
                ..Default::default()
            },
        ),
    ];

    for (width, circuit) in CIRCUITS.iter() {
        for (name, settings) in &settings {
            group.bench_with_input(BenchmarkId::new(*name, width), circuit, |b, circuit| {
                b.iter(|| black_box(circuit.to_latex(settings)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_render);
criterion_main!(benches);
