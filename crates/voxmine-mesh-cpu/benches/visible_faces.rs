use criterion::{Criterion, black_box, criterion_group, criterion_main};

use voxmine_blocks::{BlockCatalog, FaceLighting};
use voxmine_chunk::Chunk;
use voxmine_mesh_cpu::{MeshBuild, MeshContext, mesh_chunk};
use voxmine_world::{ChunkCoord, DEFAULT_SEED, TerrainGenerator, WorldGenParams};

fn bench_surface_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_chunk_surface");
    let catalog = BlockCatalog::default();
    let lighting = FaceLighting::standard();
    let ctx = MeshContext::new(&catalog, &lighting);
    let generator = TerrainGenerator::new(DEFAULT_SEED, WorldGenParams::default());
    let chunk = Chunk::generate(ChunkCoord::new(0, 1, 0), &generator);
    let mut scratch = MeshBuild::default();
    group.bench_function("noise_16", |b| {
        b.iter(|| {
            let out = mesh_chunk(&chunk, &ctx, None, &mut scratch);
            black_box(out);
        })
    });
    group.finish();
}

fn bench_generate_and_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_and_mesh");
    let catalog = BlockCatalog::default();
    let lighting = FaceLighting::standard();
    let ctx = MeshContext::new(&catalog, &lighting);
    let flat = TerrainGenerator::flat(DEFAULT_SEED, 24);
    let mut scratch = MeshBuild::default();
    group.bench_function("flat_24", |b| {
        b.iter(|| {
            let chunk = Chunk::generate(ChunkCoord::new(0, 1, 0), &flat);
            let out = mesh_chunk(&chunk, &ctx, None, &mut scratch);
            black_box(out);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_surface_chunk, bench_generate_and_mesh);
criterion_main!(benches);
