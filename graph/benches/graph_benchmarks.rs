use criterion::{Criterion, black_box, criterion_group, criterion_main};

use framegraph::backend::{DummyBackend, DummyCommandBuffer};
use framegraph::graph::{DepthAccess, RenderGraph, RenderGraphConfig, RenderGraphExecuteParams};
use framegraph::{TextureDesc, TextureFormat};

#[derive(Debug, Default)]
struct BlurData {
    radius: u32,
}

fn setup() -> (RenderGraph<DummyBackend>, DummyCommandBuffer) {
    let backend = DummyBackend::new();
    let cmd = backend.command_buffer();
    let graph = RenderGraph::new(backend, RenderGraphConfig::default()).unwrap();
    (graph, cmd)
}

/// Declare a deferred-style frame: gbuffer with MRT + depth, lighting, and a
/// chain of blur passes ping-ponging between equal-sized targets.
fn declare_frame(graph: &mut RenderGraph<DummyBackend>, blur_passes: usize) {
    let albedo = graph
        .create_texture(TextureDesc::scaled(1.0, 1.0, TextureFormat::Rgba8Unorm).with_name("albedo"))
        .unwrap();
    let normal = graph
        .create_texture(TextureDesc::scaled(1.0, 1.0, TextureFormat::Rgba16Float).with_name("normal"))
        .unwrap();
    let depth = graph
        .create_texture(TextureDesc::scaled(1.0, 1.0, TextureFormat::Depth32Float).with_name("depth"))
        .unwrap();
    let lighting = graph
        .create_texture(TextureDesc::scaled(1.0, 1.0, TextureFormat::Rgba16Float).with_name("lighting"))
        .unwrap();

    {
        let mut pass = graph.add_render_pass::<()>("gbuffer").unwrap();
        pass.use_color_buffer(albedo, 0).unwrap();
        pass.use_color_buffer(normal, 1).unwrap();
        pass.use_depth_buffer(depth, DepthAccess::READ_WRITE).unwrap();
        pass.set_render_func(|_, ctx| {
            ctx.cmd.record("gbuffer");
            Ok(())
        });
    }
    {
        let mut pass = graph.add_render_pass::<()>("lighting").unwrap();
        pass.read_texture(albedo).unwrap();
        pass.read_texture(normal).unwrap();
        pass.read_texture(depth).unwrap();
        pass.use_color_buffer(lighting, 0).unwrap();
        pass.set_render_func(|_, ctx| {
            ctx.cmd.record("lighting");
            Ok(())
        });
    }

    let mut source = lighting;
    for i in 0..blur_passes {
        let target = graph
            .create_texture(TextureDesc::scaled(0.5, 0.5, TextureFormat::Rgba16Float))
            .unwrap();
        let mut pass = graph.add_render_pass::<BlurData>(&format!("blur_{i}")).unwrap();
        pass.data().radius = i as u32 + 1;
        pass.read_texture(source).unwrap();
        pass.use_color_buffer(target, 0).unwrap();
        pass.set_render_func(|data, ctx| {
            black_box(data.radius);
            Ok(())
        });
        source = target;
    }
}

// ---------------------------------------------------------------------------
// Frame execution
// ---------------------------------------------------------------------------

fn bench_execute_small(c: &mut Criterion) {
    c.bench_function("render_graph_execute_4_passes", |b| {
        let (mut graph, mut cmd) = setup();
        let params = RenderGraphExecuteParams::new(1920, 1080);
        b.iter(|| {
            declare_frame(&mut graph, 2);
            graph.execute(&mut cmd, &params).unwrap();
            graph.backend().clear_events();
        });
    });
}

fn bench_execute_large(c: &mut Criterion) {
    c.bench_function("render_graph_execute_34_passes", |b| {
        let (mut graph, mut cmd) = setup();
        let params = RenderGraphExecuteParams::new(1920, 1080);
        b.iter(|| {
            declare_frame(&mut graph, 32);
            graph.execute(&mut cmd, &params).unwrap();
            graph.backend().clear_events();
        });
    });
}

criterion_group!(
    benches,
    bench_execute_small,
    bench_execute_large,
);
criterion_main!(benches);
