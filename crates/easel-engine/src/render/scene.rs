use easel_canvas::coords::PixelScale;
use easel_canvas::scene::{Primitive, Scene};

use super::primitives::point::{PointInstance, PointPipeline};
use super::primitives::triangle::{TrianglePipeline, TriangleVertex};
use super::{RenderCtx, RenderTarget};

/// Draws a [`Scene`] through the point and triangle pipelines.
///
/// Every frame the whole scene is re-tessellated into two staging buffers
/// (point instances, triangle vertices) plus a span list recording one draw
/// call per shape in paint order. The spans then replay inside a single
/// render pass, switching pipelines whenever consecutive shapes change
/// primitive kind. A single pass keeps append-order layering correct across
/// mixed shape kinds; per-kind passes would reorder overlaps.
///
/// Staging vectors and GPU buffers are reused across frames; buffer capacity
/// grows in powers of two.
#[derive(Default)]
pub struct SceneRenderer {
    points: PointPipeline,
    triangles: TrianglePipeline,

    point_instances: Vec<PointInstance>,
    triangle_vertices: Vec<TriangleVertex>,
    spans: Vec<DrawSpan>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tessellates and draws `scene`. The surface must already hold this
    /// frame's clear; the pass loads it and draws on top.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, scene: &Scene) {
        self.point_instances.clear();
        self.triangle_vertices.clear();
        self.spans.clear();

        stage_scene(
            scene,
            ctx.viewport.pixel_scale(),
            &mut self.point_instances,
            &mut self.triangle_vertices,
            &mut self.spans,
        );

        if self.spans.is_empty() {
            return;
        }

        self.points.prepare(ctx, &self.point_instances);
        self.triangles.prepare(ctx, &self.triangle_vertices);
        if !self.points.is_ready() || !self.triangles.is_ready() {
            return;
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("easel scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let mut bound: Option<SpanKind> = None;
        for span in &self.spans {
            if bound != Some(span.kind) {
                let ok = match span.kind {
                    SpanKind::Points => self.points.bind(&mut rpass),
                    SpanKind::Triangles => self.triangles.bind(&mut rpass),
                };
                if !ok {
                    continue;
                }
                bound = Some(span.kind);
            }

            match span.kind {
                SpanKind::Points => rpass.draw_indexed(0..6, 0, span.start..span.end),
                SpanKind::Triangles => rpass.draw(span.start..span.end, 0..1),
            }
        }
    }
}

// ── staging ───────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum SpanKind {
    Points,
    Triangles,
}

/// One draw call: a contiguous range in the staging buffer of its kind
/// (instances for points, vertices for triangles).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct DrawSpan {
    kind: SpanKind,
    start: u32,
    end: u32,
}

/// Flattens the scene in paint order into the staging buffers, recording one
/// span per shape. Shapes that tessellate to no geometry (degenerate
/// circles) produce no span.
fn stage_scene(
    scene: &Scene,
    scale: PixelScale,
    points: &mut Vec<PointInstance>,
    triangles: &mut Vec<TriangleVertex>,
    spans: &mut Vec<DrawSpan>,
) {
    for shape in scene.iter_in_paint_order() {
        match shape.tessellate(scale) {
            Primitive::Points { center, size, color } => {
                let start = points.len() as u32;
                points.push(PointInstance {
                    center: [center.x, center.y],
                    size,
                    color: [color.r, color.g, color.b, color.a],
                });
                spans.push(DrawSpan {
                    kind: SpanKind::Points,
                    start,
                    end: start + 1,
                });
            }
            Primitive::Triangles { vertices, color } => {
                let start = triangles.len() as u32;
                let rgba = [color.r, color.g, color.b, color.a];
                for v in vertices {
                    triangles.push(TriangleVertex {
                        position: [v.x, v.y],
                        color: rgba,
                    });
                }
                let end = triangles.len() as u32;
                if end > start {
                    spans.push(DrawSpan {
                        kind: SpanKind::Triangles,
                        start,
                        end,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_canvas::coords::Vec2;
    use easel_canvas::paint::Color;
    use easel_canvas::scene::shapes::{Circle, Point, Triangle};
    use easel_canvas::scene::Shape;

    fn scale() -> PixelScale {
        PixelScale { x: 2.0 / 400.0, y: 2.0 / 400.0 }
    }

    fn stage(scene: &Scene) -> (Vec<PointInstance>, Vec<TriangleVertex>, Vec<DrawSpan>) {
        let (mut p, mut t, mut s) = (Vec::new(), Vec::new(), Vec::new());
        stage_scene(scene, scale(), &mut p, &mut t, &mut s);
        (p, t, s)
    }

    #[test]
    fn one_span_per_shape_in_paint_order() {
        let mut scene = Scene::new();
        scene.push_point(Vec2::zero(), Color::white(), 5.0);
        scene.push_triangle(Vec2::new(0.5, 0.5), Color::red(), 10.0);
        scene.push_point(Vec2::new(-0.5, 0.0), Color::green(), 8.0);
        scene.push_circle(Vec2::zero(), Color::white(), 20.0, 6);

        let (points, triangles, spans) = stage(&scene);

        assert_eq!(points.len(), 2);
        assert_eq!(triangles.len(), 3 + 6 * 3);
        let kinds: Vec<SpanKind> = spans.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SpanKind::Points,
                SpanKind::Triangles,
                SpanKind::Points,
                SpanKind::Triangles,
            ]
        );
    }

    #[test]
    fn spans_are_contiguous_per_buffer() {
        let mut scene = Scene::new();
        scene.push_triangle(Vec2::zero(), Color::red(), 5.0);
        scene.push_point(Vec2::zero(), Color::white(), 5.0);
        scene.push_triangle(Vec2::zero(), Color::red(), 5.0);
        scene.push_point(Vec2::zero(), Color::white(), 5.0);

        let (_, _, spans) = stage(&scene);

        // Triangle spans cover 0..3 and 3..6; point spans 0..1 and 1..2.
        assert_eq!(spans[0], DrawSpan { kind: SpanKind::Triangles, start: 0, end: 3 });
        assert_eq!(spans[1], DrawSpan { kind: SpanKind::Points, start: 0, end: 1 });
        assert_eq!(spans[2], DrawSpan { kind: SpanKind::Triangles, start: 3, end: 6 });
        assert_eq!(spans[3], DrawSpan { kind: SpanKind::Points, start: 1, end: 2 });
    }

    #[test]
    fn point_instances_carry_center_size_and_color() {
        let mut scene = Scene::new();
        scene.push(Shape::Point(Point::new(
            Vec2::new(0.25, -0.75),
            Color::new(0.2, 0.4, 0.6, 0.8),
            12.0,
        )));

        let (points, _, _) = stage(&scene);
        assert_eq!(
            points[0],
            PointInstance {
                center: [0.25, -0.75],
                size: 12.0,
                color: [0.2, 0.4, 0.6, 0.8],
            }
        );
    }

    #[test]
    fn preview_stages_last() {
        let mut scene = Scene::new();
        scene.push_triangle(Vec2::zero(), Color::red(), 5.0);
        scene.set_preview(Shape::Point(Point::new(Vec2::zero(), Color::white(), 5.0)));

        let (_, _, spans) = stage(&scene);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].kind, SpanKind::Points);
    }

    #[test]
    fn degenerate_circle_stages_no_span() {
        let mut scene = Scene::new();
        scene.push(Shape::Circle(Circle::new(Vec2::zero(), Color::white(), 10.0, 0)));
        scene.push_point(Vec2::zero(), Color::white(), 5.0);

        let (points, triangles, spans) = stage(&scene);
        assert_eq!(points.len(), 1);
        assert!(triangles.is_empty());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, SpanKind::Points);
    }

    #[test]
    fn explicit_triangle_vertices_pass_through_untouched() {
        let corners = [
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(0.0, 1.0),
        ];
        let mut scene = Scene::new();
        scene.push(Shape::Triangle(Triangle::from_vertices(corners, Color::red())));

        let (_, triangles, _) = stage(&scene);
        assert_eq!(triangles.len(), 3);
        for (v, c) in triangles.iter().zip(corners) {
            assert_eq!(v.position, [c.x, c.y]);
            assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn empty_scene_stages_nothing() {
        let (points, triangles, spans) = stage(&Scene::new());
        assert!(points.is_empty());
        assert!(triangles.is_empty());
        assert!(spans.is_empty());
    }
}
