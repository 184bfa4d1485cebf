use easel_canvas::coords::SurfaceBounds;

/// Shared handles a renderer needs for one frame.
///
/// `viewport` is the drawing surface in logical pixels. Shape positions are
/// already NDC by the time they reach a renderer; the viewport only feeds
/// the pixel-to-NDC conversion for point sprite sizes.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: SurfaceBounds,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: SurfaceBounds,
    ) -> Self {
        Self { device, queue, surface_format, viewport }
    }
}

/// Where a renderer records its pass: the frame's encoder plus the color
/// view it draws into.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
