use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Knobs for bringing up the GPU behind the canvas.
///
/// Defaults suit most uses; the studio binary overrides individual fields
/// (it asks for a non-sRGB surface so stamped colors land on screen exactly
/// as authored).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Ask for an sRGB surface first. With `false` the plain 8-bit formats
    /// rank first and channel values pass through unencoded.
    pub prefer_srgb: bool,

    /// Swap behavior. FIFO is universally available and paces redraws to
    /// the display.
    pub present_mode: wgpu::PresentMode,

    /// Compositor alpha handling. `None` takes the first mode the surface
    /// supports; an unsupported request falls back the same way.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Device features to require. Stays empty unless a pipeline needs one.
    pub required_features: wgpu::Features,

    /// Device limits to require.
    pub required_limits: wgpu::Limits,

    /// How many frames may be in flight. A hint, not a guarantee.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// The device, queue, and configured surface for one window.
///
/// The surface borrows the window for `'w`; the runtime keeps the window
/// alive at least as long as this value.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
}

/// One acquired swapchain image plus the encoder recording into it.
///
/// Short-lived: the held surface texture blocks the next acquisition until
/// `Gpu::submit` consumes this.
pub struct GpuFrame {
    pub texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What to do after `begin_frame` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was reconfigured in place; try again next frame.
    Reconfigured,
    /// Transient failure; drop this frame.
    SkipFrame,
    /// Unrecoverable (out of memory); shut down.
    Fatal,
}

impl<'w> Gpu<'w> {
    /// Brings up the adapter, device, and surface for `window`.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(
            size.width > 0 && size.height > 0,
            "cannot create a surface for a zero-sized window"
        );

        // All backends; wgpu picks the native one for the platform.
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("easel device"),
                required_features: init.required_features,
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = pick_surface_format(&caps.formats, init.prefer_srgb)
            .context("surface reports no supported formats")?;
        let alpha_mode = pick_alpha_mode(&caps.alpha_modes, init.alpha_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);

        log::debug!(
            "canvas surface ready: {:?} {}x{} {:?}",
            config.format,
            config.width,
            config.height,
            config.present_mode,
        );

        Ok(Gpu { surface, device, queue, config, size })
    }

    /// Acquires the next swapchain image and opens an encoder on it.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let texture = self.surface.get_current_texture()?;
        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("easel encoder"),
            });

        Ok(GpuFrame { texture, view, encoder })
    }

    /// Submits the frame's commands; dropping the texture presents it.
    pub fn submit(&self, frame: GpuFrame) {
        self.queue.submit(std::iter::once(frame.encoder.finish()));
        drop(frame.view);
        drop(frame.texture);
    }

    /// Applies a new drawable size.
    ///
    /// A zero-area size (minimized window) is remembered but not pushed to
    /// the surface; wgpu rejects 0x0 configurations.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Decides how to proceed after an acquisition failure.
    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        match err {
            SurfaceError::Lost | SurfaceError::Outdated => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.config);
                }
                SurfaceErrorAction::Reconfigured
            }
            SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }
}

/// Ranks the 8-bit formats by preference and takes the first supported one,
/// falling back to whatever the surface lists first.
fn pick_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    use wgpu::TextureFormat::{Bgra8Unorm, Bgra8UnormSrgb, Rgba8Unorm, Rgba8UnormSrgb};

    let ranked: &[wgpu::TextureFormat] = if prefer_srgb {
        &[Bgra8UnormSrgb, Rgba8UnormSrgb, Bgra8Unorm, Rgba8Unorm]
    } else {
        &[Bgra8Unorm, Rgba8Unorm]
    };

    ranked
        .iter()
        .copied()
        .find(|f| formats.contains(f))
        .or_else(|| formats.first().copied())
}

fn pick_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::CompositeAlphaMode as Am;
    use wgpu::TextureFormat as Tf;

    #[test]
    fn format_ranking_honors_the_srgb_flag() {
        let formats = [Tf::Bgra8UnormSrgb, Tf::Bgra8Unorm];
        assert_eq!(pick_surface_format(&formats, true), Some(Tf::Bgra8UnormSrgb));
        assert_eq!(pick_surface_format(&formats, false), Some(Tf::Bgra8Unorm));
    }

    #[test]
    fn unranked_surfaces_fall_back_to_their_first_format() {
        let formats = [Tf::Rgb10a2Unorm];
        assert_eq!(pick_surface_format(&formats, false), Some(Tf::Rgb10a2Unorm));
        assert_eq!(pick_surface_format(&[], true), None);
    }

    #[test]
    fn alpha_mode_request_applies_only_when_supported() {
        let supported = [Am::Opaque, Am::PreMultiplied];
        assert_eq!(pick_alpha_mode(&supported, Some(Am::PreMultiplied)), Am::PreMultiplied);
        assert_eq!(pick_alpha_mode(&supported, Some(Am::PostMultiplied)), Am::Opaque);
        assert_eq!(pick_alpha_mode(&supported, None), Am::Opaque);
        assert_eq!(pick_alpha_mode(&[], None), Am::Auto);
    }
}
