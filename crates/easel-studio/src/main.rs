use winit::dpi::LogicalSize;

use easel_engine::device::GpuInit;
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::window::{Runtime, RuntimeConfig};

mod app;

use app::Studio;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    // Key bindings banner, printed before the window opens.
    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║                 EASEL  v0.1                  ║");
    println!("  ║        wgpu canvas  ·  brush stamping        ║");
    println!("  ╠══════════════════════════════════════════════╣");
    println!("  ║  click / drag  stamp with the brush          ║");
    println!("  ║  shift         preview the stamp (no commit) ║");
    println!("  ║  1 / 2 / 3     point / triangle / circle     ║");
    println!("  ║  r / g / w     red / green / white paint     ║");
    println!("  ║  - / =         brush size down / up          ║");
    println!("  ║  [ / ]         circle segments down / up     ║");
    println!("  ║  z             undo the last shape           ║");
    println!("  ║  c             clear the canvas              ║");
    println!("  ║  space         stamp the 40-triangle picture ║");
    println!("  ║  esc           quit                          ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();

    let config = RuntimeConfig {
        title:        "Easel".to_string(),
        initial_size: LogicalSize::new(400.0, 400.0),
    };

    // Non-sRGB surface: authored color values reach the screen unmodified.
    let gpu = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    Runtime::run(config, gpu, Studio::new())
}
