use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};
use winit_input_helper::WinitInputHelper;

use super::error::ViewerError;
use super::plot::Plot;

/// Window showing a finished plot.
pub struct Viewer {
    pub input: WinitInputHelper,
    pub window: Window,
    pub pixels: Pixels,
    pub width: u32,
    pub height: u32,
}

impl Viewer {
    pub fn new(plot: &Plot, title: &str, event_loop: &EventLoop<()>) -> Result<Viewer, ViewerError> {
        let width = plot.config.width;
        let height = plot.config.height;

        let window = {
            let size = LogicalSize::new(width as f64, height as f64);
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(size)
                .with_min_inner_size(size)
                .build(event_loop)?
        };
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Viewer {
            input: WinitInputHelper::new(),
            window,
            pixels,
            width,
            height,
        })
    }

    /// Copies the plot into the frame and presents it.
    pub fn draw(&mut self, plot: &Plot) -> Result<(), ViewerError> {
        let frame = self.pixels.frame_mut();
        let data = plot.data();
        if frame.len() != data.len() {
            return Err(ViewerError::FrameSize(frame.len(), data.len()));
        }
        frame.copy_from_slice(data);
        self.pixels.render()?;
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewerError> {
        self.pixels.resize_surface(width, height)?;
        Ok(())
    }
}
