#![deny(clippy::all)]
#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use log::{error, info};
use thiserror::Error;
use winit::{
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop},
};

use vecplot::vec_core::viewer::Viewer;
use vecplot::{Plot, PlotConfig, PlotError, Point, Scene, Vector, VectorError, ViewerError};

const OUTPUT_DIR: &str = "output";

#[derive(Debug, Error)]
enum AppError {
    #[error("scene evaluation failed")]
    Scene(#[from] VectorError),

    #[error("plotting failed")]
    Plot(#[from] PlotError),

    #[error("viewer failed")]
    Viewer(#[from] ViewerError),

    #[error("cannot create output directory")]
    Io(#[from] std::io::Error),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new();
    let (plot, mut viewer) = match setup(&event_loop) {
        Ok(parts) => parts,
        Err(err) => {
            log_error("setup", err);
            std::process::exit(1);
        }
    };

    event_loop.run(move |event, _, control_flow| {
        // Draw the current frame
        if let Event::RedrawRequested(_) = event {
            if let Err(err) = viewer.draw(&plot) {
                log_error("draw", err);
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if viewer.input.update(&event) {
            // Close events
            if viewer.input.key_pressed(VirtualKeyCode::Escape) || viewer.input.close_requested() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(size) = viewer.input.window_resized() {
                if let Err(err) = viewer.resize(size.width, size.height) {
                    log_error("resize", err);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            viewer.window.request_redraw();
        }
    });
}

fn demo_scene() -> Scene {
    let mut scene = Scene::new();
    scene
        .insert_vector("a", Vector::position(Point::new(2.0, 3.0)))
        .insert_vector("b", Vector::position(Point::new(4.0, 8.0)))
        .insert_vector("c", Vector::position(Point::new(2.0, 5.0)))
        .insert_vector("d", Vector::position(Point::new(2.0, 5.0)));
    scene
}

fn summary(scene: &Scene) -> Result<Vec<String>, VectorError> {
    Ok(vec![
        format!("scalar product a.b = {}", scene.scalar_product("a", "b")?),
        format!("determinant a x b = {}", scene.determinant("a", "b")?),
        format!("c equals d: {}", scene.equals("c", "d")?),
    ])
}

fn setup(event_loop: &EventLoop<()>) -> Result<(Plot, Viewer), AppError> {
    let scene = demo_scene();
    for line in summary(&scene)? {
        info!("{}", line);
    }

    let shown = scene.vector("d")?;
    info!("rendering {}", shown);

    let mut plot = Plot::new(PlotConfig::default())?;
    vecplot::render(shown, &mut plot);

    std::fs::create_dir_all(OUTPUT_DIR)?;
    plot.save_png(format!("{}/vector_d.png", OUTPUT_DIR))?;

    let title = format!("vecplot-rust: d = {}", shown.end());
    let viewer = Viewer::new(&plot, &title, event_loop)?;

    Ok((plot, viewer))
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_summary_lines() {
        let lines = summary(&demo_scene()).unwrap();
        assert_eq!(
            lines,
            vec![
                "scalar product a.b = 32".to_owned(),
                "determinant a x b = 4".to_owned(),
                "c equals d: true".to_owned(),
            ]
        );
    }

    #[test]
    fn summary_needs_the_demo_names() {
        let mut scene = demo_scene();
        scene.insert_point("d", Point::new(2.0, 5.0));
        assert!(matches!(summary(&scene), Err(VectorError::TypeMismatch { .. })));
    }
}
