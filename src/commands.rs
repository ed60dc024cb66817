//! Command implementations for the `quadmark` binary

use std::path::Path;

use anyhow::{bail, Context, Result};
use quadmark_settings::{default_config_path, ConfigFormat, StyleConfig};
use quadmark_shape::{PixmapPainter, Shape, MAX_POINTS};
use tracing::{info, warn};

use crate::cli::{ConfigArgs, RenderArgs};

/// Load the style from `path`, or from the platform default location when
/// no path is given. A missing default file yields the built-in style.
pub fn resolve_config(path: Option<&Path>) -> Result<StyleConfig> {
    if let Some(path) = path {
        return StyleConfig::load_from_file(path)
            .with_context(|| format!("failed to load style config {}", path.display()));
    }
    match default_config_path() {
        Ok(path) => StyleConfig::load_or_default(&path)
            .with_context(|| format!("failed to load style config {}", path.display())),
        Err(e) => {
            warn!(error = %e, "using built-in style");
            Ok(StyleConfig::default())
        }
    }
}

/// Zoom from the command line, falling back to the config.
fn effective_scale(args: &RenderArgs, config: &StyleConfig) -> Result<f64> {
    let scale = args.scale.unwrap_or(config.canvas.scale);
    if !(scale > 0.0 && scale.is_finite()) {
        bail!("--scale must be a positive number, got {scale}");
    }
    Ok(scale)
}

/// Build the shape described by the render arguments.
pub fn build_shape(args: &RenderArgs, config: &StyleConfig) -> Result<Shape> {
    let mut style = config.to_shape_style();
    style.scale = effective_scale(args, config)?;

    let mut shape = Shape::new(style.into_shared())
        .with_rotated(args.rotated)
        .with_paint_label(args.label.is_some() || config.label.paint_label);
    shape.label = args.label.clone();
    shape.fill = args.fill;
    shape.selected = args.selected;

    if args.points.len() > MAX_POINTS {
        warn!(
            given = args.points.len(),
            kept = MAX_POINTS,
            "extra points ignored"
        );
    }
    for point in &args.points {
        shape.add_point(*point);
    }

    if args.close {
        if shape.len() < 3 {
            bail!("--close needs at least 3 points, got {}", shape.len());
        }
        shape.close();
    }

    if let Some(degrees) = args.rotate {
        if shape.center().is_none() {
            bail!("--rotate needs a closed shape");
        }
        shape.rotate(degrees.to_radians());
    }

    if let Some(index) = args.highlight {
        if index >= shape.len() {
            bail!(
                "--highlight {index} is out of range for a shape with {} points",
                shape.len()
            );
        }
        shape.highlight_vertex(index, args.mode.into());
    }

    Ok(shape)
}

/// Paint `shape` onto a fresh surface sized from the arguments or config.
pub fn paint_shape(
    shape: &mut Shape,
    args: &RenderArgs,
    config: &StyleConfig,
) -> Result<PixmapPainter> {
    let painter = match &args.image {
        Some(image) => PixmapPainter::from_image_file(image)
            .with_context(|| format!("failed to open background {}", image.display()))?,
        None => PixmapPainter::new(
            args.width.unwrap_or(config.canvas.width),
            args.height.unwrap_or(config.canvas.height),
        )?,
    };
    let mut painter = painter.with_zoom(effective_scale(args, config)? as f32);
    shape.paint(&mut painter);
    Ok(painter)
}

/// `quadmark render`
pub fn render(args: &RenderArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let mut shape = build_shape(args, &config)?;
    let painter = paint_shape(&mut shape, args, &config)?;
    painter
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        output = %args.output.display(),
        points = shape.len(),
        closed = shape.is_closed(),
        "rendered shape"
    );
    Ok(())
}

/// `quadmark config`
pub fn config(args: &ConfigArgs) -> Result<()> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if args.init {
        if path.exists() && !args.force {
            bail!(
                "{} already exists, pass --force to overwrite",
                path.display()
            );
        }
        StyleConfig::default()
            .save_to_file(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote default style to {}", path.display());
        return Ok(());
    }

    let config = StyleConfig::load_or_default(&path)
        .with_context(|| format!("failed to load style config {}", path.display()))?;
    let format = ConfigFormat::from_path(&path).unwrap_or(ConfigFormat::Toml);
    info!(path = %path.display(), "showing style config");
    print!("{}", config.to_string_as(format)?);
    Ok(())
}
