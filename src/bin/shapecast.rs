use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;
use shapecast::host::model::HostElement;
use shapecast::render::raster::Bitmap;
use shapecast::render::slice::SliceGuides;
use shapecast::{
    Document, GraphicItem, InMemoryWriter, Matrix2D, Point2D, PublishConfig, ResourceId, Rgba8,
    ShapeGraphic, SymbolRecord, classify_region,
};

#[derive(Parser, Debug)]
#[command(name = "shapecast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Publish every symbol of a document into a directory (PNGs + manifest.json).
    Publish(PublishArgs),
    /// Print the encoding strategy chosen for every shape region.
    Classify(ClassifyArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Publish config JSON replacing the document's config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Force the filled-shape optimization on (curves become straight lines).
    #[arg(long)]
    optimize: bool,

    /// Apply element matrices to shape geometry before runs are combined.
    #[arg(long)]
    compose_run_transforms: bool,

    /// Sub-pixel precision (fractional bits) for bitmap masks.
    #[arg(long)]
    subpixel_shift: Option<u32>,

    /// Maximum bitmap side length in pixels.
    #[arg(long)]
    max_bitmap_side: Option<u32>,
}

#[derive(Parser, Debug)]
struct PublishArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Publish(args) => cmd_publish(args),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_document(path: &Path, overrides: &ConfigArgs) -> anyhow::Result<Document> {
    let mut doc = Document::from_path(path)
        .with_context(|| format!("load document '{}'", path.display()))?;

    if let Some(cfg) = &overrides.config {
        doc.config = PublishConfig::from_path(cfg)
            .with_context(|| format!("load config '{}'", cfg.display()))?;
    }
    if overrides.optimize {
        doc.config.filled_shape_optimization = true;
    }
    if overrides.compose_run_transforms {
        doc.config.compose_run_transforms = true;
    }
    if let Some(shift) = overrides.subpixel_shift {
        doc.config.subpixel_shift = shift;
    }
    if let Some(side) = overrides.max_bitmap_side {
        doc.config.max_bitmap_side = side;
    }
    doc.config.validate().context("validate config")?;
    Ok(doc)
}

#[derive(Serialize)]
struct Manifest {
    shapes: Vec<ShapeEntry>,
    text_fields: Vec<TextFieldEntry>,
    library_items: Vec<LibraryItemEntry>,
    symbols: Vec<SymbolRecord>,
}

#[derive(Serialize)]
struct ShapeEntry {
    id: ResourceId,
    items: Vec<ItemEntry>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ItemEntry {
    Contour {
        points: Vec<Point2D>,
        color: Rgba8,
    },
    Triangles {
        triangles: Vec<[Point2D; 4]>,
        color: Rgba8,
    },
    Bitmap {
        file: String,
        width: u32,
        height: u32,
        transform: Matrix2D,
    },
    Sliced {
        file: String,
        width: u32,
        height: u32,
        transform: Matrix2D,
        guides: SliceGuides,
    },
}

#[derive(Serialize)]
struct TextFieldEntry {
    id: ResourceId,
    #[serde(flatten)]
    style: shapecast::host::model::TextFieldStyle,
}

#[derive(Serialize)]
struct LibraryItemEntry {
    id: ResourceId,
    name: String,
}

fn cmd_publish(args: PublishArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path, &args.config)?;

    let mut writer = InMemoryWriter::new();
    let stats = shapecast::publish_document(&doc, &mut writer)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let mut shapes = Vec::with_capacity(writer.shapes.len());
    for (id, graphic) in &writer.shapes {
        shapes.push(ShapeEntry {
            id: *id,
            items: write_items(&args.out, *id, graphic)?,
        });
    }

    let manifest = Manifest {
        shapes,
        text_fields: writer
            .text_fields
            .into_iter()
            .map(|(id, style)| TextFieldEntry { id, style })
            .collect(),
        library_items: writer
            .library_items
            .into_iter()
            .map(|(id, name)| LibraryItemEntry { id, name })
            .collect(),
        symbols: writer.symbols,
    };

    let manifest_path = args.out.join("manifest.json");
    let f = std::fs::File::create(&manifest_path)
        .with_context(|| format!("create manifest '{}'", manifest_path.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(f), &manifest)
        .with_context(|| "write manifest JSON")?;

    eprintln!(
        "wrote {} ({} shapes, {} text fields, {} symbols, {} frames, {} skipped)",
        manifest_path.display(),
        stats.shapes,
        stats.text_fields,
        stats.symbols,
        stats.frames,
        stats.skipped_elements
    );
    Ok(())
}

fn write_items(dir: &Path, id: ResourceId, graphic: &ShapeGraphic) -> anyhow::Result<Vec<ItemEntry>> {
    let mut out = Vec::with_capacity(graphic.items.len());
    for (index, item) in graphic.items.iter().enumerate() {
        let entry = match item {
            GraphicItem::Contour { points, color } => ItemEntry::Contour {
                points: points.clone(),
                color: *color,
            },
            GraphicItem::Triangles { triangles, color } => ItemEntry::Triangles {
                triangles: triangles.clone(),
                color: *color,
            },
            GraphicItem::Bitmap(bitmap) => {
                let file = write_png(dir, id, index, bitmap)?;
                ItemEntry::Bitmap {
                    file,
                    width: bitmap.image.width(),
                    height: bitmap.image.height(),
                    transform: bitmap.transform,
                }
            }
            GraphicItem::Sliced { bitmap, guides } => {
                let file = write_png(dir, id, index, bitmap)?;
                ItemEntry::Sliced {
                    file,
                    width: bitmap.image.width(),
                    height: bitmap.image.height(),
                    transform: bitmap.transform,
                    guides: *guides,
                }
            }
        };
        out.push(entry);
    }
    Ok(out)
}

fn write_png(dir: &Path, id: ResourceId, index: usize, bitmap: &Bitmap) -> anyhow::Result<String> {
    let file = format!("shape_{}_{index}.png", id.0);
    let path = dir.join(&file);
    image::save_buffer_with_format(
        &path,
        bitmap.image.as_raw(),
        bitmap.image.width(),
        bitmap.image.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(file)
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path, &args.config)?;
    let mode = doc.config.curve_mode();

    for symbol in &doc.symbols {
        for (keyframe, frame) in symbol.frames.iter().enumerate() {
            let mut shapes = Vec::new();
            collect_shapes(&frame.elements, &mut shapes);
            for (element, shape) in shapes.into_iter().enumerate() {
                let filled = shape.to_filled_shape(mode).with_context(|| {
                    format!("symbol '{}' keyframe {keyframe} shape {element}", symbol.name)
                })?;
                for (region, r) in filled.regions().enumerate() {
                    println!(
                        "{}\t{keyframe}\t{element}\t{region}\t{}",
                        symbol.name,
                        strategy_name(classify_region(r))
                    );
                }
            }
        }
    }
    Ok(())
}

fn collect_shapes<'a>(
    elements: &'a [HostElement],
    out: &mut Vec<&'a shapecast::host::model::HostShape>,
) {
    for element in elements {
        match element {
            HostElement::Shape(s) => out.push(&s.shape),
            HostElement::Group(g) => collect_shapes(&g.members, out),
            _ => {}
        }
    }
}

fn strategy_name(strategy: shapecast::RegionStrategy) -> &'static str {
    use shapecast::RegionStrategy as S;
    match strategy {
        S::Invalid => "invalid",
        S::Rasterize => "rasterize",
        S::Triangulate => "triangulate",
        S::Contour => "contour",
        S::Unhandled => "unhandled",
    }
}
