//! Meshparts CLI - split, slice, fuse and convert polygon meshes.
//!
//! Usage: meshparts <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Run `meshparts --help` for available commands. Set `RUST_LOG=debug` for
//! detailed logging.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use meshparts::algo::{self, ComponentOptions};
use meshparts::io::{self, Format};
use meshparts::mesh::{AdjacencyGraph, Axis, PolyMesh};

#[derive(Parser)]
#[command(name = "meshparts")]
#[command(author, version, about = "Polygon mesh splitting CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Write each connected component to its own file
    Split {
        /// Input mesh file
        input: PathBuf,

        /// Output directory
        output_dir: PathBuf,

        /// Axis along which components are numbered
        #[arg(short, long, value_enum, default_value = "x")]
        axis: AxisArg,

        /// Output format
        #[arg(short, long, value_enum, default_value = "obj")]
        format: FormatArg,

        /// File name prefix for the parts
        #[arg(short, long, default_value = "part")]
        prefix: String,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },

    /// Extract the sub-mesh spanned by a closed set of vertices
    Slice {
        /// Input mesh file
        input: PathBuf,

        /// Output mesh file
        output: PathBuf,

        /// 0-based vertex indices to keep, in output order
        #[arg(short, long, value_delimiter = ',', required = true)]
        vertices: Vec<usize>,
    },

    /// Concatenate two meshes
    Fuse {
        /// First input mesh file
        first: PathBuf,

        /// Second input mesh file
        second: PathBuf,

        /// Output mesh file
        output: PathBuf,
    },

    /// Convert a mesh to the format given by the output extension
    Convert {
        /// Input mesh file
        input: PathBuf,

        /// Output mesh file
        output: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Wavefront OBJ
    Obj,
    /// VTK XML PolyData
    Vtp,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Obj => Format::Obj,
            FormatArg::Vtp => Format::Vtp,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }

        Commands::Split {
            input,
            output_dir,
            axis,
            format,
            prefix,
            sequential,
        } => {
            cmd_split(&input, &output_dir, axis.into(), format.into(), &prefix, sequential)?;
        }

        Commands::Slice {
            input,
            output,
            vertices,
        } => {
            cmd_slice(&input, &output, &vertices)?;
        }

        Commands::Fuse {
            first,
            second,
            output,
        } => {
            cmd_fuse(&first, &second, &output)?;
        }

        Commands::Convert { input, output } => {
            let mesh = load(&input)?;
            io::save(&mesh, &output)?;
            println!("Saved: {}", output.display());
        }
    }

    Ok(())
}

fn load(input: &Path) -> Result<PolyMesh, Box<dyn std::error::Error>> {
    let mesh = io::load(input)?;
    println!(
        "Loaded: {} vertices, {} normals, {} faces",
        mesh.num_vertices(),
        mesh.num_normals(),
        mesh.num_faces()
    );
    Ok(mesh)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = io::load(input)?;

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Normals: {}", mesh.num_normals());
    println!("Faces: {}", mesh.num_faces());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x,
            min.y,
            min.z,
            max.x,
            max.y,
            max.z
        );
        let diag = max - min;
        println!("Dimensions: {:.3} x {:.3} x {:.3}", diag.x, diag.y, diag.z);
    }

    if let Some(max_len) = mesh.faces().iter().map(Vec::len).max() {
        let min_len = mesh.faces().iter().map(Vec::len).min().unwrap_or(max_len);
        println!("Face sizes: {} to {} vertices", min_len, max_len);
    }

    if let Err(e) = mesh.validate() {
        println!("Validation: {}", e);
        return Ok(());
    }
    println!("Validation: ok");

    let graph = AdjacencyGraph::new(&mesh)?;
    let components = graph.connected_components();
    let isolated = components.iter().filter(|c| c.len() == 1).count();
    println!(
        "Connected components: {} ({} isolated vertices)",
        components.len(),
        isolated
    );

    Ok(())
}

fn cmd_split(
    input: &Path,
    output_dir: &Path,
    axis: Axis,
    format: Format,
    prefix: &str,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = load(input)?;

    let options = ComponentOptions::default()
        .with_axis(axis)
        .with_parallel(!sequential);
    let mode = if sequential { "sequential" } else { "parallel" };

    println!("Splitting into connected components along {} ({})...", axis, mode);
    let start = Instant::now();
    let parts = algo::connected_components(&mesh, &options)?;
    let elapsed = start.elapsed();
    println!("Found {} components ({:.2?})", parts.len(), elapsed);

    fs::create_dir_all(output_dir)?;
    let width = parts.len().saturating_sub(1).to_string().len();
    for (i, part) in parts.iter().enumerate() {
        let path = output_dir.join(format!(
            "{}_{:0width$}.{}",
            prefix,
            i,
            format.extension(),
            width = width
        ));
        io::save(part, &path)?;
        log::debug!(
            "wrote {} ({} vertices, {} faces)",
            path.display(),
            part.num_vertices(),
            part.num_faces()
        );
    }
    println!("Saved {} files to {}", parts.len(), output_dir.display());

    Ok(())
}

fn cmd_slice(
    input: &Path,
    output: &Path,
    vertices: &[usize],
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = load(input)?;

    let part = algo::slice(&mesh, vertices)?;
    println!("Result: {} vertices, {} faces", part.num_vertices(), part.num_faces());
    io::save(&part, output)?;
    println!("Saved: {}", output.display());

    Ok(())
}

fn cmd_fuse(first: &Path, second: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let a = load(first)?;
    let b = load(second)?;

    let fused = algo::fuse(&a, &b)?;
    println!("Result: {} vertices, {} faces", fused.num_vertices(), fused.num_faces());
    io::save(&fused, output)?;
    println!("Saved: {}", output.display());

    Ok(())
}
