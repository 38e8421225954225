//! meshprobe CLI - point queries against triangle meshes
//!
//! Loads an OBJ mesh, places it with an optional TOML config and answers
//! containment and closest-surface-point queries.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use meshprobe_kernel::primitives::make_cube;
use meshprobe_kernel::{CastSides, MeshQuery, TriangleMesh};
use meshprobe_math::{Point3, Transform};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod obj;
mod report;

use config::Config;
use report::{BoundsReport, ClosestReport, InfoReport, InsideReport, InsideVariant};

#[derive(Parser)]
#[command(name = "meshprobe")]
#[command(about = "Containment and closest-point queries on triangle meshes", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test whether a point lies inside a closed mesh
    Inside {
        /// Mesh file (.obj)
        mesh: PathBuf,
        /// Query point in world space, as x,y,z
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Point3,
        /// Use the box-filtered +X ray test
        #[arg(long)]
        fast: bool,
        /// TOML file with [query] and [transform] tables
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find the closest surface point from a point inside a mesh
    Closest {
        /// Mesh file (.obj)
        mesh: PathBuf,
        /// Query point in world space, as x,y,z
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Point3,
        /// Cast along front normals only
        #[arg(long)]
        single: bool,
        /// TOML file with [query] and [transform] tables
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display mesh size and bounds
    Info {
        /// Mesh file (.obj)
        mesh: PathBuf,
        /// TOML file with a [transform] table
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run every query kind on a built-in cube
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Inside {
            mesh,
            point,
            fast,
            config,
            json,
        } => {
            let (mesh, config) = load(&mesh, config.as_deref())?;
            let report = run_inside(&mesh, &config, &point, fast)?;
            emit(&report, json)?;
        }
        Commands::Closest {
            mesh,
            point,
            single,
            config,
            json,
        } => {
            let (mesh, config) = load(&mesh, config.as_deref())?;
            let sides = if single {
                CastSides::Front
            } else {
                CastSides::Both
            };
            let report = run_closest(&mesh, &config, &point, sides)?;
            emit(&report, json)?;
        }
        Commands::Info { mesh, config, json } => {
            let (mesh, config) = load(&mesh, config.as_deref())?;
            emit(&run_info(&mesh, &config.transform.to_transform()), json)?;
        }
        Commands::Demo => run_demo(),
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_point(s: &str) -> Result<Point3, String> {
    let coords = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in `{s}`: {e}"))?;
    match coords[..] {
        [x, y, z] if coords.iter().all(|c| c.is_finite()) => Ok(Point3::new(x, y, z)),
        [_, _, _] => Err(format!("coordinates in `{s}` must be finite")),
        _ => Err(format!("expected x,y,z, got `{s}`")),
    }
}

fn load(mesh: &Path, config: Option<&Path>) -> Result<(TriangleMesh, Config)> {
    let config = Config::load(config)?;
    let mesh = obj::load_obj(mesh)?;
    info!(
        vertices = mesh.num_vertices(),
        triangles = mesh.num_triangles(),
        "mesh loaded"
    );
    Ok((mesh, config))
}

fn emit<T: Serialize + std::fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn run_inside(mesh: &TriangleMesh, config: &Config, point: &Point3, fast: bool) -> Result<InsideReport> {
    let query = config.query()?;
    let transform = config.transform.to_transform();
    let (variant, inside) = if fast {
        (InsideVariant::Fast, query.is_inside_fast(mesh, &transform, point))
    } else {
        (InsideVariant::Reference, query.is_inside(mesh, &transform, point))
    };
    Ok(InsideReport::new(point, variant, inside))
}

fn run_closest(
    mesh: &TriangleMesh,
    config: &Config,
    point: &Point3,
    sides: CastSides,
) -> Result<ClosestReport> {
    let query = config.query()?;
    let world = mesh.to_world(&config.transform.to_transform());
    let found = query.closest_point_world(&world, point, sides);
    Ok(ClosestReport::new(point, sides, found))
}

fn run_info(mesh: &TriangleMesh, transform: &Transform) -> InfoReport {
    InfoReport {
        vertices: mesh.num_vertices(),
        triangles: mesh.num_triangles(),
        local_bounds: BoundsReport::from_aabb(&mesh.bounds()),
        world_bounds: BoundsReport::from_aabb(&mesh.to_world(transform).bounds()),
    }
}

fn run_demo() {
    let cube = make_cube(2.0);
    let transform = Transform::translation(3.0, 0.0, 0.0).then(&Transform::rotation_z(0.5));
    let world = cube.to_world(&transform);
    let query = MeshQuery::default();

    println!("2x2x2 cube rotated 0.5 rad about Z and centred at (3, 0, 0)");
    print!("{}", run_info(&cube, &transform));

    let points = [
        Point3::new(3.0, 0.13, -0.21),
        Point3::new(3.6, 0.4, 0.8),
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(3.0, 2.0, 0.0),
    ];
    for p in &points {
        println!();
        let reference = query.is_inside_world(&world, p);
        let fast = query.is_inside_world_fast(&world, p);
        println!("{}", InsideReport::new(p, InsideVariant::Reference, reference));
        println!("{}", InsideReport::new(p, InsideVariant::Fast, fast));
        if reference {
            for sides in [CastSides::Front, CastSides::Both] {
                let found = query.closest_point_world(&world, p, sides);
                println!("{}", ClosestReport::new(p, sides, found));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use meshprobe_kernel::primitives::make_octahedron;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1,2.5,-3").unwrap(), Point3::new(1.0, 2.5, -3.0));
        assert_eq!(parse_point(" 1 , 2 , 3 ").unwrap(), Point3::new(1.0, 2.0, 3.0));
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,2,3,4").is_err());
        assert!(parse_point("1,a,3").is_err());
        assert!(parse_point("1,inf,3").is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "meshprobe", "inside", "part.obj", "--point", "-1,0,0.5", "--fast", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Inside {
                mesh,
                point,
                fast,
                config,
                json,
            } => {
                assert_eq!(mesh, PathBuf::from("part.obj"));
                assert_eq!(point, Point3::new(-1.0, 0.0, 0.5));
                assert!(fast && json);
                assert!(config.is_none());
            }
            _ => panic!("expected inside"),
        }

        let cli = Cli::try_parse_from(["meshprobe", "-vv", "closest", "m.obj", "-p", "0,0,0", "--single"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Closest { single: true, .. }));

        assert!(Cli::try_parse_from(["meshprobe", "inside", "m.obj"]).is_err());
    }

    #[test]
    fn test_run_inside_uses_config_transform() {
        let cube = make_cube(2.0);
        let config = Config::from_toml_str("[transform]\ntranslation = [10.0, 0.0, 0.0]\n").unwrap();
        let p = Point3::new(10.2, 0.13, -0.21);
        for fast in [false, true] {
            assert!(run_inside(&cube, &config, &p, fast).unwrap().inside);
            assert!(!run_inside(&cube, &Config::default(), &p, fast).unwrap().inside);
        }
    }

    #[test]
    fn test_run_closest() {
        let mesh = make_octahedron(1.0);
        let p = Point3::new(0.1, 0.1, 0.1);
        let report = run_closest(&mesh, &Config::default(), &p, CastSides::Both).unwrap();
        let hit = report.closest.unwrap();
        // Distance to the plane x + y + z = 1
        assert_relative_eq!(hit.distance, 0.7 / 3f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_run_info() {
        let info = run_info(&make_cube(2.0), &Transform::scale(2.0, 1.0, 1.0));
        assert_eq!(info.vertices, 8);
        assert_eq!(info.triangles, 12);
        assert_eq!(info.local_bounds.unwrap().max, [1.0, 1.0, 1.0]);
        assert_eq!(info.world_bounds.unwrap().min, [-2.0, -1.0, -1.0]);

        let empty = run_info(&TriangleMesh::default(), &Transform::identity());
        assert!(empty.local_bounds.is_none() && empty.world_bounds.is_none());
    }
}
