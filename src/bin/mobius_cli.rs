#[cfg(target_arch = "wasm32")]
fn main() {
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("mobius_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use mobius_engine::geom::{GeomMesh, GeomMetrics, StripParameters, TimingBucket};
    use mobius_engine::strip::MobiusStrip;
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};

    const USAGE: &str = r#"mobius_cli (mobius-engine)

USAGE:
  mobius_cli [options]

OPTIONS:
  --radius <R>        Centre-line radius (default 3.0)
  --width <W>         Strip width (default 1.0)
  --resolution <N>    Samples per parameter axis, at least 2 (default 100)
  --obj <path>        Write the triangulated strip as Wavefront OBJ
  --overwrite         Overwrite an existing OBJ file
  --timings           Print per-phase timings (needs `--features mesh_engine_metrics`)
  -h, --help          Show this help
"#;

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let mut params = StripParameters::default();
        let mut obj_path: Option<PathBuf> = None;
        let mut overwrite = false;
        let mut timings = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--radius" => params.radius = parse_f64("--radius", &args.value("--radius")?)?,
                "--width" => params.width = parse_f64("--width", &args.value("--width")?)?,
                "--resolution" => {
                    let raw = args.value("--resolution")?;
                    params.resolution = raw
                        .parse()
                        .map_err(|_| format!("--resolution expects a non-negative integer, got `{raw}`"))?;
                }
                "--obj" => obj_path = Some(PathBuf::from(args.value("--obj")?)),
                "--overwrite" => overwrite = true,
                "--timings" => timings = true,
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let strip = MobiusStrip::from_parameters(params).map_err(|e| e.to_string())?;
        let (report, timing_report) = strip.profile();

        println!("Surface Area: {:.4} square units", report.surface_area);
        println!("Edge Length: {:.4} units", report.edge_length);

        let mut export_metrics = GeomMetrics::default();
        export_metrics.begin();
        if let Some(path) = obj_path.as_ref() {
            let mesh = export_metrics.time(TimingBucket::Triangulation, || strip.triangle_mesh());
            write_obj_file(path, &mesh, "mobius_strip", overwrite)?;
            println!("wrote {}", path.display());
        }

        if timings {
            match (timing_report, export_metrics.end()) {
                (Some(mut report), Some(export)) => {
                    report.triangulation_ns = export.triangulation_ns;
                    println!("sampling:      {} ns", report.sampling_ns);
                    println!("surface area:  {} ns", report.surface_area_ns);
                    println!("edge length:   {} ns", report.edge_length_ns);
                    println!("triangulation: {} ns", report.triangulation_ns);
                    println!("total:         {:.3} ms", report.total_ms());
                }
                _ => eprintln!("timings unavailable: rebuild with `--features mesh_engine_metrics`"),
            }
        }

        Ok(())
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn parse_f64(flag: &str, raw: &str) -> Result<f64, String> {
        let value: f64 = raw
            .parse()
            .map_err(|_| format!("{flag} expects a number, got `{raw}`"))?;
        if !value.is_finite() {
            return Err(format!("{flag} must be finite, got `{raw}`"));
        }
        Ok(value)
    }

    fn write_obj_file(path: &Path, mesh: &GeomMesh, name: &str, overwrite: bool) -> Result<(), String> {
        mesh.validate().map_err(|e| format!("mesh validation failed: {e}"))?;

        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite existing file {} (use --overwrite)",
                path.display()
            ));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
        }

        let file = File::create(path).map_err(|e| format!("create {}: {e}", path.display()))?;
        let mut w = BufWriter::new(file);

        writeln!(w, "# mobius-engine mobius_cli").map_err(|e| format!("write obj: {e}"))?;
        writeln!(w, "o {name}").map_err(|e| format!("write obj: {e}"))?;

        for p in mesh.positions.iter().copied() {
            writeln!(w, "v {} {} {}", p[0], p[1], p[2]).map_err(|e| format!("write obj: {e}"))?;
        }

        if let Some(uvs) = mesh.uvs.as_ref() {
            for uv in uvs.iter().copied() {
                writeln!(w, "vt {} {}", uv[0], uv[1]).map_err(|e| format!("write obj: {e}"))?;
            }
        }

        if let Some(normals) = mesh.normals.as_ref() {
            for n in normals.iter().copied() {
                writeln!(w, "vn {} {} {}", n[0], n[1], n[2]).map_err(|e| format!("write obj: {e}"))?;
            }
        }

        let has_uvs = mesh.uvs.is_some();
        let has_normals = mesh.normals.is_some();

        for tri in mesh.indices.chunks_exact(3) {
            let a = tri[0] + 1;
            let b = tri[1] + 1;
            let c = tri[2] + 1;

            match (has_uvs, has_normals) {
                (true, true) => writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}"),
                (true, false) => writeln!(w, "f {a}/{a} {b}/{b} {c}/{c}"),
                (false, true) => writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}"),
                (false, false) => writeln!(w, "f {a} {b} {c}"),
            }
            .map_err(|e| format!("write obj: {e}"))?;
        }

        w.flush().map_err(|e| format!("flush {}: {e}", path.display()))
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }
    }
}
